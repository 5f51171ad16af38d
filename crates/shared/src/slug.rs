//! User id derivation.
//!
//! User ids are stable slugs computed from the display name, so the same
//! name always maps to the same id.

/// Maximum length of a derived user id.
pub const MAX_USER_ID_LEN: usize = 64;

/// Derives a user id from a display name.
///
/// ASCII letters and digits are lowercased and kept, every run of other ASCII
/// characters collapses into a single `-`, and non-ASCII characters are
/// dropped. Returns an empty string when nothing usable remains.
pub fn derive_user_id(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_dash = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_dash = false;
        } else if ch.is_ascii() && !slug.is_empty() && !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.len() > MAX_USER_ID_LEN {
        slug.truncate(MAX_USER_ID_LEN);
        while slug.ends_with('-') {
            slug.pop();
        }
    }

    slug
}
