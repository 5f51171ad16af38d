//! User profile domain models.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::input::{is_missing_str, InputError, RequiredFields};

/// Represents a user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub color: String,
}

/// A profile seeded on first start. Seeded profiles cannot be deleted.
#[derive(Debug, Clone, Copy)]
pub struct DefaultUser {
    pub id: &'static str,
    pub name: &'static str,
    pub avatar: &'static str,
    pub color: &'static str,
}

/// The two system profiles every store starts with.
pub const DEFAULT_USERS: [DefaultUser; 2] = [
    DefaultUser {
        id: "akshay",
        name: "Akshay",
        avatar: "💪",
        color: "from-blue-500 to-cyan-500",
    },
    DefaultUser {
        id: "guest",
        name: "Guest",
        avatar: "🏃",
        color: "from-purple-500 to-pink-500",
    },
];

/// Returns true for ids that belong to a seeded system profile.
pub fn is_reserved_user_id(id: &str) -> bool {
    DEFAULT_USERS.iter().any(|u| u.id == id)
}

impl From<DefaultUser> for User {
    fn from(u: DefaultUser) -> Self {
        Self {
            id: u.id.to_string(),
            name: u.name.to_string(),
            avatar: u.avatar.to_string(),
            color: u.color.to_string(),
        }
    }
}

/// Request payload for creating a user.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(max = 50, message = "name must be at most 50 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 16, message = "avatar must be at most 16 characters"))]
    pub avatar: Option<String>,

    #[validate(length(max = 100, message = "color must be at most 100 characters"))]
    pub color: Option<String>,
}

impl RequiredFields for CreateUserRequest {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_missing_str(&self.name) {
            missing.push("name");
        }
        if is_missing_str(&self.avatar) {
            missing.push("avatar");
        }
        if is_missing_str(&self.color) {
            missing.push("color");
        }
        missing
    }
}

/// A validated user ready for insertion, with its derived id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub color: String,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = InputError;

    fn try_from(request: CreateUserRequest) -> Result<Self, Self::Error> {
        request.check_required()?;
        request.validate()?;

        let name = request.name.unwrap_or_default().trim().to_string();
        let id = shared::slug::derive_user_id(&name);
        if id.is_empty() {
            return Err(InputError::InvalidValue(
                "name must contain at least one letter or digit".to_string(),
            ));
        }

        Ok(Self {
            id,
            name,
            avatar: request.avatar.unwrap_or_default(),
            color: request.color.unwrap_or_default(),
        })
    }
}
