//! Shared utilities and common types for the FitTrack backend.
//!
//! This crate provides common functionality used across all other crates:
//! - User id derivation from display names
//! - Common validation logic

pub mod slug;
pub mod validation;
