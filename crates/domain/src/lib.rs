//! Domain layer for the FitTrack backend.
//!
//! This crate contains:
//! - Domain models (User, WorkoutPackage, CustomWorkout, WorkoutLog)
//! - Per-endpoint request types and their validated counterparts
//! - Input error types

pub mod input;
pub mod models;

pub use input::{InputError, RequiredFields};
