//! Persistence layer for FitTrack.
//!
//! This crate contains:
//! - Store connection management (lazy, memoized, retried after failure)
//! - Idempotent schema provisioning with default-user seeding
//! - Entity definitions (database row mappings)
//! - Repository implementations

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
pub mod schema;

pub use db::{Connector, DatabaseConfig, SqliteConnector, Store, StoreError};
pub use repositories::RepositoryError;
