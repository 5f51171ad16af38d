//! Store connection management.
//!
//! A [`Store`] owns the process-wide database handle and the schema-ready
//! state. Both are initialized lazily on first use. Concurrent first callers
//! await the same in-flight attempt and observe the same outcome. A failed
//! attempt is discarded so the next call starts a fresh one.

use std::str::FromStr;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt, Shared};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::schema;

/// Database configuration.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub connect_timeout_secs: u64,
}

/// Errors raised while bringing the store up.
///
/// Cloneable so every caller waiting on a failed attempt receives it.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Database URL is not configured (set FITTRACK__DATABASE__URL)")]
    MissingDatabaseUrl,

    #[error("Failed to connect to database: {0}")]
    Connect(#[source] Arc<sqlx::Error>),

    #[error("Failed to provision database schema: {0}")]
    Schema(#[source] Arc<sqlx::Error>),
}

impl StoreError {
    pub fn connect(err: sqlx::Error) -> Self {
        StoreError::Connect(Arc::new(err))
    }

    pub fn schema(err: sqlx::Error) -> Self {
        StoreError::Schema(Arc::new(err))
    }
}

/// Opens the underlying database handle.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self) -> Result<SqlitePool, StoreError>;
}

/// Connects to a SQLite database file (or `sqlite::memory:`).
#[derive(Debug, Clone)]
pub struct SqliteConnector {
    config: DatabaseConfig,
}

impl SqliteConnector {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Connector for SqliteConnector {
    async fn connect(&self) -> Result<SqlitePool, StoreError> {
        let url = self.config.url.trim();
        if url.is_empty() {
            return Err(StoreError::MissingDatabaseUrl);
        }

        let options = SqliteConnectOptions::from_str(url)
            .map_err(StoreError::connect)?
            .create_if_missing(true)
            .foreign_keys(true);

        // One connection for the whole process. It is never recycled, which
        // also keeps in-memory databases alive.
        SqlitePoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(self.config.connect_timeout_secs))
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(StoreError::connect)
    }
}

type Attempt<T> = Shared<BoxFuture<'static, Result<T, StoreError>>>;

/// A value produced once by a single shared attempt.
///
/// While an attempt is running, later callers join it instead of starting
/// their own. The attempt is dropped from the slot once it settles, so after
/// a failure the next caller starts over.
struct SingleFlight<T: Clone> {
    value: OnceLock<T>,
    in_flight: Mutex<Option<Attempt<T>>>,
}

impl<T> SingleFlight<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn new() -> Self {
        Self {
            value: OnceLock::new(),
            in_flight: Mutex::new(None),
        }
    }

    fn get(&self) -> Option<&T> {
        self.value.get()
    }

    async fn get_or_try_init<F>(&self, start: F) -> Result<&T, StoreError>
    where
        F: FnOnce() -> BoxFuture<'static, Result<T, StoreError>>,
    {
        if let Some(value) = self.value.get() {
            return Ok(value);
        }

        let attempt = {
            let mut slot = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(value) = self.value.get() {
                return Ok(value);
            }
            match slot.as_ref() {
                Some(attempt) => attempt.clone(),
                None => {
                    let attempt = start().shared();
                    *slot = Some(attempt.clone());
                    attempt
                }
            }
        };

        let result = attempt.clone().await;
        let value = result.map(|value| self.value.get_or_init(|| value));

        let mut slot = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.as_ref().is_some_and(|current| current.ptr_eq(&attempt)) {
            *slot = None;
        }
        value
    }
}

/// Process-wide store handle, constructed once at startup and shared by all
/// request handlers.
pub struct Store {
    connector: Arc<dyn Connector>,
    pool: SingleFlight<SqlitePool>,
    schema_ready: SingleFlight<()>,
}

impl Store {
    /// Creates a store that will connect through `connector` on first use.
    pub fn new(connector: Arc<dyn Connector>) -> Self {
        Self {
            connector,
            pool: SingleFlight::new(),
            schema_ready: SingleFlight::new(),
        }
    }

    /// Creates a store backed by SQLite.
    pub fn sqlite(config: DatabaseConfig) -> Self {
        Self::new(Arc::new(SqliteConnector::new(config)))
    }

    /// Returns the live connection handle, opening it on first call.
    #[instrument(skip(self))]
    pub async fn connection(&self) -> Result<&SqlitePool, StoreError> {
        self.pool
            .get_or_try_init(|| {
                let connector = self.connector.clone();
                async move {
                    info!("Opening database connection");
                    let result = connector.connect().await;
                    match &result {
                        Ok(_) => info!("Database connection established"),
                        Err(e) => warn!(error = %e, "Database connection failed, will retry on next call"),
                    }
                    result
                }
                .boxed()
            })
            .await
    }

    /// Provisions the schema and default users.
    ///
    /// Runs at most once successfully per store.
    #[instrument(skip(self))]
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        let pool = self.connection().await?.clone();
        self.schema_ready
            .get_or_try_init(|| {
                async move {
                    schema::provision(&pool).await.map_err(|e| {
                        warn!(error = %e, "Schema provisioning failed, will retry on next call");
                        StoreError::schema(e)
                    })
                }
                .boxed()
            })
            .await?;
        Ok(())
    }

    /// Returns the connection handle once the schema has been provisioned.
    pub async fn ready(&self) -> Result<&SqlitePool, StoreError> {
        self.ensure_schema().await?;
        self.connection().await
    }

    /// Returns true once a connection has been established.
    pub fn is_connected(&self) -> bool {
        self.pool.get().is_some()
    }

    /// Returns true once the schema has been provisioned.
    pub fn is_schema_ready(&self) -> bool {
        self.schema_ready.get().is_some()
    }

    /// Closes the connection if one was opened.
    pub async fn close(&self) {
        if let Some(pool) = self.pool.get() {
            pool.close().await;
            info!("Database connection closed");
        }
    }
}
