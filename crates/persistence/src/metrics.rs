//! Store metrics.
//!
//! Every repository statement and the schema provisioning run are timed under
//! a stable query label (`list_users`, `upsert_custom_workout`,
//! `provision_schema`, ...), so slow SQLite statements show up per endpoint
//! operation on `/metrics`.

use metrics::{gauge, histogram};
use sqlx::SqlitePool;
use std::time::Instant;

/// Histogram of statement latency, labelled by `query`.
pub const QUERY_DURATION_METRIC: &str = "fittrack_store_query_duration_seconds";

/// Record how long one labelled statement took.
pub fn record_query_duration(query_name: &'static str, duration_secs: f64) {
    histogram!(QUERY_DURATION_METRIC, "query" => query_name).record(duration_secs);
}

/// Publish the state of the single store connection.
///
/// The pool never holds more than one connection, so `in_use` is 0 or 1.
pub fn record_pool_metrics(pool: &SqlitePool) {
    let open = pool.size() as usize;
    let in_use = open.saturating_sub(pool.num_idle());

    gauge!("fittrack_store_connection_open").set(open as f64);
    gauge!("fittrack_store_connection_in_use").set(in_use as f64);
}

/// Times one store statement.
///
/// ```ignore
/// let timer = QueryTimer::new("upsert_custom_workout");
/// let result = sqlx::query(UPSERT).bind(&workout.date).execute(&pool).await;
/// timer.record();
/// ```
pub struct QueryTimer {
    query_name: &'static str,
    start: Instant,
}

impl QueryTimer {
    pub fn new(query_name: &'static str) -> Self {
        Self {
            query_name,
            start: Instant::now(),
        }
    }

    /// Records the elapsed time, whether the statement succeeded or not.
    pub fn record(self) {
        record_query_duration(self.query_name, self.start.elapsed().as_secs_f64());
    }
}
