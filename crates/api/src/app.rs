use axum::{middleware, routing::get, Router};
use persistence::Store;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, trace_id};
use crate::routes::{custom_workouts, health, users, workout_logs, workout_packages};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub config: Arc<Config>,
}

pub fn create_app(config: Config, store: Arc<Store>) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        store,
        config: config.clone(),
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let resource_routes = Router::new()
        .route(
            "/api/users",
            get(users::list_users)
                .post(users::create_user)
                .delete(users::delete_user)
                .fallback(users::method_not_allowed),
        )
        .route(
            "/api/workout-packages",
            get(workout_packages::list_packages)
                .post(workout_packages::create_package)
                .delete(workout_packages::delete_package)
                .fallback(workout_packages::method_not_allowed),
        )
        .route(
            "/api/custom-workouts",
            get(custom_workouts::list_custom_workouts)
                .post(custom_workouts::save_custom_workout)
                .fallback(custom_workouts::method_not_allowed),
        )
        .route(
            "/api/workout-logs",
            get(workout_logs::list_logs)
                .post(workout_logs::create_log)
                .fallback(workout_logs::method_not_allowed),
        );

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(resource_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
