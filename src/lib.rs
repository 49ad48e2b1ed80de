pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use middleware::rate_limit::RateLimiter;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<Config>,
    pub rate_limiter: Arc<RateLimiter>,
}

impl AppState {
    pub fn new(db: SqlitePool, config: Config) -> Self {
        let rate_limiter = RateLimiter::new(config.rate_limit_per_hour, config.rate_limit_per_day);
        Self {
            db,
            config: Arc::new(config),
            rate_limiter: Arc::new(rate_limiter),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .allowed_origins
        .iter()
        .filter(|o| o.as_str() != "*")
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(AllowHeaders::list([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ]))
        .allow_origin(AllowOrigin::list(origins));

    Router::new()
        .route("/healthz", get(routes::health::health_check))
        .route("/metrics", get(routes::metrics::metrics_handler))
        .route("/api/version", get(routes::health::version))
        // Tokens
        .route("/api/get-token", get(routes::auth::get_token))
        .route("/api/data", get(routes::auth::protected_data))
        // Settings
        .route("/api/config", get(routes::config::get_config).post(routes::config::update_config))
        // Meals
        .route("/api/meals", post(routes::meals::save_meal))
        .route("/api/meals/week", get(routes::meals::get_week))
        .route("/api/meals/search", get(routes::meals::search))
        .fallback(routes::health::not_found)
        .method_not_allowed_fallback(routes::health::method_not_allowed)
        // The gate sits outside CORS so disallowed origins are refused before pre-flight handling.
        .layer(cors)
        .layer(from_fn_with_state(state.clone(), middleware::access_gate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
