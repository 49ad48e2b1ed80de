#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use mealplan_api::{build_router, config::Config, db, AppState};
use serde_json::Value;

pub const SECRET: &str = "integration-secret";
pub const ORIGIN: &str = "http://localhost:5173";

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        allowed_origins: vec![ORIGIN.to_string()],
        token_secret: SECRET.to_string(),
        token_ttl_seconds: 60,
        require_token: true,
        rate_limit_per_day: 1_000,
        rate_limit_per_hour: 1_000,
        trust_proxy_headers: false,
        backend_version: "1.2.3".to_string(),
    }
}

pub async fn app_with(config: Config) -> (Router, AppState) {
    let pool = db::memory_pool().await.expect("pool");
    let state = AppState::new(pool, config);
    (build_router(state.clone()), state)
}

pub async fn app() -> (Router, AppState) {
    app_with(test_config()).await
}

pub fn bearer() -> String {
    let token = mealplan_api::services::auth::AuthService::issue_token(
        SECRET,
        60,
        chrono::Utc::now().timestamp(),
    )
    .expect("token");
    format!("Bearer {token}")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("authorization", bearer())
        .body(Body::empty())
        .expect("request")
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", bearer())
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub async fn read_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}
