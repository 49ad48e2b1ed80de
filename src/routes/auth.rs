use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::{error::ApiResult, services::auth::AuthService, AppState};

/// GET /api/get-token — hands out a short-lived bearer token
pub async fn get_token(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let token = AuthService::issue_token(
        &state.config.token_secret,
        state.config.token_ttl_seconds,
        Utc::now().timestamp(),
    )?;
    Ok(Json(json!({ "token": token })))
}

/// GET /api/data — only reachable with a valid bearer token
pub async fn protected_data() -> Json<Value> {
    Json(json!({ "message": "This is protected data" }))
}
