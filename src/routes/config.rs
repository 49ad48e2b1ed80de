use std::collections::BTreeMap;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};

use crate::{
    error::{ApiError, ApiResult, FieldError},
    models::config::MAX_KEY_LEN,
    services::config::ConfigService,
    AppState,
};

/// GET /api/config — defaults overlaid with stored values
pub async fn get_config(State(state): State<AppState>) -> ApiResult<Json<BTreeMap<String, String>>> {
    let values = ConfigService::get_all(&state.db).await?;
    Ok(Json(values))
}

/// POST /api/config — body is a flat object of string values
pub async fn update_config(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(body) = body.map_err(|e| ApiError::invalid(format!("Invalid JSON body: {}", e.body_text())))?;
    let values = parse_entries(&body)?;

    ConfigService::set_many(&state.db, &values).await?;
    Ok(Json(json!({ "status": "success" })))
}

fn parse_entries(body: &Value) -> ApiResult<BTreeMap<String, String>> {
    let obj = body
        .as_object()
        .ok_or_else(|| ApiError::invalid("Body must be a JSON object"))?;

    let mut errors = Vec::new();
    let mut values = BTreeMap::new();
    for (key, value) in obj {
        if key.is_empty() || key.chars().count() > MAX_KEY_LEN {
            errors.push(FieldError::new(key, format!("key must be 1 to {MAX_KEY_LEN} characters")));
            continue;
        }
        match value {
            Value::String(s) => {
                values.insert(key.clone(), s.clone());
            }
            _ => errors.push(FieldError::new(key, "value must be a string")),
        }
    }

    if errors.is_empty() {
        Ok(values)
    } else {
        Err(ApiError::invalid_fields(errors))
    }
}
