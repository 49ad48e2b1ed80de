use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use serde_json::{json, Value};

use crate::{
    error::{ApiError, ApiResult},
    models::meal::{Meal, SearchHit, SearchQuery, WeekQuery},
    services::{meals::MealService, metrics::MEALS_SAVED_COUNTER, validation::validate_meal},
    AppState,
};

/// GET /api/meals/week?start_date=YYYY-MM-DD
pub async fn get_week(
    State(state): State<AppState>,
    params: Result<Query<WeekQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Meal>>> {
    let Query(params) = params.map_err(invalid_query)?;
    let start_date = params
        .start_date
        .ok_or_else(|| ApiError::invalid("start_date is required"))?;
    let meals = MealService::get_week(&state.db, &start_date).await?;
    Ok(Json(meals))
}

/// POST /api/meals — replaces the slot for (date, meal_type)
pub async fn save_meal(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(body) = body.map_err(|e| ApiError::invalid(format!("Invalid JSON body: {}", e.body_text())))?;
    let meal = validate_meal(&body).map_err(ApiError::invalid_fields)?;

    let saved = MealService::save(&state.db, &meal).await?;
    MEALS_SAVED_COUNTER.inc();
    tracing::debug!(id = saved.id, date = %saved.date, meal_type = %saved.meal_type, "meal saved");

    Ok(Json(json!({ "status": "success" })))
}

/// GET /api/meals/search?q=... — at most ten distinct names
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<SearchHit>>> {
    let Query(params) = params.map_err(invalid_query)?;
    let hits = MealService::search(&state.db, &params.q).await?;
    Ok(Json(hits))
}

fn invalid_query(e: QueryRejection) -> ApiError {
    ApiError::invalid(format!("Invalid query string: {}", e.body_text()))
}
