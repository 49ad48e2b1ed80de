use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Valid values for the meal_type column.
pub const MEAL_TYPES: &[&str] = &["lunch", "dinner"];

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_URL_LEN: usize = 500;

/// One (date, meal_type) slot with who ate what.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Meal {
    pub id: i64,
    pub date: NaiveDate,
    pub meal_type: String,
    pub person1: Option<String>,
    pub person2: Option<String>,
    pub person1_url: Option<String>,
    pub person2_url: Option<String>,
}

/// A validated body for POST /api/meals. Empty strings are already folded to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMeal {
    pub date: NaiveDate,
    pub meal_type: String,
    pub person1: Option<String>,
    pub person2: Option<String>,
    pub person1_url: Option<String>,
    pub person2_url: Option<String>,
}

/// Autocomplete suggestion: a previously used name and the link last stored with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub name: String,
    pub url: Option<String>,
}

/// Query params for GET /api/meals/week.
#[derive(Debug, Deserialize)]
pub struct WeekQuery {
    /// First day of the range (ISO 8601 date, e.g. "2025-03-10").
    pub start_date: Option<String>,
}

/// Query params for GET /api/meals/search.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}
