use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::{
    error::FieldError,
    models::meal::{NewMeal, MAX_NAME_LEN, MAX_URL_LEN, MEAL_TYPES},
};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a strict `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Checks a raw POST /api/meals body and collects every failing field.
pub fn validate_meal(body: &Value) -> Result<NewMeal, Vec<FieldError>> {
    let Some(obj) = body.as_object() else {
        return Err(vec![FieldError::new("body", "must be a JSON object")]);
    };

    let mut errors = Vec::new();

    let date = match obj.get("date") {
        Some(Value::String(s)) => match parse_date(s) {
            Some(d) => Some(d),
            None => {
                errors.push(FieldError::new("date", "must be a date in YYYY-MM-DD format"));
                None
            }
        },
        None | Some(Value::Null) => {
            errors.push(FieldError::new("date", "is required"));
            None
        }
        Some(_) => {
            errors.push(FieldError::new("date", "must be a string"));
            None
        }
    };

    let meal_type = match obj.get("meal_type") {
        Some(Value::String(s)) if MEAL_TYPES.contains(&s.as_str()) => Some(s.clone()),
        Some(Value::String(_)) => {
            errors.push(FieldError::new("meal_type", "must be one of: lunch, dinner"));
            None
        }
        None | Some(Value::Null) => {
            errors.push(FieldError::new("meal_type", "is required"));
            None
        }
        Some(_) => {
            errors.push(FieldError::new("meal_type", "must be a string"));
            None
        }
    };

    let person1 = optional_text(obj, "person1", MAX_NAME_LEN, false, &mut errors);
    let person2 = optional_text(obj, "person2", MAX_NAME_LEN, false, &mut errors);
    let person1_url = optional_text(obj, "person1_url", MAX_URL_LEN, true, &mut errors);
    let person2_url = optional_text(obj, "person2_url", MAX_URL_LEN, true, &mut errors);

    match (date, meal_type) {
        (Some(date), Some(meal_type)) if errors.is_empty() => Ok(NewMeal {
            date,
            meal_type,
            person1,
            person2,
            person1_url,
            person2_url,
        }),
        _ => Err(errors),
    }
}

/// Optional string-or-null field. Blank values become `None`.
fn optional_text(
    obj: &Map<String, Value>,
    field: &str,
    max_len: usize,
    is_url: bool,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let raw = match obj.get(field) {
        None | Some(Value::Null) => return None,
        Some(Value::String(s)) => s.trim(),
        Some(_) => {
            errors.push(FieldError::new(field, "must be a string or null"));
            return None;
        }
    };
    if raw.is_empty() {
        return None;
    }
    if raw.chars().count() > max_len {
        errors.push(FieldError::new(field, format!("must be at most {max_len} characters")));
        return None;
    }
    if is_url && !is_web_url(raw) {
        errors.push(FieldError::new(field, "must be an absolute http(s) URL"));
        return None;
    }
    Some(raw.to_string())
}

fn is_web_url(raw: &str) -> bool {
    match url::Url::parse(raw) {
        Ok(u) => matches!(u.scheme(), "http" | "https") && u.host().is_some(),
        Err(_) => false,
    }
}
