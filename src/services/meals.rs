use std::collections::HashSet;

use chrono::Duration;
use sqlx::SqlitePool;

use crate::{
    error::{ApiError, ApiResult},
    models::meal::{Meal, NewMeal, SearchHit},
    services::validation::parse_date,
};

/// Upper bound on suggestions returned by a search.
pub const SEARCH_LIMIT: usize = 10;

pub struct MealService;

impl MealService {
    /// All meals from `start_date` through the six following days.
    pub async fn get_week(pool: &SqlitePool, start_date: &str) -> ApiResult<Vec<Meal>> {
        let start = parse_date(start_date)
            .ok_or_else(|| ApiError::invalid("start_date must be a date in YYYY-MM-DD format"))?;
        let end = start + Duration::days(6);

        let meals = sqlx::query_as::<_, Meal>(
            r#"SELECT id, date, meal_type, person1, person2, person1_url, person2_url
               FROM meal
               WHERE date BETWEEN ?1 AND ?2
               ORDER BY date, meal_type"#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await?;
        Ok(meals)
    }

    /// Replaces whatever is stored for the meal's (date, meal_type) slot.
    /// Delete and insert share one transaction, so a crash never leaves the slot half-written.
    pub async fn save(pool: &SqlitePool, meal: &NewMeal) -> ApiResult<Meal> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM meal WHERE date = ?1 AND meal_type = ?2")
            .bind(meal.date)
            .bind(&meal.meal_type)
            .execute(&mut *tx)
            .await?;

        let saved = sqlx::query_as::<_, Meal>(
            r#"INSERT INTO meal (date, meal_type, person1, person2, person1_url, person2_url)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6)
               RETURNING id, date, meal_type, person1, person2, person1_url, person2_url"#,
        )
        .bind(meal.date)
        .bind(&meal.meal_type)
        .bind(&meal.person1)
        .bind(&meal.person2)
        .bind(&meal.person1_url)
        .bind(&meal.person2_url)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(saved)
    }

    /// Most recently saved distinct names containing `query`, person1 before person2.
    pub async fn search(pool: &SqlitePool, query: &str) -> ApiResult<Vec<SearchHit>> {
        // SQLite's lower() and LIKE only fold ASCII, so matching happens in Rust.
        // Newest rows first; AUTOINCREMENT ids follow insertion order.
        let rows = sqlx::query_as::<_, Meal>(
            r#"SELECT id, date, meal_type, person1, person2, person1_url, person2_url
               FROM meal
               WHERE person1 IS NOT NULL OR person2 IS NOT NULL
               ORDER BY id DESC"#,
        )
        .fetch_all(pool)
        .await?;

        let needle = query.to_lowercase();
        let matching: Vec<Meal> = rows
            .into_iter()
            .filter(|row| row_matches(row, &needle))
            .collect();

        Ok(rank_distinct(&matching, SEARCH_LIMIT))
    }
}

/// True when either name contains `needle` (already lowercased).
fn row_matches(row: &Meal, needle: &str) -> bool {
    [&row.person1, &row.person2]
        .into_iter()
        .flatten()
        .any(|name| name.to_lowercase().contains(needle))
}

/// Walks rows in the given order and keeps the first occurrence of each
/// case-folded name, checking person1 before person2 on every row.
pub fn rank_distinct(rows: &[Meal], limit: usize) -> Vec<SearchHit> {
    let mut seen = HashSet::new();
    let mut hits = Vec::new();

    for row in rows {
        let slots = [
            (&row.person1, &row.person1_url),
            (&row.person2, &row.person2_url),
        ];
        for (name, url) in slots {
            if hits.len() >= limit {
                return hits;
            }
            let Some(name) = name.as_deref().filter(|n| !n.is_empty()) else {
                continue;
            };
            if seen.insert(name.to_lowercase()) {
                hits.push(SearchHit {
                    name: name.to_string(),
                    url: url.clone(),
                });
            }
        }
    }
    hits
}
