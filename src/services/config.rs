use std::collections::BTreeMap;

use sqlx::SqlitePool;

use crate::models::config::{ConfigEntry, DEFAULT_CONFIG};

pub struct ConfigService;

impl ConfigService {
    /// Built-in defaults overlaid with every stored entry (stored values win).
    pub async fn get_all(pool: &SqlitePool) -> sqlx::Result<BTreeMap<String, String>> {
        let stored = sqlx::query_as::<_, ConfigEntry>("SELECT key, value FROM config")
            .fetch_all(pool)
            .await?;

        let mut merged: BTreeMap<String, String> = DEFAULT_CONFIG
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        merged.extend(stored.into_iter().map(|e| (e.key, e.value)));
        Ok(merged)
    }

    /// Writes every pair in one transaction; existing keys are updated in place.
    pub async fn set_many(pool: &SqlitePool, values: &BTreeMap<String, String>) -> sqlx::Result<()> {
        let mut tx = pool.begin().await?;
        for (key, value) in values {
            sqlx::query(
                r#"INSERT INTO config (key, value) VALUES (?1, ?2)
                   ON CONFLICT (key) DO UPDATE SET value = excluded.value"#,
            )
            .bind(key)
            .bind(value)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(())
    }
}
