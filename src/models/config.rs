use sqlx::FromRow;

/// Built-in settings returned when nothing has been stored for the key.
pub const DEFAULT_CONFIG: &[(&str, &str)] = &[
    ("person1_label", "Person 1"),
    ("person2_label", "Person 2"),
    ("search_enabled", "true"),
];

pub const MAX_KEY_LEN: usize = 100;

#[derive(Debug, Clone, FromRow)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
}
