use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Origins allowed to call the API from a browser.
    pub allowed_origins: Vec<String>,
    pub token_secret: String,
    pub token_ttl_seconds: u64,
    pub require_token: bool,
    pub rate_limit_per_day: u32,
    pub rate_limit_per_hour: u32,
    /// Take the client address from X-Real-IP / X-Forwarded-For.
    /// Only safe behind a reverse proxy that overwrites those headers.
    pub trust_proxy_headers: bool,
    pub backend_version: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://data/meals.db?mode=rwc".into()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: parsed("PORT", "5000")?,
            allowed_origins: parse_origins(
                &env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "http://localhost:5173,http://localhost:3000".into()),
            ),
            token_secret: required("TOKEN_SECRET")?,
            token_ttl_seconds: parsed("TOKEN_TTL_SECONDS", "60")?,
            require_token: parse_bool("REQUIRE_TOKEN", &env::var("REQUIRE_TOKEN").unwrap_or_else(|_| "true".into()))?,
            rate_limit_per_day: parsed("RATE_LIMIT_PER_DAY", "200")?,
            rate_limit_per_hour: parsed("RATE_LIMIT_PER_HOUR", "50")?,
            trust_proxy_headers: parse_bool(
                "TRUST_PROXY_HEADERS",
                &env::var("TRUST_PROXY_HEADERS").unwrap_or_else(|_| "false".into()),
            )?,
            backend_version: env::var("BACKEND_VERSION")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| env!("CARGO_PKG_VERSION").into()),
        })
    }

    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|o| o == origin)
    }
}

fn required(key: &str) -> anyhow::Result<String> {
    env::var(key)
        .ok()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| anyhow::anyhow!("Missing required env var: {}", key))
}

fn parsed<T>(key: &str, default: &str) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = env::var(key).unwrap_or_else(|_| default.into());
    raw.trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid value for {}: {:?} ({})", key, raw, e))
}

/// Splits a comma-separated origin list, dropping blanks and trailing slashes.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().trim_end_matches('/'))
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn parse_bool(key: &str, raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("Invalid value for {}: {:?} (expected a boolean)", key, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blanks_dropped() {
        let origins = parse_origins(" https://meals.example.com/ ,, http://localhost:5173");
        assert_eq!(
            origins,
            vec!["https://meals.example.com".to_string(), "http://localhost:5173".to_string()]
        );
    }

    #[test]
    fn empty_origin_list_allows_nothing() {
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn booleans_accept_common_spellings() {
        assert!(parse_bool("X", "TRUE").unwrap());
        assert!(parse_bool("X", "1").unwrap());
        assert!(!parse_bool("X", "off").unwrap());
        assert!(parse_bool("X", "maybe").is_err());
    }
}
