use std::time::Duration;

use anyhow::{Context, Result};

/// Configuration of the fight service
#[derive(Debug, Clone)]
pub struct FightConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub hero_service_url: String,
    pub villain_service_url: String,
    /// Budget for a single directory call
    pub client_timeout: Duration,
    /// Budget for fetching both random fighters
    pub fighters_timeout: Duration,
    pub notify_timeout: Duration,
    pub statistics_url: Option<String>,
}

impl FightConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            hero_service_url: std::env::var("HERO_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8084".to_string()),
            villain_service_url: std::env::var("VILLAIN_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8084".to_string()),
            client_timeout: env_millis("CLIENT_TIMEOUT_MS", 200)?,
            fighters_timeout: env_millis("FIGHTERS_TIMEOUT_MS", 250)?,
            notify_timeout: env_millis("NOTIFY_TIMEOUT_MS", 500)?,
            statistics_url: std::env::var("STATISTICS_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
        })
    }
}

/// Configuration of the hero and villain directory service
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub api_keys: String,
}

impl DirectoryConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            api_keys: std::env::var("API_KEYS").unwrap_or_default(),
        })
    }
}

fn env_millis(name: &str, default_ms: u64) -> Result<Duration> {
    millis_or(name, std::env::var(name).ok(), default_ms)
}

fn millis_or(name: &str, value: Option<String>, default_ms: u64) -> Result<Duration> {
    match value {
        Some(raw) => {
            let ms: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{} must be a number of milliseconds", name))?;
            Ok(Duration::from_millis(ms))
        }
        None => Ok(Duration::from_millis(default_ms)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_default() {
        let timeout = millis_or("FIGHTERS_TIMEOUT_MS", None, 250).unwrap();
        assert_eq!(timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_millis_parsed() {
        let timeout = millis_or("CLIENT_TIMEOUT_MS", Some(" 1500 ".to_string()), 200).unwrap();
        assert_eq!(timeout, Duration::from_millis(1500));
    }

    #[test]
    fn test_millis_invalid() {
        let err = millis_or("NOTIFY_TIMEOUT_MS", Some("soon".to_string()), 500).unwrap_err();
        assert!(err.to_string().contains("NOTIFY_TIMEOUT_MS"));
    }
}
