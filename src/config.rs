// src/config.rs
use std::env;
use std::net::SocketAddr;
use thiserror::Error;

pub const ENV_PREFIX: &str = "HOUSEWISE_";

#[derive(Debug, Error, PartialEq)]
#[error("Configuration error: {0}")]
pub struct ConfigError(pub String);

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub max_workers: usize,
    /// Lifetime of a visitor's session (form data + last result), in seconds.
    pub session_ttl_secs: i64,
    pub predictor: PredictorConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictorConfig {
    /// Full URL of the remote `/predict` endpoint. `None` = local model only.
    pub predict_url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            predict_url: None,
            timeout_secs: 5,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            session_ttl_secs: 60 * 60,
            predictor: PredictorConfig::default(),
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `HOUSEWISE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reading from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(&format!("{ENV_PREFIX}{name}"))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut cfg = Self::default();

        if let Some(v) = get("ADDR") {
            cfg.addr = parse("ADDR", &v)?;
        }
        if let Some(v) = get("MAX_WORKERS") {
            cfg.max_workers = parse("MAX_WORKERS", &v)?;
        }
        if let Some(v) = get("SESSION_TTL_SECS") {
            cfg.session_ttl_secs = parse("SESSION_TTL_SECS", &v)?;
        }
        if let Some(v) = get("PREDICT_URL") {
            cfg.predictor.predict_url = Some(v);
        }
        if let Some(v) = get("PREDICT_TIMEOUT_SECS") {
            cfg.predictor.timeout_secs = parse("PREDICT_TIMEOUT_SECS", &v)?;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_workers == 0 {
            return Err(ConfigError("max workers must be at least 1".into()));
        }
        if self.session_ttl_secs <= 0 {
            return Err(ConfigError("session TTL must be positive".into()));
        }
        if self.predictor.timeout_secs == 0 || self.predictor.timeout_secs > 60 {
            return Err(ConfigError(
                "prediction timeout must be between 1 and 60 seconds".into(),
            ));
        }
        if let Some(url) = &self.predictor.predict_url {
            let parsed = url::Url::parse(url)
                .map_err(|e| ConfigError(format!("invalid prediction URL '{url}': {e}")))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ConfigError(
                    "prediction URL must be a valid HTTP or HTTPS URL".into(),
                ));
            }
        }
        Ok(())
    }
}

fn parse<T>(name: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse()
        .map_err(|e| ConfigError(format!("{ENV_PREFIX}{name}='{raw}': {e}")))
}
