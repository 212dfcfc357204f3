use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub cors_permissive: bool,
    /// Upper bound on the length of any skill array accepted over HTTP.
    pub max_skills_per_request: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            rust_log: "info".to_string(),
            cors_permissive: true,
            max_skills_per_request: 200,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            cors_permissive: parse_env("CORS_PERMISSIVE", defaults.cors_permissive)
                .context("CORS_PERMISSIVE must be true or false")?,
            max_skills_per_request: parse_env(
                "MAX_SKILLS_PER_REQUEST",
                defaults.max_skills_per_request,
            )
            .context("MAX_SKILLS_PER_REQUEST must be a non-negative integer")?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
