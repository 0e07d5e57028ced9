//! Startup configuration.

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY is missing, add it to your environment")]
    MissingApiKey,

    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),
}

/// Configuration loaded once before the first request and never mutated.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub port: u16,
    pub base_url: String,
}

// Keeps the credential out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("port", &self.port)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// | Variable          | Default                     |
    /// |-------------------|-----------------------------|
    /// | `OPENAI_API_KEY`  | required                    |
    /// | `PORT`            | `5000`                      |
    /// | `OPENAI_BASE_URL` | `https://api.openai.com/v1` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let port = match lookup("PORT") {
            Some(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            _ => DEFAULT_PORT,
        };

        let base_url = lookup("OPENAI_BASE_URL")
            .filter(|u| !u.trim().is_empty())
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            port,
            base_url,
        })
    }
}
