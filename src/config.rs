use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 5000;

/// Process configuration, read once at start-up and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub port: u16,
    /// JSON array of match objects; `None` serves the bundled sample.
    pub fallback_matches: Option<PathBuf>,
    /// Riot host template override, `{route}` is substituted per call.
    pub riot_host: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty("RIOT_API_KEY")
            .context("RIOT_API_KEY must be set in environment or .env file")?;

        let port = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: {raw}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            api_key,
            port,
            fallback_matches: non_empty("LOLEDGE_FALLBACK_MATCHES").map(PathBuf::from),
            riot_host: non_empty("LOLEDGE_RIOT_HOST"),
        })
    }
}
