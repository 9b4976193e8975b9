use anyhow::{bail, Context, Result};

use crate::skills::MatchMode;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound for a whole multipart request body (both uploads together).
    pub max_upload_bytes: usize,
    pub match_mode: MatchMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            match_mode: MatchMode::Token,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
            match_mode: match std::env::var("SKILL_MATCH_MODE") {
                Ok(raw) => parse_match_mode(&raw)?,
                Err(_) => MatchMode::Token,
            },
        })
    }
}

fn parse_match_mode(raw: &str) -> Result<MatchMode> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "token" | "" => Ok(MatchMode::Token),
        "phrase" => Ok(MatchMode::Phrase),
        other => bail!("SKILL_MATCH_MODE must be 'token' or 'phrase', got '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_mode_accepts_known_values() {
        assert_eq!(parse_match_mode("token").unwrap(), MatchMode::Token);
        assert_eq!(parse_match_mode(" Phrase ").unwrap(), MatchMode::Phrase);
        assert_eq!(parse_match_mode("").unwrap(), MatchMode::Token);
    }

    #[test]
    fn test_match_mode_rejects_unknown_value() {
        let err = parse_match_mode("fuzzy").unwrap_err();
        assert!(err.to_string().contains("fuzzy"));
    }

    #[test]
    fn test_default_config_is_token_mode() {
        let config = Config::default();
        assert_eq!(config.match_mode, MatchMode::Token);
        assert_eq!(config.port, 8080);
    }
}
