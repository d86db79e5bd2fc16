use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

const API_KEY_VAR: &str = "COHERE_API_KEY";
const BACKGROUND_VAR: &str = "SERENICA_BACKGROUND";
const DEFAULT_BACKGROUND: &str = "./bg.jpg";

/// Environment-backed process configuration, read once at startup.
pub struct AppConfig {
    pub api_key: String,
    pub background_path: PathBuf,
}

impl AppConfig {
    /// A missing or empty credential is fatal: the caller must halt
    /// before any window is shown.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                anyhow!("Cohere API key not found. Please set the {API_KEY_VAR} environment variable.")
            })?;

        let background_path = env::var(BACKGROUND_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_BACKGROUND));

        Ok(Self {
            api_key,
            background_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env mutations cannot race each other.
    #[test]
    fn credential_is_required_and_background_is_optional() {
        env::remove_var(API_KEY_VAR);
        env::remove_var(BACKGROUND_VAR);
        assert!(AppConfig::from_env().is_err());

        env::set_var(API_KEY_VAR, "   ");
        assert!(AppConfig::from_env().is_err());

        env::set_var(API_KEY_VAR, "test-key");
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.background_path, PathBuf::from(DEFAULT_BACKGROUND));

        env::set_var(BACKGROUND_VAR, "/tmp/custom.png");
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.background_path, PathBuf::from("/tmp/custom.png"));

        env::remove_var(BACKGROUND_VAR);
        env::remove_var(API_KEY_VAR);
    }
}
