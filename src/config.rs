use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// Relative location of the optional settings file.
pub const CONFIG_PATH: &str = "config/vitrine.toml";
/// Environment variable that overrides `default_language`.
pub const LANGUAGE_ENV: &str = "VITRINE_LANG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Runtime settings, read from `config/vitrine.toml` when it exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Language code used at startup and as the fallback dictionary.
    pub default_language: String,
    /// Artificial delay of the simulated credential check.
    pub login_delay_ms: u64,
    pub tick_rate_ms: u64,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_language: Language::DEFAULT.code().to_string(),
            login_delay_ms: 800,
            tick_rate_ms: 250,
            log_file: PathBuf::from("logs/vitrine.log"),
        }
    }
}

impl AppConfig {
    /// Loads settings relative to `root`, falling back to defaults when the
    /// file is absent, then applies the environment override.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_PATH);
        let mut config = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;
            toml::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?
        } else {
            debug!("{} not found, using defaults", path.display());
            Self::default()
        };
        config.apply_language_override(env::var(LANGUAGE_ENV).ok());
        Ok(config)
    }

    pub fn apply_language_override(&mut self, code: Option<String>) {
        if let Some(code) = code.filter(|code| !code.trim().is_empty()) {
            debug!("{LANGUAGE_ENV} overrides default language with {code}");
            self.default_language = code.trim().to_string();
        }
    }

    /// The configured language, or the built-in default when the code is unknown.
    pub fn language(&self) -> Language {
        Language::from_code(&self.default_language).unwrap_or_else(|| {
            warn!(
                "Unsupported language '{}', using {}",
                self.default_language,
                Language::DEFAULT.code()
            );
            Language::DEFAULT
        })
    }
}
