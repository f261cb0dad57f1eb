//! Configuration for the demo harness, read from TOML.
//!
//! Every section and field is optional:
//!
//! ```toml
//! [mailing_list]
//! sender = "training@develop.me"
//! subject = "Wombat Wisdom"
//! recipients = ["bob@bob.com", "yoko@ono.com"]
//! priority = "normal"
//! body = "Welcome to Wombat Wisdom"
//!
//! [mailer]
//! kind = "local"
//!
//! [counter]
//! initial = 0
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{counter::Counter, error::ConfigError, mailing_list::DEFAULT_SENDER};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV: &str = "EXEMPLAR_CONFIG";

/// Where to look for a configuration file when [`CONFIG_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "./exemplar.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub mailing_list: MailingListConfig,
    pub mailer: MailerConfig,
    pub counter: CounterConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MailingListConfig {
    pub sender: String,
    pub subject: String,
    pub recipients: Vec<String>,
    /// Kept as a raw name so an unknown priority is ignored rather than
    /// failing the whole file.
    pub priority: String,
    /// Sent to every recipient when present.
    pub body: Option<String>,
}

impl Default for MailingListConfig {
    fn default() -> Self {
        Self {
            sender: DEFAULT_SENDER.to_string(),
            subject: "Wombat Wisdom".to_string(),
            recipients: vec!["bob@bob.com".to_string(), "yoko@ono.com".to_string()],
            priority: "normal".to_string(),
            body: None,
        }
    }
}

/// Which delivery strategy the demo uses first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailerKind {
    #[default]
    Local,
    MailChimp,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MailerConfig {
    pub kind: MailerKind,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CounterConfig {
    /// Left untyped here; [`CounterConfig::counter`] does the checking.
    pub initial: Option<toml::Value>,
}

impl CounterConfig {
    /// Builds the configured counter.
    ///
    /// # Errors
    ///
    /// Fails with a type mismatch if `initial` is not an integer.
    pub fn counter(&self) -> Result<Counter, ConfigError> {
        Ok(self
            .initial
            .as_ref()
            .map(Counter::try_from)
            .transpose()?
            .unwrap_or_default())
    }
}

impl Config {
    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Fails if the document is not valid TOML or has an unexpected shape.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&content)
    }

    /// Loads configuration using the following precedence:
    /// 1. `EXEMPLAR_CONFIG` environment variable (the file must exist)
    /// 2. `./exemplar.toml`
    /// 3. Built-in defaults
    ///
    /// # Errors
    ///
    /// Fails if `EXEMPLAR_CONFIG` names a missing file, or if the chosen file
    /// cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(
            std::env::var_os(CONFIG_ENV).map(PathBuf::from),
            Path::new(DEFAULT_CONFIG_PATH),
        )
    }

    fn load_with(explicit: Option<PathBuf>, fallback: &Path) -> Result<Self, ConfigError> {
        match Self::find(explicit, fallback)? {
            Some(path) => {
                crate::internal!(level = INFO, "Loading config from {}", path.display());
                Self::from_path(path)
            }
            None => {
                crate::internal!(level = INFO, "No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn find(explicit: Option<PathBuf>, fallback: &Path) -> Result<Option<PathBuf>, ConfigError> {
        if let Some(path) = explicit {
            return if path.exists() {
                Ok(Some(path))
            } else {
                Err(ConfigError::NotFound(path))
            };
        }

        Ok(fallback.exists().then(|| fallback.to_path_buf()))
    }
}
