use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ConfigError;

const DEFAULT_CONFIG_NAME: &str = "mergenote.toml";
const DEFAULT_GH_BIN: &str = "gh";

/// Environment variable consulted when `--webhook-url` is absent.
pub const ENV_SLACK_WEBHOOK_URL: &str = "SLACK_WEBHOOK_URL";

/// Optional settings file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Hosting CLI executable, looked up on PATH.
    pub gh_bin: Option<String>,
    /// Lowest-priority webhook fallback.
    pub webhook_url: Option<String>,
}

impl Config {
    /// Load settings from an explicit path, or search upward from the current
    /// dir and then the user config dir.
    ///
    /// Only an explicit path is allowed to fail. A discovered file that cannot
    /// be read or parsed is skipped with a warning.
    pub fn load(path_override: Option<PathBuf>) -> Result<Self, ConfigError> {
        if let Some(path) = path_override {
            return Self::from_file(&path);
        }

        let Some(path) = find_upwards(DEFAULT_CONFIG_NAME).or_else(user_config_path) else {
            debug!("no settings file found, using defaults");
            return Ok(Self::default());
        };

        match Self::from_file(&path) {
            Ok(cfg) => Ok(cfg),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring unusable settings file");
                Ok(Self::default())
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded settings file");
        Ok(cfg)
    }

    pub fn gh_bin(&self) -> &str {
        self.gh_bin.as_deref().unwrap_or(DEFAULT_GH_BIN)
    }
}

/// Destination for the publish stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    pub url: String,
}

impl WebhookConfig {
    /// Pick the first non-empty candidate: flag, then environment, then file.
    pub fn resolve(
        explicit: Option<&str>,
        from_env: Option<String>,
        from_file: Option<&str>,
    ) -> Result<Self, ConfigError> {
        explicit
            .map(str::to_string)
            .into_iter()
            .chain(from_env)
            .chain(from_file.map(str::to_string))
            .find(|url| !url.trim().is_empty())
            .map(|url| Self { url })
            .ok_or(ConfigError::MissingWebhookUrl)
    }
}

fn find_upwards(file_name: &str) -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let candidate = dir.join(file_name);
        if candidate.exists() {
            return Some(candidate);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

fn user_config_path() -> Option<PathBuf> {
    let candidate = dirs::config_dir()?.join("mergenote").join("config.toml");
    candidate.exists().then_some(candidate)
}
