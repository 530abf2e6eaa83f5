//! Global calx configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::date_range::DEFAULT_DAYS_AHEAD;
use crate::error::{CalxError, CalxResult};

static DEFAULT_CALENDAR_DIR: &str = "~/calendar";

fn default_calendar_dir() -> PathBuf {
    PathBuf::from(DEFAULT_CALENDAR_DIR)
}

fn is_default_calendar_dir(p: &PathBuf) -> bool {
    *p == default_calendar_dir()
}

fn default_days_ahead() -> i64 {
    DEFAULT_DAYS_AHEAD
}

fn is_default_days_ahead(days: &i64) -> bool {
    *days == DEFAULT_DAYS_AHEAD
}

/// Global configuration at ~/.config/calx/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct CalxConfig {
    #[serde(
        default = "default_calendar_dir",
        skip_serializing_if = "is_default_calendar_dir"
    )]
    pub calendar_dir: PathBuf,

    /// Days to look ahead when a query gives no end date.
    #[serde(default = "default_days_ahead", skip_serializing_if = "is_default_days_ahead")]
    pub days_ahead: i64,

    /// Principal whose personal sources are read by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<String>,
}

impl CalxConfig {
    pub fn config_path() -> CalxResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalxError::Config("Could not determine config directory".into()))?
            .join("calx");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> CalxResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: CalxConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| CalxError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalxError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Save the current config to ~/.config/calx/config.toml
    pub fn save(&self) -> CalxResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| CalxError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| CalxError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalxResult<()> {
        let contents = format!(
            "\
# calx configuration

# Where your event sources live:
# calendar_dir = \"{DEFAULT_CALENDAR_DIR}\"

# Days to look ahead when no end date is given:
# days_ahead = {DEFAULT_DAYS_AHEAD}

# Principal whose personal sources are read by default:
# principal = \"alice\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalxError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalxError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Calendar directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.calendar_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Calendar directory in display-friendly form, keeping `~` instead of
    /// expanding to the full home directory.
    pub fn display_path(&self) -> PathBuf {
        self.calendar_dir.clone()
    }
}
