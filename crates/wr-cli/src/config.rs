//! Configuration loading and management.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveTime;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use wr_core::PrettyStyle;
use wr_core::format::default_email_sections;

/// Application configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the gtimelog time log.
    pub log_path: PathBuf,

    /// User identity shown in the report header.
    pub user: String,

    /// Time of day at which a new logical day begins.
    pub virtual_midnight: NaiveTime,

    /// Category label to section header, for email output.
    pub email_sections: BTreeMap<String, String>,

    /// Glyphs and widths for pretty output.
    pub pretty: PrettyStyle,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("log_path", &self.log_path)
            .field("user", &self.user)
            .field("virtual_midnight", &self.virtual_midnight)
            .field("email_sections", &self.email_sections.len())
            .finish_non_exhaustive()
    }
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_gtimelog_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            log_path: data_dir.join("timelog.txt"),
            user: std::env::var("USER").unwrap_or_else(|_| "unknown".to_string()),
            virtual_midnight: NaiveTime::from_hms_opt(2, 0, 0).unwrap_or(NaiveTime::MIN),
            email_sections: default_email_sections(),
            pretty: PrettyStyle::default(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (WR_*)
        figment = figment.merge(Env::prefixed("WR_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for weekly-report.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("weekly-report"))
}

/// Returns the directory gtimelog keeps its log in.
///
/// On Linux: `~/.local/share/gtimelog`
pub fn dirs_gtimelog_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("gtimelog"))
}
