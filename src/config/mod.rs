//! Configuration data model and defaults.
//!
//! Loading and source precedence live in `loader`; this module holds the
//! struct definitions plus default values.

mod loader;

pub use loader::load_config;

use serde::Deserialize;

/// Default backing-file name, resolved relative to the working directory.
pub const DEFAULT_ROSTER_FILE: &str = "students.md";
/// Config file name looked up locally and under the per-user config root.
pub const CONFIG_FILE_NAME: &str = "starosta.toml";
/// Subdirectory under the per-user config root.
pub const CONFIG_DIR_NAME: &str = "starosta";
/// Environment override for the roster file path.
pub const ENV_ROSTER_FILE: &str = "STAROSTA_ROSTER_FILE";

/// Top-level runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub roster: RosterConfig,
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster: RosterConfig {
                file: DEFAULT_ROSTER_FILE.to_string(),
            },
            display: DisplayConfig { color: true },
        }
    }
}

/// Backing-file settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// Path to the append-only roster table.
    pub file: String,
}

/// Terminal output settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Whether ANSI color/style output is enabled.
    pub color: bool,
}

/// Raw on-disk config shape; every field optional so a partial file works.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct FileConfig {
    roster: Option<FileRosterConfig>,
    display: Option<FileDisplayConfig>,
}

#[derive(Debug, Default, Deserialize)]
struct FileRosterConfig {
    file: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileDisplayConfig {
    color: Option<bool>,
}

impl FileConfig {
    /// Overlay file values onto built-in defaults.
    pub(crate) fn into_config(self) -> Config {
        let mut config = Config::default();
        if let Some(roster) = self.roster {
            if let Some(file) = roster.file {
                config.roster.file = file;
            }
        }
        if let Some(display) = self.display {
            if let Some(color) = display.color {
                config.display.color = color;
            }
        }
        config
    }
}
