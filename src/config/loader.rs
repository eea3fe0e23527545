//! Config loading pipeline and source precedence.
//!
//! Source order: explicit `--config` path > local `./starosta.toml` > global
//! `~/.config/starosta/starosta.toml` > built-in defaults. The pipeline is
//! written against injected closures so tests exercise precedence without
//! touching the real filesystem or environment.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::{Config, FileConfig, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ENV_ROSTER_FILE};

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from the --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

/// Per-user config root (`~/.config` on Linux).
fn config_root_dir() -> Option<PathBuf> {
    dirs::config_dir()
}

pub(super) fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let config_text = read_config_text(path_override, &read_file, &config_root)?;
    let parsed: FileConfig = toml::from_str(&config_text)?;
    let mut config = parsed.into_config();

    if let Some(file) = env_lookup(ENV_ROSTER_FILE).filter(|v| !v.trim().is_empty()) {
        config.roster.file = file;
    }

    Ok(config)
}

/// Read config text from the highest-precedence available source.
fn read_config_text<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<String, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    // 1) Explicit override path from the CLI takes absolute precedence, and
    //    unlike the fallback sources its read errors are fatal.
    if let Some(p) = path_override {
        return Ok(read_file(Path::new(p))?);
    }

    // 2) Local config next to the roster file.
    if let Ok(text) = read_file(Path::new(CONFIG_FILE_NAME)) {
        return Ok(text);
    }

    // 3) Global per-user config.
    if let Some(dir) = config_root() {
        let global = dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        if let Ok(text) = read_file(&global) {
            return Ok(text);
        }
    }

    // 4) Nothing found; empty text parses into built-in defaults.
    Ok(String::new())
}
