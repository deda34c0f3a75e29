use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_WALLETS_POINTER;

pub const CONFIG_FILE_NAME: &str = ".cexflatrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_dataset")]
    pub dataset: String,
    #[serde(default = "default_wallets_pointer")]
    pub wallets_pointer: String,
    #[serde(default = "default_known_sources_file")]
    pub known_sources_file: String,
}

fn default_dataset() -> String {
    "./dataset.json".to_string()
}

fn default_wallets_pointer() -> String {
    DEFAULT_WALLETS_POINTER.to_string()
}

fn default_known_sources_file() -> String {
    "./data/known_funding_sources.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: default_dataset(),
            wallets_pointer: default_wallets_pointer(),
            known_sources_file: default_known_sources_file(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// `walletsPointer` must be a JSON pointer: empty, or starting with `/`.
    pub fn validate(&self) -> Result<()> {
        if !self.wallets_pointer.is_empty() && !self.wallets_pointer.starts_with('/') {
            bail!(
                "Invalid JSON pointer in 'walletsPointer': \"{}\" (must start with '/')",
                self.wallets_pointer
            );
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
