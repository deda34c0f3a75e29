use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use super::DatasetStats;
use super::super::args::DatasetArgs;
use crate::config::{CONFIG_FILE_NAME, Config, load_config};
use crate::core::{Flattened, flatten, load_dataset};

/// Load `.cexflatrc.json` from the working directory upwards, or defaults.
pub fn load_settings(verbose: bool) -> Result<Config> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let config_result = load_config(&cwd)?;

    if verbose && !config_result.from_file {
        eprintln!(
            "Note: No {} found, using default configuration",
            CONFIG_FILE_NAME
        );
    }

    Ok(config_result.config)
}

/// Dataset path and pointer after applying CLI overrides to the config.
pub fn dataset_source(args: &DatasetArgs, config: &Config) -> (PathBuf, String) {
    let path = args
        .dataset
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.dataset));
    let pointer = args
        .pointer
        .clone()
        .unwrap_or_else(|| config.wallets_pointer.clone());
    (path, pointer)
}

pub fn flatten_dataset(args: &DatasetArgs, config: &Config) -> Result<(Flattened, DatasetStats)> {
    let (path, pointer) = dataset_source(args, config);
    let wallets = load_dataset(&path, &pointer)?;
    let flattened = flatten(&wallets);
    let stats = DatasetStats {
        label_count: wallets.len(),
        record_count: flattened.records.len(),
    };
    Ok((flattened, stats))
}
