use std::path::PathBuf;

use anyhow::Result;

use super::super::args::IndexCommand;
use super::helper::{flatten_dataset, load_settings};
use super::{CommandResult, CommandSummary, IndexSummary};
use crate::core::KnownSources;

pub fn index(cmd: IndexCommand) -> Result<CommandResult> {
    let config = load_settings(cmd.dataset.verbose)?;
    let output = cmd
        .output
        .unwrap_or_else(|| PathBuf::from(&config.known_sources_file));

    let (sources, skipped, dataset) = match &cmd.input {
        Some(input) => (KnownSources::from_records_file(input)?, Vec::new(), None),
        None => {
            let (flattened, stats) = flatten_dataset(&cmd.dataset, &config)?;
            (
                KnownSources::from_records(&flattened.records),
                flattened.skipped,
                Some(stats),
            )
        }
    };

    sources.save(&output)?;

    Ok(CommandResult {
        summary: CommandSummary::Index(IndexSummary {
            entry_count: sources.len(),
            output,
        }),
        skipped,
        dataset,
    })
}
