use anyhow::Result;

use super::super::args::FlattenCommand;
use super::helper::{flatten_dataset, load_settings};
use super::{CommandResult, CommandSummary, FlattenSummary};
use crate::json_writer::write_json_file;

pub fn flatten(cmd: FlattenCommand) -> Result<CommandResult> {
    let config = load_settings(cmd.dataset.verbose)?;
    let (flattened, stats) = flatten_dataset(&cmd.dataset, &config)?;

    // Stdout output is left to the reporter so warnings print first.
    if let Some(path) = &cmd.output {
        write_json_file(path, &flattened.records)?;
    }

    Ok(CommandResult {
        summary: CommandSummary::Flatten(FlattenSummary {
            records: flattened.records,
            output: cmd.output,
        }),
        skipped: flattened.skipped,
        dataset: Some(stats),
    })
}
