use anyhow::Result;

use super::{
    args::Command,
    commands::CommandResult,
    commands::{flatten::flatten, index::index, init::init, lookup::lookup},
};

/// Dispatch a parsed command to its handler.
///
/// # Returns
/// - `Ok(CommandResult)` with the command's summary and any skipped labels
/// - `Err` if the command fails (e.g., dataset not found, invalid JSON)
pub fn run(command: Command) -> Result<CommandResult> {
    match command {
        Command::Flatten(cmd) => flatten(cmd),
        Command::Index(cmd) => index(cmd),
        Command::Lookup(cmd) => lookup(cmd),
        Command::Init => init(),
    }
}
