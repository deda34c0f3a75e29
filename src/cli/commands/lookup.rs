use std::path::PathBuf;

use anyhow::Result;

use super::super::args::LookupCommand;
use super::helper::load_settings;
use super::{CommandResult, CommandSummary, LookupSummary};
use crate::core::KnownSources;

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let config = load_settings(false)?;
    let path = cmd
        .sources
        .unwrap_or_else(|| PathBuf::from(&config.known_sources_file));
    let sources = KnownSources::load(&path)?;

    let source = sources.lookup(&cmd.address).cloned();
    Ok(CommandResult::new(CommandSummary::Lookup(LookupSummary {
        address: cmd.address.to_lowercase(),
        source,
    })))
}
