//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `flatten`: Flatten the wallets dataset into a JSON array (default)
//! - `index`: Build the address-keyed known funding sources file
//! - `lookup`: Check whether an address is a known funding source
//! - `init`: Initialize cexflat configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Resolve the command to run; a bare invocation flattens with defaults.
    pub fn command_or_default(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Flatten(FlattenCommand::default()))
    }

    /// Get the verbose flag from the command's dataset args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Flatten(cmd)) => cmd.dataset.verbose,
            Some(Command::Index(cmd)) => cmd.dataset.verbose,
            Some(Command::Lookup(_)) | Some(Command::Init) | None => false,
        }
    }
}

/// Dataset selection shared by commands that read the wallets dataset.
#[derive(Debug, Clone, Default, Args)]
pub struct DatasetArgs {
    /// Dataset JSON file, `-` for stdin (overrides config file)
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// JSON pointer to the label -> addresses object (overrides config file)
    #[arg(long)]
    pub pointer: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Default, Args)]
pub struct FlattenCommand {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Write the records to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct IndexCommand {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Flat records file to index (default: flatten the dataset)
    #[arg(short, long, conflicts_with_all = ["dataset", "pointer"])]
    pub input: Option<PathBuf>,

    /// Known sources file to write (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Address to look up (case-insensitive)
    pub address: String,

    /// Known sources file to read (overrides config file)
    #[arg(long)]
    pub sources: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Flatten exchange wallets into a JSON array of {address, label, type} records
    Flatten(FlattenCommand),
    /// Build the address-keyed known funding sources file
    Index(IndexCommand),
    /// Check whether an address is a known funding source
    Lookup(LookupCommand),
    /// Initialize a new .cexflatrc.json configuration file
    Init,
}
