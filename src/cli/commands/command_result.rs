use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::core::{FundingRecord, KnownSource, SkippedLabel};

#[derive(Debug)]
pub enum CommandSummary {
    Flatten(FlattenSummary),
    Index(IndexSummary),
    Lookup(LookupSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct FlattenSummary {
    pub records: Vec<FundingRecord>,
    /// File the records were written to; `None` means they go to stdout.
    pub output: Option<PathBuf>,
}

#[derive(Debug)]
pub struct IndexSummary {
    pub entry_count: usize,
    pub output: PathBuf,
}

#[derive(Debug)]
pub struct LookupSummary {
    /// Lowercased query address.
    pub address: String,
    pub source: Option<KnownSource>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Counts from a dataset pass, shown with `--verbose`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetStats {
    pub label_count: usize,
    pub record_count: usize,
}

/// Result of running cexflat commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Malformed labels, in encounter order.
    pub skipped: Vec<SkippedLabel>,
    /// Present when the command read the wallets dataset.
    pub dataset: Option<DatasetStats>,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        Self {
            summary,
            skipped: Vec::new(),
            dataset: None,
        }
    }

    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Lookup(LookupSummary { source: None, .. })
            | CommandSummary::Init(InitSummary { created: false }) => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}
