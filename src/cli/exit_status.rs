use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// Skipped (malformed) labels are reported but never change the exit status.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed.
    Success,
    /// Command completed with a negative answer (unknown address, config already present).
    Failure,
    /// Command failed (unreadable dataset, invalid JSON, bad config, IO error).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}
