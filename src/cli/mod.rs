use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command, DatasetArgs, FlattenCommand, IndexCommand, LookupCommand};
pub use commands::{CommandResult, CommandSummary};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();
    let command = args.command_or_default();

    let result = run::run(command)?;
    report::print(&result, verbose)?;

    Ok(result.exit_status())
}
