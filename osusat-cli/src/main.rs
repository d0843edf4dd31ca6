//! `osusat` - pack, unpack and inspect OSUSat frames from the host.

mod cmd;
mod error;
mod logging;
mod report;

use clap::error::ErrorKind;
use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};

#[derive(Parser, Debug)]
#[command(name = "osusat", version, about = "OSUSat frame tool")]
struct Cli {
    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(
        long,
        value_name = "LEVEL",
        env = "OSUSAT_LOG_LEVEL",
        default_value = "info",
        global = true
    )]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

/// Exit code for an argument parsing outcome. Help and version are not failures.
fn parse_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => error::SUCCESS,
        _ => error::USAGE,
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(parse_exit_code(&err));
        }
    };
    init_logging(cli.log_format, cli.log_level);

    match cmd::run(cli.command) {
        Ok(()) => std::process::exit(error::SUCCESS),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code());
        }
    }
}
