// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! The selection key for `-r` / `-R` is taken as a raw string and converted
//! in [`crate::run`] so that a non-numeric key maps to the documented exit
//! code instead of a parse error from `clap`.

use clap::{CommandFactory, Parser, ValueEnum};

/// Command-line arguments for `exerun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "exerun",
    version,
    about = "Catalog .exe files found on disk and run them through an external runner.",
    long_about = None
)]
pub struct CliArgs {
    /// Run entry NUM from the catalog, detached (do not wait for it).
    #[arg(short = 'r', value_name = "NUM")]
    pub run: Option<String>,

    /// Run entry NUM attached: block and relay its output until both
    /// streams close.
    #[arg(short = 'R', value_name = "NUM")]
    pub run_attached: Option<String>,

    /// Scan DIR (default: your home directory) and overwrite the catalog
    /// file with the result.
    #[arg(short = 's', value_name = "DIR", num_args = 0..=1)]
    pub scan: Option<Option<String>>,

    /// Print the catalog, one "<number> <name>" per line.
    #[arg(short = 'l')]
    pub list: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `EXERUN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

impl CliArgs {
    /// True when no action flag was given, i.e. the invocation should only
    /// print usage.
    pub fn is_empty(&self) -> bool {
        self.run.is_none() && self.run_attached.is_none() && self.scan.is_none() && !self.list
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::try_parse()`.
pub fn try_parse() -> Result<CliArgs, clap::Error> {
    CliArgs::try_parse()
}

/// Print the usage text to stdout.
pub fn print_usage() {
    let _ = CliArgs::command().print_help();
}
