// src/lib.rs

pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;

use std::path::PathBuf;

use tracing::info;

use crate::catalog::{codec, scanner};
use crate::cli::CliArgs;
use crate::config::Runner;
use crate::exec::LaunchMode;

/// Exit codes promised to callers.
const EXIT_OK: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONVERSION: i32 = 2;
const EXIT_EXECUTION: i32 = 3;

/// High-level entry point used by `main.rs`. Dispatches on the action
/// flags and returns the process exit code.
pub async fn run(args: CliArgs) -> i32 {
    if args.is_empty() {
        cli::print_usage();
        return EXIT_OK;
    }

    if let Some(key) = &args.run {
        return run_entry(key, LaunchMode::Detached).await;
    }
    if let Some(key) = &args.run_attached {
        return run_entry(key, LaunchMode::Attached).await;
    }
    if let Some(dir) = &args.scan {
        return scan_into_catalog(dir.as_deref());
    }

    // -l
    list_catalog()
}

/// Resolve the selection key and launch the matching entry.
async fn run_entry(key: &str, mode: LaunchMode) -> i32 {
    let number: u32 = match key.parse() {
        Ok(number) => number,
        Err(_) => {
            println!("conversion error: {key} is not a number");
            return EXIT_CONVERSION;
        }
    };

    let runner = match Runner::init() {
        Ok(runner) => runner,
        Err(err) => {
            println!("startup error: {err:#}");
            return EXIT_INPUT;
        }
    };

    let entry = match exec::resolve(&runner.catalog, number) {
        Ok(entry) => entry,
        Err(err) => {
            println!("run error: {err:#}");
            return EXIT_EXECUTION;
        }
    };

    if mode == LaunchMode::Attached {
        println!("stat: number {number} will be run");
    }

    if let Err(err) = exec::launch(entry, &runner.config, mode).await {
        println!("run error: {err:#}");
        return EXIT_EXECUTION;
    }

    match mode {
        LaunchMode::Detached => println!("stat: number {number} was run"),
        LaunchMode::Attached => println!("stat: number {number} finished running"),
    }
    EXIT_OK
}

/// Scan a directory and overwrite the catalog file with the result.
fn scan_into_catalog(dir: Option<&str>) -> i32 {
    let dir = match dir {
        Some(dir) => PathBuf::from(dir),
        None => {
            println!("stat: no scan dir given - assuming home dir");
            match dirs::home_dir() {
                Some(home) => home,
                None => {
                    println!("locating home dir error: no home directory found");
                    return EXIT_CONVERSION;
                }
            }
        }
    };

    let runner = match Runner::init() {
        Ok(runner) => runner,
        Err(err) => {
            println!("startup error: {err:#}");
            return EXIT_INPUT;
        }
    };

    let outcome = scanner::scan_dir(&dir);
    if !outcome.errors.is_empty() {
        for err in &outcome.errors {
            println!("scanning error: {err}");
        }
        return EXIT_EXECUTION;
    }

    println!("stat: dir {} was scanned", dir.display());
    info!(entries = outcome.catalog.len(), "scan produced catalog");

    if let Err(err) = codec::export_file(&runner.paths.catalog_file, &outcome.catalog) {
        println!("exporting scanned list error: {err:#}");
        return EXIT_INPUT;
    }

    println!("stat: list exported to {}", runner.paths.catalog_file.display());
    EXIT_OK
}

/// Print the catalog as `<number> <name>` lines.
fn list_catalog() -> i32 {
    let runner = match Runner::init() {
        Ok(runner) => runner,
        Err(err) => {
            println!("startup error: {err:#}");
            return EXIT_INPUT;
        }
    };

    for entry in &runner.catalog {
        println!("{} {}", entry.number, entry.name);
    }

    println!("stat: list printed");
    EXIT_OK
}
