// src/exec/launcher.rs

use std::process::Stdio;

use anyhow::{Context, Result, anyhow};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, ExeEntry};
use crate::config::RunnerConfig;

/// How a launched process is handled after spawning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    /// Start the process and return immediately; no waiting, no output
    /// capture.
    Detached,
    /// Pipe stdout and stderr, relay both line by line, and block until
    /// both streams close.
    Attached,
}

/// Find the entry with the given number. Linear scan; catalogs are small.
pub fn resolve(catalog: &Catalog, number: u32) -> Result<&ExeEntry> {
    catalog
        .iter()
        .find(|entry| entry.number == number)
        .ok_or_else(|| anyhow!("exe number {number}: not in list"))
}

/// Spawn the configured runner against `entry`.
///
/// The command line is: program, then the configured argument token (when
/// non-empty), then the entry's path last. A spawn failure is the only
/// launch failure; in attached mode, errors while reading a stream are
/// relayed best-effort and do not fail the call.
pub async fn launch(entry: &ExeEntry, config: &RunnerConfig, mode: LaunchMode) -> Result<()> {
    let mut cmd = Command::new(&config.program);
    if !config.args.is_empty() {
        cmd.arg(&config.args);
    }
    cmd.arg(&entry.path);

    info!(
        program = %config.program,
        args = %config.args,
        target = %entry.path,
        ?mode,
        "launching"
    );

    match mode {
        LaunchMode::Detached => {
            cmd.spawn()
                .with_context(|| format!("could not execute {}", config.program))?;
            Ok(())
        }
        LaunchMode::Attached => {
            cmd.stdout(Stdio::piped()).stderr(Stdio::piped());

            let mut child = cmd
                .spawn()
                .with_context(|| format!("could not execute {}", config.program))?;

            // One relay task per stream so a burst on one cannot stall the
            // other. The handles complete at end-of-input, which may be
            // after the child itself has exited.
            let out_task = child.stdout.take().map(|s| spawn_relay("OUT:", s));
            let err_task = child.stderr.take().map(|s| spawn_relay("ERR:", s));

            let status = child
                .wait()
                .await
                .with_context(|| format!("waiting for {}", config.program))?;
            debug!(code = ?status.code(), "child exited");

            if let Some(task) = out_task {
                join_relay(task).await;
            }
            if let Some(task) = err_task {
                join_relay(task).await;
            }

            Ok(())
        }
    }
}

/// Read `stream` line by line, printing each with `prefix` as it arrives.
/// Returns the number of lines relayed once the stream closes.
fn spawn_relay<R>(prefix: &'static str, stream: R) -> JoinHandle<u64>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = BufReader::new(stream).lines();
        let mut count = 0u64;
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    println!("{prefix} {line}");
                    count += 1;
                }
                Ok(None) => break,
                Err(err) => {
                    // Best effort: a read error ends the relay but is not a
                    // launch failure.
                    warn!(stream = prefix, error = %err, "stream relay error");
                    break;
                }
            }
        }
        count
    })
}

async fn join_relay(task: JoinHandle<u64>) {
    match task.await {
        Ok(count) => debug!(lines = count, "stream drained"),
        Err(err) => warn!(error = %err, "stream relay task failed"),
    }
}
