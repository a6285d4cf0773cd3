use std::error::Error;

use exerun::catalog::Catalog;
use exerun::config::RunnerConfig;
use exerun::exec::{LaunchMode, launch, resolve};

type TestResult = Result<(), Box<dyn Error>>;

fn three_entry_catalog() -> Catalog {
    Catalog::from_pairs([
        ("one".to_string(), "a/one.exe".to_string()),
        ("two".to_string(), "b/two.exe".to_string()),
        ("three".to_string(), "c/three.exe".to_string()),
    ])
}

#[test]
fn resolve_finds_entry_by_number() -> TestResult {
    let catalog = three_entry_catalog();
    let entry = resolve(&catalog, 2)?;
    assert_eq!(entry.name, "two");
    assert_eq!(entry.path, "b/two.exe");
    Ok(())
}

#[test]
fn resolve_missing_number_reports_not_in_list() {
    let catalog = three_entry_catalog();
    let err = resolve(&catalog, 5).unwrap_err();
    assert_eq!(err.to_string(), "exe number 5: not in list");
}

#[tokio::test]
async fn start_failure_surfaces_for_both_modes() {
    let catalog = Catalog::from_pairs([("x".to_string(), "x.exe".to_string())]);
    let entry = &catalog.entries()[0];
    let config = RunnerConfig {
        program: "exerun-no-such-program".to_string(),
        args: String::new(),
    };

    for mode in [LaunchMode::Detached, LaunchMode::Attached] {
        let err = launch(entry, &config, mode).await.unwrap_err();
        assert!(err.to_string().contains("could not execute exerun-no-such-program"));
    }
}

// The remaining tests drive a real child through `sh -c`, exercising the
// "args token before the target path" command-line layout.
#[cfg(unix)]
mod unix {
    use std::time::{Duration, Instant};

    use super::*;

    fn sh_config() -> RunnerConfig {
        RunnerConfig {
            program: "sh".to_string(),
            args: "-c".to_string(),
        }
    }

    fn script_catalog(script: &str) -> Catalog {
        Catalog::from_pairs([("script".to_string(), script.to_string())])
    }

    #[tokio::test]
    async fn attached_drains_both_streams_to_completion() -> TestResult {
        let catalog = script_catalog(
            "i=0; while [ $i -lt 40 ]; do echo out $i; echo err $i 1>&2; i=$((i+1)); done",
        );
        let entry = resolve(&catalog, 1)?;

        launch(entry, &sh_config(), LaunchMode::Attached).await?;
        Ok(())
    }

    #[tokio::test]
    async fn attached_waits_for_stream_close_not_process_exit() -> TestResult {
        // The shell exits immediately but hands its stdout pipe to a
        // background child that keeps it open a while longer. Attached mode
        // must block until that pipe closes, not merely until the shell
        // exits.
        let catalog = script_catalog("( sleep 0.4; echo late ) & exit 0");
        let entry = resolve(&catalog, 1)?;

        let started = Instant::now();
        launch(entry, &sh_config(), LaunchMode::Attached).await?;

        assert!(started.elapsed() >= Duration::from_millis(300));
        Ok(())
    }

    #[tokio::test]
    async fn detached_returns_without_waiting_for_exit() -> TestResult {
        let catalog = script_catalog("sleep 5");
        let entry = resolve(&catalog, 1)?;

        let started = Instant::now();
        launch(entry, &sh_config(), LaunchMode::Detached).await?;

        assert!(started.elapsed() < Duration::from_secs(2));
        Ok(())
    }

    #[tokio::test]
    async fn attached_succeeds_even_when_child_fails() -> TestResult {
        // A non-zero exit is the child's business; launch only fails when
        // the process cannot be started.
        let catalog = script_catalog("echo about to fail 1>&2; exit 7");
        let entry = resolve(&catalog, 1)?;

        launch(entry, &sh_config(), LaunchMode::Attached).await?;
        Ok(())
    }
}
