use std::error::Error;
use std::fs;

use exerun::config::{Paths, Runner, RunnerConfig};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn defaults_point_at_wine_with_no_args() {
    let config = RunnerConfig::default();
    assert_eq!(config.program, "wine");
    assert_eq!(config.args, "");
}

#[test]
fn decode_recognizes_program_and_args() {
    let config = RunnerConfig::decode("Program = crossover\nArgs = --verbose\n");
    assert_eq!(config.program, "crossover");
    assert_eq!(config.args, "--verbose");
}

#[test]
fn decode_ignores_unknown_keys_and_malformed_lines() {
    let text = "Program = proton\nColor = blue\nnot a pair\nA=B=C\n";
    let config = RunnerConfig::decode(text);
    assert_eq!(config.program, "proton");
    // untouched default
    assert_eq!(config.args, "");
}

#[test]
fn encode_rewrites_both_keys() {
    let config = RunnerConfig {
        program: "wine64".to_string(),
        args: "--fast".to_string(),
    };
    assert_eq!(config.encode(), "Program = wine64\nArgs = --fast\n");
}

#[test]
fn encode_decode_round_trip() {
    let config = RunnerConfig {
        program: "proton".to_string(),
        args: "run".to_string(),
    };
    assert_eq!(RunnerConfig::decode(&config.encode()), config);
}

#[test]
fn paths_live_under_a_program_directory() {
    let paths = Paths::under("/base".as_ref());
    assert_eq!(paths.dir, std::path::Path::new("/base/exerun"));
    assert_eq!(paths.config_file, paths.dir.join("config"));
    assert_eq!(paths.catalog_file, paths.dir.join("catalog"));
}

#[test]
fn first_init_creates_directory_and_default_files() -> TestResult {
    let base = tempfile::tempdir()?;
    let paths = Paths::under(base.path());

    let runner = Runner::init_with(paths.clone())?;

    assert_eq!(runner.config, RunnerConfig::default());
    assert!(runner.catalog.is_empty());
    assert!(paths.dir.is_dir());
    assert_eq!(
        fs::read_to_string(&paths.config_file)?,
        RunnerConfig::default().encode()
    );
    assert_eq!(fs::read_to_string(&paths.catalog_file)?, "");
    Ok(())
}

#[test]
fn later_init_loads_existing_config_and_catalog() -> TestResult {
    let base = tempfile::tempdir()?;
    let paths = Paths::under(base.path());
    Runner::init_with(paths.clone())?;

    fs::write(&paths.config_file, "Program = proton\nArgs = run\n")?;
    fs::write(&paths.catalog_file, "doom => games/doom.exe\n")?;

    let runner = Runner::init_with(paths)?;

    assert_eq!(runner.config.program, "proton");
    assert_eq!(runner.config.args, "run");
    assert_eq!(runner.catalog.len(), 1);
    assert_eq!(runner.catalog.entries()[0].name, "doom");
    assert_eq!(runner.catalog.entries()[0].number, 1);
    Ok(())
}

#[test]
fn save_config_rewrites_the_file_in_full() -> TestResult {
    let base = tempfile::tempdir()?;
    let mut runner = Runner::init_with(Paths::under(base.path()))?;

    runner.config.program = "wine64".to_string();
    runner.save_config()?;

    assert_eq!(
        fs::read_to_string(&runner.paths.config_file)?,
        "Program = wine64\nArgs = \n"
    );
    Ok(())
}
