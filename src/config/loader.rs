// src/config/loader.rs

//! On-disk locations and first-run setup.
//!
//! Everything lives in an `exerun/` directory under the user config dir:
//! `config` (runner configuration) and `catalog` (the entry list). On first
//! run the directory and both files are created with defaults; afterwards
//! both are loaded at startup. Read failures on either file leave defaults
//! in place rather than aborting — a broken config should not make the tool
//! unusable.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, warn};

use crate::catalog::{Catalog, codec};
use crate::config::model::RunnerConfig;

/// Name of the per-user directory holding our files.
const PROGRAM_DIR: &str = "exerun";

/// Resolved on-disk locations for the config and catalog files.
#[derive(Debug, Clone)]
pub struct Paths {
    pub dir: PathBuf,
    pub config_file: PathBuf,
    pub catalog_file: PathBuf,
}

impl Paths {
    /// Locations under the user's config directory.
    pub fn resolve() -> Result<Self> {
        let base = dirs::config_dir()
            .ok_or_else(|| anyhow!("could not determine the user config directory"))?;
        Ok(Self::under(&base))
    }

    /// Locations under an explicit base directory.
    pub fn under(base: &Path) -> Self {
        let dir = base.join(PROGRAM_DIR);
        let config_file = dir.join("config");
        let catalog_file = dir.join("catalog");
        Self {
            dir,
            config_file,
            catalog_file,
        }
    }
}

/// Startup state: the runner configuration plus the catalog loaded from
/// disk (empty until the first scan).
#[derive(Debug)]
pub struct Runner {
    pub config: RunnerConfig,
    pub catalog: Catalog,
    pub paths: Paths,
}

impl Runner {
    /// Initialise from the user config directory.
    pub fn init() -> Result<Self> {
        Self::init_with(Paths::resolve()?)
    }

    /// Initialise from explicit paths, creating the program directory and
    /// default files on first run.
    pub fn init_with(paths: Paths) -> Result<Self> {
        fs::create_dir_all(&paths.dir)
            .with_context(|| format!("creating program directory at {:?}", paths.dir))?;

        let config = load_or_create_config(&paths.config_file);
        let catalog = load_or_create_catalog(&paths.catalog_file);

        debug!(
            program = %config.program,
            entries = catalog.len(),
            dir = ?paths.dir,
            "runner initialised"
        );

        Ok(Self {
            config,
            catalog,
            paths,
        })
    }

    /// Rewrite the config file in full from the current configuration.
    pub fn save_config(&self) -> Result<()> {
        fs::write(&self.paths.config_file, self.config.encode())
            .with_context(|| format!("writing config file at {:?}", self.paths.config_file))
    }
}

fn load_or_create_config(path: &Path) -> RunnerConfig {
    if path.exists() {
        match fs::read_to_string(path) {
            Ok(text) => return RunnerConfig::decode(&text),
            Err(err) => {
                warn!(path = ?path, error = %err, "could not read config file, using defaults");
                return RunnerConfig::default();
            }
        }
    }

    let config = RunnerConfig::default();
    if let Err(err) = fs::write(path, config.encode()) {
        warn!(path = ?path, error = %err, "could not write default config file");
    }
    config
}

fn load_or_create_catalog(path: &Path) -> Catalog {
    if path.exists() {
        match codec::import_file(path) {
            Ok(catalog) => return catalog,
            Err(err) => {
                warn!(path = ?path, error = %err, "could not read catalog file, starting empty");
                return Catalog::default();
            }
        }
    }

    if let Err(err) = fs::write(path, "") {
        warn!(path = ?path, error = %err, "could not create empty catalog file");
    }
    Catalog::default()
}
