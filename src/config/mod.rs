// src/config/mod.rs

//! Runner configuration: which external program launches catalog entries,
//! and where the config and catalog files live on disk.
//!
//! - [`model`] holds [`RunnerConfig`](model::RunnerConfig) and its
//!   `key = value` text codec.
//! - [`loader`] resolves on-disk locations and performs first-run setup.

pub mod loader;
pub mod model;

pub use loader::{Paths, Runner};
pub use model::RunnerConfig;
