// src/exec/mod.rs

//! Process launching layer.
//!
//! Resolves a catalog entry by its number and spawns the configured external
//! runner against it, using `tokio::process::Command`. Two modes:
//!
//! - [`LaunchMode::Detached`]: spawn and return as soon as the OS confirms
//!   the process started.
//! - [`LaunchMode::Attached`]: pipe stdout and stderr, relay both streams
//!   line by line, and block until both have reached end-of-input.

pub mod launcher;

pub use launcher::{LaunchMode, launch, resolve};
