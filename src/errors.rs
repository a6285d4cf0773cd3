// src/errors.rs

//! Crate-wide error aliases.
//!
//! Most failures here are I/O wrapped with `anyhow::Context` (which file,
//! which operation); per-path scan failures have their own structured type in
//! [`crate::catalog::scanner::ScanError`] because they are collected rather
//! than propagated.

pub use anyhow::{Error, Result};
