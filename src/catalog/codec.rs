// src/catalog/codec.rs

//! Text codec for the catalog file.
//!
//! One entry per line, `<name> => <path>`, whitespace around both sides
//! insignificant. Lines that do not split on `=>` into exactly two parts
//! are dropped silently: zero separators is malformed, two or more is
//! ambiguous (a path could itself contain `=>`). For the same reason
//! encoding does no escaping, so an entry whose name or path contains the
//! separator will not survive a round trip. That is a documented limitation
//! of the format, not something the codec papers over.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::catalog::Catalog;

/// The literal separator token between name and path.
pub const SEPARATOR: &str = "=>";

/// Parse catalog text into a [`Catalog`].
///
/// Never fails on content shape; surviving lines are numbered 1..n in file
/// order.
pub fn decode(text: &str) -> Catalog {
    let mut dropped = 0usize;
    let pairs: Vec<(String, String)> = text
        .split('\n')
        .filter_map(|line| {
            let parts: Vec<&str> = line.split(SEPARATOR).collect();
            if parts.len() != 2 {
                if !line.is_empty() {
                    dropped += 1;
                }
                return None;
            }
            Some((parts[0].trim().to_string(), parts[1].trim().to_string()))
        })
        .collect();

    if dropped > 0 {
        debug!(dropped, "dropped malformed catalog lines");
    }

    Catalog::from_pairs(pairs)
}

/// Render a [`Catalog`] as catalog-file text, one `<name> => <path>` line
/// per entry in catalog order.
pub fn encode(catalog: &Catalog) -> String {
    let mut out = String::new();
    for entry in catalog {
        out.push_str(&entry.name);
        out.push_str(" => ");
        out.push_str(&entry.path);
        out.push('\n');
    }
    out
}

/// Read and decode the catalog file at `path`.
///
/// The only failure mode is the file being unreadable; content shape never
/// errors.
pub fn import_file(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading catalog file at {:?}", path))?;
    let catalog = decode(&text);
    debug!(path = ?path, entries = catalog.len(), "imported catalog");
    Ok(catalog)
}

/// Encode `catalog` and overwrite the file at `path` with it.
pub fn export_file(path: impl AsRef<Path>, catalog: &Catalog) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, encode(catalog))
        .with_context(|| format!("writing catalog file at {:?}", path))?;
    debug!(path = ?path, entries = catalog.len(), "exported catalog");
    Ok(())
}
