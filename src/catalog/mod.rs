// src/catalog/mod.rs

//! The in-memory catalog of discovered executables.
//!
//! A [`Catalog`] is an ordered, immutable snapshot: it is built in one go by
//! [`scanner`] or [`codec`], handed around by value, and discarded wholesale
//! rather than patched in place. Ordinals (`number`) are assigned once at
//! construction, 1-based in insertion order, and serve as the external
//! selection key for launching.

pub mod codec;
pub mod scanner;

/// One catalogued executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExeEntry {
    /// 1-based ordinal, unique within its catalog. Used as the selection
    /// key by `-r` / `-R`.
    pub number: u32,
    /// Human-readable label, the filename with its `.exe` suffix removed.
    pub name: String,
    /// Path to the target file, absolute or relative to the scanned
    /// directory. Not checked for existence at this level.
    pub path: String,
}

/// Ordered collection of [`ExeEntry`] values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<ExeEntry>,
}

impl Catalog {
    /// Build a catalog from `(name, path)` pairs, numbering them 1..n in
    /// the order given. This is the only way entries acquire ordinals.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let entries = pairs
            .into_iter()
            .zip(1u32..)
            .map(|((name, path), number)| ExeEntry { number, name, path })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[ExeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExeEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ExeEntry;
    type IntoIter = std::slice::Iter<'a, ExeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
