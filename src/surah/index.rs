//! # Surah Index
//!
//! Reverse index from surah number to surah name, derived once from the
//! catalog at startup and only read afterwards.

use super::catalog::Catalog;
use crate::error::CatalogError;
use std::collections::HashMap;

/// Number → name lookup table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurahIndex {
    names: HashMap<u32, String>,
}

impl SurahIndex {
    /// Invert `catalog`, walking entries in source order
    ///
    /// When two names share a number the later one wins. Each overwrite is
    /// logged so bad data is visible even though it isn't rejected.
    pub fn build(catalog: &Catalog) -> Self {
        let mut names = HashMap::with_capacity(catalog.len());

        for (name, number) in catalog.iter() {
            if let Some(previous) = names.insert(number, name.to_string()) {
                tracing::warn!(
                    number,
                    discarded = %previous,
                    kept = name,
                    "Duplicate surah number in catalog, last entry wins"
                );
            }
        }

        Self { names }
    }

    /// Like `build`, but fails on the first number that appears twice
    pub fn build_strict(catalog: &Catalog) -> Result<Self, CatalogError> {
        let mut names: HashMap<u32, String> = HashMap::with_capacity(catalog.len());

        for (name, number) in catalog.iter() {
            if let Some(first) = names.get(&number) {
                return Err(CatalogError::DuplicateNumber {
                    number,
                    first: first.clone(),
                    second: name.to_string(),
                });
            }
            names.insert(number, name.to_string());
        }

        Ok(Self { names })
    }

    /// Name for `number`, or `None` if no surah has it
    ///
    /// Accepts any integer; negative or oversized numbers are simply absent.
    pub fn lookup(&self, number: i64) -> Option<&str> {
        let number = u32::try_from(number).ok()?;
        self.names.get(&number).map(String::as_str)
    }

    /// All `(number, name)` pairs, ascending by number
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        let mut pairs: Vec<(u32, &str)> = self
            .names
            .iter()
            .map(|(number, name)| (*number, name.as_str()))
            .collect();
        pairs.sort_unstable_by_key(|(number, _)| *number);
        pairs.into_iter()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
