//! # Surah Catalog
//!
//! The static name → number mapping the reverse index is built from.
//! Entries keep the order they appear in the source JSON, which is the order
//! the index builder walks them in.

use crate::error::CatalogError;
use serde_json::{Map, Value};
use std::path::Path;

/// Built-in catalog of the 114 surahs
const EMBEDDED_CATALOG: &str = include_str!("../../data/surahs.json");

/// Ordered, validated name → number mapping
///
/// Immutable once constructed. Names are non-empty and numbers are positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<(String, u32)>,
}

impl Catalog {
    /// Build a catalog from `(name, number)` pairs, keeping their order
    ///
    /// Applies the same validation as `from_json_str`.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let entries: Vec<(String, u32)> = entries
            .into_iter()
            .map(|(name, number)| (name.into(), number))
            .collect();

        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (name, number) in &entries {
            if name.is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if *number == 0 {
                return Err(CatalogError::InvalidNumber { name: name.clone() });
            }
        }

        Ok(Self { entries })
    }

    /// Parse a catalog from a JSON object like `{"Al-Fatihah": 1, ...}`
    ///
    /// serde_json is built with `preserve_order`, so iterating the parsed
    /// object yields keys in document order.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let object: Map<String, Value> = serde_json::from_str(json)?;

        let mut entries = Vec::with_capacity(object.len());
        for (name, value) in object {
            let number = value
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| CatalogError::InvalidNumber { name: name.clone() })?;
            entries.push((name, number));
        }

        Self::from_entries(entries)
    }

    /// The catalog compiled into the binary
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json_str(EMBEDDED_CATALOG)
    }

    /// Load from `path` if given, otherwise fall back to the embedded catalog
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => {
                tracing::debug!("Loading surah catalog from {}", path.display());
                let json = std::fs::read_to_string(path)?;
                Self::from_json_str(&json)
            }
            None => Self::embedded(),
        }
    }

    /// Entries in source order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(name, number)| (name.as_str(), *number))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
