//! # Application State
//!
//! Shared state handed to every request handler through axum's `State`.
//! Everything here is built once at startup and never mutated, so clones
//! only copy `Arc` pointers.

use crate::config::Config;
use crate::error::CatalogError;
use crate::surah::{Catalog, SurahIndex};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (robots.txt reads the site URL from here)
    pub config: Arc<Config>,

    /// Number → name reverse index of the surah catalog
    pub surahs: Arc<SurahIndex>,
}

impl AppState {
    /// Load the surah catalog and build the reverse index
    ///
    /// # Errors
    /// Fails if the catalog can't be read or validated, or if two surahs
    /// share a number.
    pub fn new(config: &Config) -> Result<Self, CatalogError> {
        let catalog = Catalog::load(config.surah_data_path.as_deref())?;
        tracing::info!("Loaded surah catalog with {} entries", catalog.len());

        let surahs = SurahIndex::build_strict(&catalog)?;

        Ok(Self::from_parts(config.clone(), surahs))
    }

    /// Assemble state from an already-built index
    pub fn from_parts(config: Config, surahs: SurahIndex) -> Self {
        AppState {
            config: Arc::new(config),
            surahs: Arc::new(surahs),
        }
    }
}
