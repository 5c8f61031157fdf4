//! # Surah Lookup
//!
//! - `catalog`: the static name → number source data
//! - `index`: the number → name reverse index built from it
//!
//! The index is built once in `AppState::new` and shared read-only.

pub mod catalog;
pub mod index;

pub use catalog::Catalog;
pub use index::SurahIndex;
