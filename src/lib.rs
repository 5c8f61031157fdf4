//! # Surah Site
//!
//! Backend for the surah reading site: health check, robots.txt and a
//! number → name lookup over the static surah catalog.
//!
//! The binary in `main.rs` only wires logging, configuration and the
//! listener; everything it serves lives in these modules.

pub mod auth; // Authentication primitive re-exported from tower-sessions
pub mod config; // Configuration from environment variables
pub mod error; // Error types and their HTTP responses
pub mod handlers; // HTTP request handlers
pub mod middleware; // Per-request hooks
pub mod routes; // Router assembly
pub mod state; // Shared application state
pub mod surah; // Surah catalog and reverse index
