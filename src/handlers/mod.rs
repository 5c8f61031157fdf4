//! # HTTP Request Handlers
//!
//! - `health`: health check endpoint (for monitoring)
//! - `robots`: robots.txt crawler policy
//! - `surahs`: surah lookup by number
//!
//! Handlers take what they need from the request (path params, shared
//! state), call into the surah index, and return JSON or text.

pub mod health;
pub mod robots;
pub mod surahs;
