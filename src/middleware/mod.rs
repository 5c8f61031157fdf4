//! # Middleware Module
//!
//! - `passthrough`: per-request hook that forwards everything unmodified

pub mod passthrough;
