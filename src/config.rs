//! # Configuration Management
//!
//! This module loads configuration from environment variables, with an
//! optional `.env` file for local development.
//!
//! ## Environment Variables
//! - `HOST`: Server bind address (default: 127.0.0.1)
//! - `PORT`: Server port (default: 3000)
//! - `SITE_URL`: Public URL of the site, used in robots.txt
//! - `SURAH_DATA_PATH`: JSON catalog to load instead of the built-in one
//! - `SESSION_TTL_HOURS`: Session inactivity expiry, 1 to 8760 (default: 24)

use anyhow::{ensure, Result};
use std::env;
use std::path::PathBuf;

/// Longest allowed session inactivity window: one year
pub const MAX_SESSION_TTL_HOURS: u32 = 24 * 365;

/// Application configuration
///
/// Holds every value needed to run the server. Fields are public so the
/// router and handlers can read them directly.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host/IP address to bind to
    /// Examples: "127.0.0.1" (localhost only), "0.0.0.0" (all interfaces)
    pub host: String,

    /// Server port number
    /// Default: 3000
    pub port: u16,

    /// Public base URL, without a trailing slash
    /// Used for the `Host:` and `Sitemap:` lines of robots.txt
    /// Example: "https://quran.example.com"
    pub site_url: String,

    /// Optional override for the surah catalog
    /// When unset, the catalog compiled into the binary is used
    pub surah_data_path: Option<PathBuf>,

    /// Hours of inactivity before a session expires
    /// Always between 1 and `MAX_SESSION_TTL_HOURS`
    pub session_ttl_hours: u32,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads variables from .env file (if present) using dotenvy
    /// 2. Reads each value from the environment, falling back to defaults
    /// 3. Returns an error if a value is present but invalid
    ///    (e.g. `PORT=abc` or `SESSION_TTL_HOURS=0`)
    ///
    /// ## Example .env file
    /// ```text
    /// HOST=127.0.0.1
    /// PORT=3000
    /// SITE_URL=https://quran.example.com
    /// SESSION_TTL_HOURS=24
    /// ```
    pub fn from_env() -> Result<Self> {
        // dotenvy doesn't error if the file is missing
        dotenvy::dotenv().ok();

        Ok(Config {
            // Where to bind the TCP listener
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),

            // The ? operator propagates parse errors for invalid ports
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,

            // Canonical site URL for crawlers
            site_url: normalize_site_url(
                &env::var("SITE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string()),
            ),

            // An empty value counts as unset
            surah_data_path: env::var("SURAH_DATA_PATH")
                .ok()
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),

            session_ttl_hours: parse_session_ttl(
                &env::var("SESSION_TTL_HOURS").unwrap_or_else(|_| "24".to_string()),
            )?,
        })
    }

    /// Socket address for `TcpListener::bind`, e.g. "127.0.0.1:3000"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 3000,
            site_url: "http://localhost:3000".to_string(),
            surah_data_path: None,
            session_ttl_hours: 24,
        }
    }
}

fn normalize_site_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Parse `SESSION_TTL_HOURS`; negative or non-numeric values fail to parse
fn parse_session_ttl(raw: &str) -> Result<u32> {
    let hours: u32 = raw.trim().parse()?;
    ensure!(hours > 0, "SESSION_TTL_HOURS must be at least 1");
    ensure!(
        hours <= MAX_SESSION_TTL_HOURS,
        "SESSION_TTL_HOURS must be at most {MAX_SESSION_TTL_HOURS}"
    );
    Ok(hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_address_joins_host_and_port() {
        let config = Config {
            host: "0.0.0.0".to_string(),
            port: 8080,
            ..Config::default()
        };
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn site_url_loses_trailing_slashes() {
        assert_eq!(normalize_site_url("https://example.com/"), "https://example.com");
        assert_eq!(normalize_site_url(" https://example.com// "), "https://example.com");
        assert_eq!(normalize_site_url("https://example.com"), "https://example.com");
    }

    #[test]
    fn session_ttl_accepts_values_in_range() {
        assert_eq!(parse_session_ttl("24").unwrap(), 24);
        assert_eq!(parse_session_ttl(" 1 ").unwrap(), 1);
        assert_eq!(parse_session_ttl("8760").unwrap(), MAX_SESSION_TTL_HOURS);
    }

    #[test]
    fn session_ttl_rejects_negative_values() {
        assert!(parse_session_ttl("-5").is_err());
    }

    #[test]
    fn session_ttl_rejects_zero() {
        assert!(parse_session_ttl("0").is_err());
    }

    #[test]
    fn session_ttl_rejects_oversized_values() {
        assert!(parse_session_ttl("8761").is_err());
        assert!(parse_session_ttl("9000000000000000").is_err());
    }

    #[test]
    fn session_ttl_rejects_garbage() {
        assert!(parse_session_ttl("a day").is_err());
        assert!(parse_session_ttl("").is_err());
    }
}
