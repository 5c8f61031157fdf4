//! # Robots Handler
//!
//! Serves `/robots.txt`: every crawler may index everything, and the
//! sitemap and canonical host point at `SITE_URL`.

use crate::state::AppState;
use axum::{extract::State, http::header, response::IntoResponse};
use std::fmt::Write;

/// One `User-Agent` block of a robots policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsRule {
    pub user_agent: String,
    pub allow: Vec<String>,
    pub disallow: Vec<String>,
}

/// Crawler policy for the site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Robots {
    pub rules: Vec<RobotsRule>,
    pub host: String,
    pub sitemap: String,
}

impl Robots {
    /// Allow-all policy for `site_url`
    pub fn allow_all(site_url: &str) -> Self {
        Robots {
            rules: vec![RobotsRule {
                user_agent: "*".to_string(),
                allow: vec!["/".to_string()],
                disallow: Vec::new(),
            }],
            host: site_url.to_string(),
            sitemap: format!("{site_url}/sitemap.xml"),
        }
    }

    /// Render in robots.txt format
    pub fn render(&self) -> String {
        let mut out = String::new();

        for rule in &self.rules {
            let _ = writeln!(out, "User-Agent: {}", rule.user_agent);
            for path in &rule.allow {
                let _ = writeln!(out, "Allow: {path}");
            }
            for path in &rule.disallow {
                let _ = writeln!(out, "Disallow: {path}");
            }
            out.push('\n');
        }

        let _ = writeln!(out, "Host: {}", self.host);
        let _ = writeln!(out, "Sitemap: {}", self.sitemap);
        out
    }
}

/// GET /robots.txt
pub async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
    let robots = Robots::allow_all(&state.config.site_url);

    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots.render(),
    )
}
