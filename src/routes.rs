//! # Routes
//!
//! Builds the application router from shared state.

use crate::handlers::{
    health::health_check,
    robots::robots_txt,
    surahs::{get_surah, list_surahs},
};
use crate::middleware::passthrough::{passthrough, RouteMatcher};
use crate::state::AppState;
use axum::{middleware as axum_middleware, routing::get, Router};
use std::sync::Arc;
use time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

/// Assemble every route and layer
pub fn router(state: AppState) -> Router {
    // Sessions live in memory and expire after the configured inactivity
    let session_layer = SessionManagerLayer::new(MemoryStore::default()).with_expiry(
        Expiry::OnInactivity(Duration::hours(i64::from(state.config.session_ttl_hours))),
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health_check))
        .route("/robots.txt", get(robots_txt))
        .route("/api/surahs", get(list_surahs))
        .route("/api/surahs/{number}", get(get_surah))
        // Request hook; matches no routes by default
        .layer(axum_middleware::from_fn_with_state(
            Arc::new(RouteMatcher::default()),
            passthrough,
        ))
        .layer(session_layer)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::handlers::surahs::SurahResponse;
    use crate::surah::{Catalog, SurahIndex};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let catalog =
            Catalog::from_entries([("Al-Fatihah", 1), ("Al-Baqarah", 2), ("An-Nas", 114)])
                .unwrap();
        let config = Config {
            site_url: "https://quran.example.com".to_string(),
            ..Config::default()
        };
        router(AppState::from_parts(config, SurahIndex::build(&catalog)))
    }

    fn app_with_ttl(session_ttl_hours: u32) -> Router {
        let catalog = Catalog::from_entries([("Al-Fatihah", 1)]).unwrap();
        let config = Config {
            session_ttl_hours,
            ..Config::default()
        };
        router(AppState::from_parts(config, SurahIndex::build(&catalog)))
    }

    async fn send_get(app: Router, uri: &str) -> axum::response::Response {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        app.oneshot(req).await.unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(resp: axum::response::Response) -> T {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(resp: axum::response::Response) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let resp = send_get(test_app(), "/api/health").await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = body_json(resp).await;
        assert_eq!(body["status"], "ok");
        let timestamp = body["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[tokio::test]
    async fn robots_txt_allows_everything() {
        let resp = send_get(test_app(), "/robots.txt").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );

        let body = body_text(resp).await;
        assert!(body.starts_with("User-Agent: *\nAllow: /\n"));
        assert!(body.contains("Host: https://quran.example.com\n"));
        assert!(body.contains("Sitemap: https://quran.example.com/sitemap.xml\n"));
    }

    #[tokio::test]
    async fn surah_lookup_by_number() {
        let resp = send_get(test_app(), "/api/surahs/2").await;
        assert_eq!(resp.status(), StatusCode::OK);

        let surah: SurahResponse = body_json(resp).await;
        assert_eq!(
            surah,
            SurahResponse {
                number: 2,
                name: "Al-Baqarah".to_string()
            }
        );
    }

    #[tokio::test]
    async fn unknown_surah_is_404() {
        for uri in ["/api/surahs/3", "/api/surahs/9999", "/api/surahs/-1"] {
            let resp = send_get(test_app(), uri).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");

            let body: Value = body_json(resp).await;
            assert!(body["error"].as_str().unwrap().starts_with("Not found"));
        }
    }

    #[tokio::test]
    async fn non_numeric_surah_is_400() {
        let resp = send_get(test_app(), "/api/surahs/fatihah").await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn longest_session_ttl_builds_router() {
        let resp = send_get(app_with_ttl(crate::config::MAX_SESSION_TTL_HOURS), "/api/health").await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn overflowing_surah_number_is_404() {
        for uri in ["/api/surahs/99999999999999999999", "/api/surahs/-99999999999999999999"] {
            let resp = send_get(test_app(), uri).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[tokio::test]
    async fn list_is_sorted_by_number() {
        let resp = send_get(test_app(), "/api/surahs").await;
        assert_eq!(resp.status(), StatusCode::OK);

        let surahs: Vec<SurahResponse> = body_json(resp).await;
        let numbers: Vec<u32> = surahs.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 114]);
        assert_eq!(surahs[2].name, "An-Nas");
    }
}
