//! Authentication primitive, re-exported unmodified from `tower-sessions`.

pub use tower_sessions::Session;
pub use tower_sessions::Session as Auth;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode, routing::get, Router};
    use tower::ServiceExt;
    use tower_sessions::{MemoryStore, SessionManagerLayer};

    #[tokio::test]
    async fn alias_extracts_under_session_layer() {
        let app = Router::new()
            .route(
                "/whoami",
                get(|auth: Auth| async move {
                    let user: Option<String> = auth.get("user_id").await.unwrap_or(None);
                    user.unwrap_or_else(|| "anonymous".to_string())
                }),
            )
            .layer(SessionManagerLayer::new(MemoryStore::default()));

        let req = Request::builder().uri("/whoami").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
