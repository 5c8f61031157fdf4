use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Path prefixes the request hook applies to
///
/// Empty by default, so the hook matches nothing.
#[derive(Debug, Clone, Default)]
pub struct RouteMatcher {
    prefixes: Vec<String>,
}

impl RouteMatcher {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RouteMatcher {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        self.prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
    }
}

/// Per-request hook; always forwards the request unmodified
pub async fn passthrough(
    State(matcher): State<Arc<RouteMatcher>>,
    request: Request,
    next: Next,
) -> Response {
    if matcher.matches(request.uri().path()) {
        tracing::trace!(path = %request.uri().path(), "Request hook matched");
    }

    next.run(request).await
}
