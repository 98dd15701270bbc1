//! Response construction.
//!
//! The routing engine builds exactly one response of its own: the not-found
//! answer returned when nothing else matched.

use axum::body::Body;
use axum::http::{Response, StatusCode};

/// `404 Not Found`, no headers, empty body.
pub fn not_found() -> Response<Body> {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::NOT_FOUND;
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_not_found_is_bare() {
        let response = not_found();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().is_empty());

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }
}
