//! Shared utilities for integration tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use segment_router::PathParams;

/// Build a bodiless request.
pub fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// A handler answering with `text` as the body.
pub fn text(text: &'static str) -> impl Fn(&mut Request<Body>) -> Option<Response<Body>> + Send + Sync {
    move |_req: &mut Request<Body>| Some(Response::new(Body::from(text)))
}

/// A handler echoing the captured params as `k=v` pairs sorted by name.
pub fn echo_params(req: &mut Request<Body>) -> Option<Response<Body>> {
    let body = PathParams::of(req)
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(",");
    Some(Response::new(Body::from(body)))
}

/// Read a response body to a string.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
