//! Path segmentation and the per-request segment cache.
//!
//! # Responsibilities
//! - Split a URI path into its non-empty `/`-delimited segments
//! - Attach the split to the request so nested combinators reuse it
//! - Hand a subrouter's nested routes the view left after its mount prefix
//!
//! # Design Decisions
//! - The cache lives in the request's extensions, never in shared state
//! - Views share one `Arc<[String]>`; narrowing only moves an offset

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;

/// The path segments visible at the current nesting level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments {
    all: Arc<[String]>,
    offset: usize,
}

impl Segments {
    /// Split `path` on `/`, discarding empty components.
    pub fn split(path: &str) -> Self {
        let all: Vec<String> = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_owned)
            .collect();

        Self {
            all: all.into(),
            offset: 0,
        }
    }

    /// Returns the segments attached to `req`, splitting its path on first use.
    pub fn of(req: &mut Request<Body>) -> Self {
        if let Some(segments) = req.extensions().get::<Segments>() {
            return segments.clone();
        }

        let segments = Segments::split(req.uri().path());
        req.extensions_mut().insert(segments.clone());
        segments
    }

    pub fn as_slice(&self) -> &[String] {
        &self.all[self.offset..]
    }

    pub fn len(&self) -> usize {
        self.all.len() - self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A view without the first `n` segments of this one.
    pub fn advance(&self, n: usize) -> Self {
        Self {
            all: Arc::clone(&self.all),
            offset: (self.offset + n).min(self.all.len()),
        }
    }
}
