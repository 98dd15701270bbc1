//! The uniform handler contract shared by routes and combinators.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};

/// A function from request to either a response or `None` ("no match").
///
/// Returning `None` is always allowed, including from application handlers: an
/// enclosing group then moves on to its next candidate.
///
/// Closures implement this trait directly. Annotate the argument so the
/// closure is generic over the request borrow:
///
/// ```
/// use axum::body::Body;
/// use axum::http::{Request, Response};
/// use segment_router::routing::get;
///
/// let hello = get("/hello", |_req: &mut Request<Body>| {
///     Some(Response::new(Body::from("hello")))
/// })
/// .unwrap();
/// ```
pub trait Handler: Send + Sync {
    fn call(&self, req: &mut Request<Body>) -> Option<Response<Body>>;
}

impl<F> Handler for F
where
    F: Fn(&mut Request<Body>) -> Option<Response<Body>> + Send + Sync,
{
    fn call(&self, req: &mut Request<Body>) -> Option<Response<Body>> {
        (self)(req)
    }
}

/// A shareable, type-erased handler.
pub type BoxedHandler = Arc<dyn Handler>;

/// Erase a handler's type so it can sit in a group.
pub fn boxed(handler: impl Handler + 'static) -> BoxedHandler {
    Arc::new(handler)
}
