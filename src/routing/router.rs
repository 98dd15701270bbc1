//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Wrap compiled patterns and handlers into `Route`s
//! - Try candidates in declaration order (`Group`)
//! - Mount nested routes under a shared prefix (`Subrouter`)
//! - Guarantee a concrete response at the top level (`Router`)
//!
//! # Design Decisions
//! - Immutable after construction (shared across requests without locks)
//! - No routing table: a router is an ordered list of handlers
//! - Per-request state (segment view, parameters) lives in request extensions
//!   and is put back after every delegation, so siblings tried later see the
//!   request exactly as the group received it

use axum::body::Body;
use axum::http::{Request, Response};

use crate::http::response::not_found;
use crate::routing::handler::{boxed, BoxedHandler, Handler};
use crate::routing::method::{MethodFilter, Verb};
use crate::routing::params::PathParams;
use crate::routing::pattern::{MountPrefix, Pattern, PatternError};
use crate::routing::segments::Segments;

/// A single pattern bound to a handler.
pub struct Route {
    pattern: Pattern,
    handler: BoxedHandler,
}

impl Route {
    /// Compile `pattern` and bind it to `handler`.
    pub fn new(
        method: impl Into<MethodFilter>,
        pattern: &str,
        handler: impl Handler + 'static,
    ) -> Result<Self, PatternError> {
        Ok(Self {
            pattern: Pattern::new(method, pattern)?,
            handler: boxed(handler),
        })
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

impl Handler for Route {
    fn call(&self, req: &mut Request<Body>) -> Option<Response<Body>> {
        let segments = Segments::of(req);
        let params = self
            .pattern
            .matches(req.method(), segments.as_slice(), PathParams::of(req))?;

        tracing::debug!(
            method = %req.method(),
            pattern = %self.pattern.as_str(),
            params = params.len(),
            "Route matched"
        );

        scoped(req, params, None, |req| self.handler.call(req))
    }
}

/// Candidates tried in declaration order; the first response wins.
#[derive(Default)]
pub struct Group {
    routes: Vec<BoxedHandler>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a candidate after the ones already registered.
    pub fn handle(mut self, handler: impl Handler + 'static) -> Self {
        self.routes.push(boxed(handler));
        self
    }

    pub fn handle_boxed(mut self, handler: BoxedHandler) -> Self {
        self.routes.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl From<Vec<BoxedHandler>> for Group {
    fn from(routes: Vec<BoxedHandler>) -> Self {
        Self { routes }
    }
}

impl Handler for Group {
    fn call(&self, req: &mut Request<Body>) -> Option<Response<Body>> {
        for route in &self.routes {
            if let Some(response) = route.call(req) {
                return Some(response);
            }
        }
        None
    }
}

/// Routes mounted below a common prefix.
///
/// Nested patterns are written relative to the prefix: under
/// `/api/person/:id`, the pattern `/name/:name` matches
/// `/api/person/1234/name/fred` and sees both `id` and `name`.
pub struct Subrouter {
    prefix: MountPrefix,
    routes: Group,
}

impl Subrouter {
    pub fn new(prefix: &str) -> Result<Self, PatternError> {
        Ok(Self {
            prefix: MountPrefix::new(prefix)?,
            routes: Group::new(),
        })
    }

    pub fn handle(mut self, handler: impl Handler + 'static) -> Self {
        self.routes = self.routes.handle(handler);
        self
    }

    pub fn handle_boxed(mut self, handler: BoxedHandler) -> Self {
        self.routes = self.routes.handle_boxed(handler);
        self
    }

    pub fn prefix(&self) -> &MountPrefix {
        &self.prefix
    }
}

impl Handler for Subrouter {
    fn call(&self, req: &mut Request<Body>) -> Option<Response<Body>> {
        let segments = Segments::of(req);
        let Some(params) = self.prefix.strip(segments.as_slice(), PathParams::of(req)) else {
            tracing::trace!(prefix = %self.prefix, "Mount prefix did not match");
            return None;
        };

        tracing::trace!(prefix = %self.prefix, "Mount prefix matched");

        let rest = segments.advance(self.prefix.len());
        scoped(req, params, Some(rest), |req| self.routes.call(req))
    }
}

/// Top-level router: a group that always answers.
///
/// When no route matches, the response is `404 Not Found` with no headers and
/// an empty body.
#[derive(Default)]
pub struct Router {
    routes: Group,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(mut self, handler: impl Handler + 'static) -> Self {
        self.routes = self.routes.handle(handler);
        self
    }

    pub fn handle_boxed(mut self, handler: BoxedHandler) -> Self {
        self.routes = self.routes.handle_boxed(handler);
        self
    }

    /// Dispatch `req`, falling back to the not-found response.
    pub fn respond(&self, req: &mut Request<Body>) -> Response<Body> {
        self.routes.call(req).unwrap_or_else(|| {
            tracing::debug!(
                method = %req.method(),
                path = %req.uri().path(),
                "No route matched"
            );
            not_found()
        })
    }
}

impl Handler for Router {
    fn call(&self, req: &mut Request<Body>) -> Option<Response<Body>> {
        Some(self.respond(req))
    }
}

/// Install `params` (and a narrowed segment view) for the duration of `f`,
/// then put back whatever was attached before.
fn scoped<T>(
    req: &mut Request<Body>,
    params: PathParams,
    segments: Option<Segments>,
    f: impl FnOnce(&mut Request<Body>) -> T,
) -> T {
    let previous_params = req.extensions_mut().insert(params);
    let previous_segments = segments.map(|segments| req.extensions_mut().insert(segments));

    let output = f(req);

    match previous_params {
        Some(params) => req.extensions_mut().insert(params),
        None => req.extensions_mut().remove::<PathParams>(),
    };
    match previous_segments {
        Some(Some(segments)) => {
            req.extensions_mut().insert(segments);
        }
        Some(None) => {
            req.extensions_mut().remove::<Segments>();
        }
        None => {}
    }

    output
}

/// Bind `handler` to `pattern` for requests accepted by `method`.
pub fn route(
    method: impl Into<MethodFilter>,
    pattern: &str,
    handler: impl Handler + 'static,
) -> Result<Route, PatternError> {
    Route::new(method, pattern, handler)
}

macro_rules! method_routes {
    ($($(#[$doc:meta])* $name:ident => $verb:expr;)+) => {$(
        $(#[$doc])*
        pub fn $name(pattern: &str, handler: impl Handler + 'static) -> Result<Route, PatternError> {
            Route::new($verb, pattern, handler)
        }
    )+};
}

method_routes! {
    /// Route GET requests.
    get => Verb::Get;
    /// Route HEAD requests.
    head => Verb::Head;
    /// Route POST requests.
    post => Verb::Post;
    /// Route PUT requests.
    put => Verb::Put;
    /// Route PATCH requests.
    patch => Verb::Patch;
    /// Route DELETE requests.
    delete => Verb::Delete;
    /// Route CONNECT requests.
    connect => Verb::Connect;
    /// Route OPTIONS requests.
    options => Verb::Options;
    /// Route TRACE requests.
    trace => Verb::Trace;
    /// Route requests of every method.
    any => MethodFilter::Any;
}

pub fn group(routes: Vec<BoxedHandler>) -> Group {
    Group::from(routes)
}

pub fn subrouter(prefix: &str, routes: Vec<BoxedHandler>) -> Result<Subrouter, PatternError> {
    Ok(Subrouter {
        prefix: MountPrefix::new(prefix)?,
        routes: Group::from(routes),
    })
}

pub fn router(routes: Vec<BoxedHandler>) -> Router {
    Router {
        routes: Group::from(routes),
    }
}
