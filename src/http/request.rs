//! Request-side helpers for handlers.
//!
//! # Responsibilities
//! - Expose the parameters captured by enclosing routes and subrouters
//!
//! # Design Decisions
//! - Parameters travel in request extensions, like every other per-request
//!   value the host attaches
//! - A request that was never routed reads as having no parameters

use axum::http::Request;

use crate::routing::params::PathParams;

/// Access to captured path parameters on a request.
pub trait ParamsExt {
    /// All parameters captured for this request.
    fn path_params(&self) -> &PathParams;

    /// A single captured parameter.
    fn param(&self, name: &str) -> Option<&str> {
        self.path_params().get(name)
    }
}

impl<B> ParamsExt for Request<B> {
    fn path_params(&self) -> &PathParams {
        PathParams::of(self)
    }
}
