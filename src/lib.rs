//! Segment Router
//!
//! A small HTTP request router: it maps a request's method and path to a
//! handler, capturing named path segments as parameters.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌───────────────────────────────────────────────────────┐
//!                 │                       ROUTER                          │
//!                 │                                                       │
//!   Request       │  ┌──────────┐   ┌───────────┐   ┌─────────────────┐  │
//!   ──────────────┼─▶│ segments │──▶│  group /  │──▶│ route matcher   │  │
//!                 │  │  cache   │   │ subrouter │   │ (pattern walk)  │  │
//!                 │  └──────────┘   └───────────┘   └────────┬────────┘  │
//!                 │                                          │           │
//!   Response      │                 ┌───────────┐            ▼           │
//!   ◀─────────────┼─────────────────│ 404 tail  │◀──── handler or None   │
//!                 │                 └───────────┘                        │
//!                 └───────────────────────────────────────────────────────┘
//! ```
//!
//! ```
//! use axum::body::Body;
//! use axum::http::{Request, Response, StatusCode};
//! use segment_router::http::ParamsExt;
//! use segment_router::routing::{get, Router, Subrouter};
//!
//! fn name(req: &mut Request<Body>) -> Option<Response<Body>> {
//!     let body = format!("{} is {}", req.param("id")?, req.param("name")?);
//!     Some(Response::new(Body::from(body)))
//! }
//!
//! let router = Router::new()
//!     .handle(Subrouter::new("/api/person/:id").unwrap().handle(get("/name/:name", name).unwrap()));
//!
//! let mut req = Request::get("/api/person/1234/name/fred").body(Body::empty()).unwrap();
//! assert_eq!(router.respond(&mut req).status(), StatusCode::OK);
//!
//! let mut req = Request::get("/api/person").body(Body::empty()).unwrap();
//! assert_eq!(router.respond(&mut req).status(), StatusCode::NOT_FOUND);
//! ```

// Core
pub mod routing;

// Hosting
pub mod http;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use config::ServerConfig;
pub use http::{HttpServer, ParamsExt, RouterService};
pub use routing::{Handler, PathParams, Router};
