//! HTTP glue between the routing engine and its host.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum/hyper accept loop, trace layer)
//!     → RouterService (tower::Service over Arc<Router>)
//!     → routing engine (segments, patterns, combinators)
//!     → request.rs (handlers read captured params)
//!     → response.rs (canonical not-found)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::ParamsExt;
pub use response::not_found;
pub use server::{HttpServer, RouterService};
