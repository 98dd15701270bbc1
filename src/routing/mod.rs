//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → segments.rs (split path once, cache on the request)
//!     → router.rs (route / group / subrouter / router combinators)
//!     → matcher.rs (method, length and segment-wise checks)
//!     → Return: handler response, or None to let the next candidate try
//!
//! Route Compilation (at construction):
//!     "/api/person/:id"
//!     → pattern.rs (literal / param / prefix-literal segments)
//!     → malformed patterns rejected with PatternError
//!     → Freeze as immutable Pattern shared by every request
//! ```
//!
//! # Design Decisions
//! - Routes compiled at construction, immutable at runtime
//! - No regex: a single trailing `...` marker is the only wildcard
//! - First match wins, in declaration order
//! - "No match" is `None`, never an error and never a sentinel response

pub mod handler;
pub mod matcher;
pub mod method;
pub mod params;
pub mod pattern;
pub mod router;
pub mod segments;

pub use handler::{boxed, BoxedHandler, Handler};
pub use method::{MethodFilter, Verb};
pub use params::PathParams;
pub use pattern::{MountPrefix, Pattern, PatternError, Segment};
pub use router::{
    any, connect, delete, get, group, head, options, patch, post, put, route, router,
    subrouter, trace, Group, Route, Router, Subrouter,
};
pub use segments::Segments;
