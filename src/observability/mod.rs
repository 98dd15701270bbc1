//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Routing engine and server produce:
//!     → tracing events (route matched, mount matched, fallback, lifecycle)
//!     → logging.rs (subscriber with env filter, fmt output)
//! ```
//!
//! # Design Decisions
//! - Structured key/value fields rather than formatted messages
//! - Per-request matching events sit at debug/trace so they cost nothing
//!   unless enabled

pub mod logging;

pub use logging::init_logging;
