//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Pick the log level from the environment or the configured default
//!
//! # Design Decisions
//! - `RUST_LOG` wins over the configured level
//! - The configured level applies to this crate and `tower_http`

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directives for `level`.
pub fn default_directives(level: &str) -> String {
    format!("segment_router={level},tower_http={level}")
}

/// Install the global subscriber. Call once, at startup.
pub fn init_logging(level: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directives(level))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(
            default_directives("debug"),
            "segment_router=debug,tower_http=debug"
        );
    }
}
