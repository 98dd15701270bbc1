//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (compile every pattern, check statuses and headers)
//!     → ServerConfig (validated, immutable)
//!     → table.rs (static route table → Router)
//! ```
//!
//! # Design Decisions
//! - All sections have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Validation and router construction share one compile path, so a config
//!   that validates always builds

pub mod loader;
pub mod schema;
pub mod table;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ListenerConfig, MountConfig, ObservabilityConfig, RouteConfig, ServerConfig};
pub use table::{build_router, route_table, StaticReply, TableEntry};
pub use validation::{validate_config, ValidationError};
