//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Compile every pattern and mount prefix
//! - Validate status codes, header names and values, bind address
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::{RouteConfig, ServerConfig};
use crate::config::table::compile_route;
use crate::routing::{MountPrefix, PatternError};

/// A single semantic problem in the configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("route `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        source: PatternError,
    },

    #[error("mount `{prefix}`: {source}")]
    Mount {
        prefix: String,
        source: PatternError,
    },

    #[error("route `{pattern}`: invalid status code {status}")]
    Status { pattern: String, status: u16 },

    #[error("route `{pattern}`: invalid header `{name}`")]
    Header { pattern: String, name: String },

    #[error("invalid bind address `{0}`")]
    BindAddress(String),
}

/// Check `config`, collecting every error.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !is_bind_address(&config.listener.bind_address) {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    check_routes(&config.routes, &mut errors);

    for mount in &config.mounts {
        if let Err(source) = MountPrefix::new(&mount.prefix) {
            errors.push(ValidationError::Mount {
                prefix: mount.prefix.clone(),
                source,
            });
        }
        check_routes(&mount.routes, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_routes(routes: &[RouteConfig], errors: &mut Vec<ValidationError>) {
    errors.extend(routes.iter().filter_map(|route| compile_route(route).err()));
}

/// `host:port` with a numeric port; the host is resolved by the listener.
fn is_bind_address(address: &str) -> bool {
    match address.rsplit_once(':') {
        Some((host, port)) => !host.is_empty() && port.parse::<u16>().is_ok(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::MountConfig;

    fn route(method: &str, pattern: &str) -> RouteConfig {
        RouteConfig {
            method: method.into(),
            pattern: pattern.into(),
            status: 200,
            body: String::new(),
            headers: Default::default(),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ServerConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ServerConfig::default();
        config.listener.bind_address = "nowhere".into();
        config.routes.push(route("get", "/ok"));
        config.routes.push(route("get", "/a.../b"));
        config.mounts.push(MountConfig {
            prefix: "api".into(),
            routes: vec![route("brew", "/coffee")],
        });

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(matches!(errors[0], ValidationError::BindAddress(_)));
        assert!(matches!(
            errors[1],
            ValidationError::Pattern {
                source: PatternError::PrefixNotLast { .. },
                ..
            }
        ));
        assert!(matches!(errors[2], ValidationError::Mount { .. }));
        assert!(matches!(
            errors[3],
            ValidationError::Pattern {
                source: PatternError::UnknownMethod(_),
                ..
            }
        ));
    }

    #[test]
    fn test_bind_address() {
        assert!(is_bind_address("127.0.0.1:8080"));
        assert!(is_bind_address("localhost:0"));
        assert!(is_bind_address("[::1]:8080"));
        assert!(!is_bind_address("127.0.0.1"));
        assert!(!is_bind_address(":8080"));
        assert!(!is_bind_address("host:http"));
    }

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Pattern {
            pattern: "/a/:".into(),
            source: PatternError::UnnamedParam("/a/:".into()),
        };
        assert_eq!(
            err.to_string(),
            "route `/a/:`: pattern `/a/:` has a parameter without a name"
        );
    }
}
