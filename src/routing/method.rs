//! Method tokens and the "any method" sentinel.
//!
//! Both sides of a method check are normalized to lowercase tokens, so
//! `GET`, `get` and `Method::GET` are the same verb.

use std::fmt;
use std::str::FromStr;

use axum::http::Method;
use serde::{Serialize, Serializer};

use crate::routing::pattern::PatternError;

/// The verbs a route can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Connect,
    Options,
    Trace,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "get",
            Verb::Head => "head",
            Verb::Post => "post",
            Verb::Put => "put",
            Verb::Patch => "patch",
            Verb::Delete => "delete",
            Verb::Connect => "connect",
            Verb::Options => "options",
            Verb::Trace => "trace",
        }
    }

    /// `None` for extension methods outside the standard set.
    pub fn from_method(method: &Method) -> Option<Verb> {
        method.as_str().parse().ok()
    }
}

impl FromStr for Verb {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(Verb::Get),
            "head" => Ok(Verb::Head),
            "post" => Ok(Verb::Post),
            "put" => Ok(Verb::Put),
            "patch" => Ok(Verb::Patch),
            "delete" => Ok(Verb::Delete),
            "connect" => Ok(Verb::Connect),
            "options" => Ok(Verb::Options),
            "trace" => Ok(Verb::Trace),
            _ => Err(PatternError::UnknownMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which request methods a pattern accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodFilter {
    Any,
    Only(Verb),
}

impl MethodFilter {
    pub fn allows(&self, method: &Method) -> bool {
        match self {
            MethodFilter::Any => true,
            MethodFilter::Only(verb) => Verb::from_method(method) == Some(*verb),
        }
    }
}

impl From<Verb> for MethodFilter {
    fn from(verb: Verb) -> Self {
        MethodFilter::Only(verb)
    }
}

impl FromStr for MethodFilter {
    type Err = PatternError;

    /// `any` and `*` select every method.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "*" || s.eq_ignore_ascii_case("any") {
            return Ok(MethodFilter::Any);
        }
        s.parse().map(MethodFilter::Only)
    }
}

impl fmt::Display for MethodFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodFilter::Any => f.write_str("any"),
            MethodFilter::Only(verb) => fmt::Display::fmt(verb, f),
        }
    }
}

impl Serialize for MethodFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("GET".parse::<Verb>().unwrap(), Verb::Get);
        assert_eq!("Patch".parse::<Verb>().unwrap(), Verb::Patch);
        assert_eq!("trace".parse::<Verb>().unwrap(), Verb::Trace);
        assert_eq!(
            "fetch".parse::<Verb>(),
            Err(PatternError::UnknownMethod("fetch".into()))
        );
    }

    #[test]
    fn test_any_sentinel() {
        assert_eq!("any".parse::<MethodFilter>().unwrap(), MethodFilter::Any);
        assert_eq!("*".parse::<MethodFilter>().unwrap(), MethodFilter::Any);
        assert_eq!(
            "delete".parse::<MethodFilter>().unwrap(),
            MethodFilter::Only(Verb::Delete)
        );
    }

    #[test]
    fn test_allows() {
        let get = MethodFilter::Only(Verb::Get);
        assert!(get.allows(&Method::GET));
        assert!(!get.allows(&Method::POST));
        assert!(!get.allows(&Method::HEAD));

        let purge = Method::from_bytes(b"PURGE").unwrap();
        assert!(!get.allows(&purge));
        assert!(MethodFilter::Any.allows(&purge));
        assert!(MethodFilter::Any.allows(&Method::CONNECT));
    }

    #[test]
    fn test_display() {
        assert_eq!(MethodFilter::Any.to_string(), "any");
        assert_eq!(MethodFilter::Only(Verb::Options).to_string(), "options");
    }
}
