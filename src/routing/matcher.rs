//! Route matching logic.
//!
//! # Responsibilities
//! - Match the request method (exact verb, or any)
//! - Match segment counts (equal, or at least as many for prefix patterns)
//! - Walk segments left to right, binding parameters into the seed map
//! - Strip subrouter mount prefixes and report what is left
//!
//! # Design Decisions
//! - Literal matching is case-sensitive
//! - The first failing literal aborts the walk
//! - A matched prefix-literal ends the walk; later segments are never read
//! - Matching is pure: the seed map is cloned, never modified

use axum::http::Method;

use crate::routing::params::PathParams;
use crate::routing::pattern::{MountPrefix, Pattern, Segment};

impl Pattern {
    /// Match `method` and `segments` against this pattern.
    ///
    /// On success returns `seed` extended with the captured parameters.
    pub fn matches(
        &self,
        method: &Method,
        segments: &[String],
        seed: &PathParams,
    ) -> Option<PathParams> {
        if !self.method.allows(method) {
            return None;
        }

        let fits = if self.is_prefix {
            segments.len() >= self.segments.len()
        } else {
            segments.len() == self.segments.len()
        };
        if !fits {
            return None;
        }

        walk(&self.segments, segments, seed.clone())
    }
}

impl MountPrefix {
    /// Match the leading segments of the request against the mount prefix.
    ///
    /// On success returns `seed` extended with the captured parameters; the
    /// caller drops `self.len()` segments to get the nested view.
    pub fn strip(&self, segments: &[String], seed: &PathParams) -> Option<PathParams> {
        if segments.len() < self.segments.len() {
            return None;
        }

        walk(&self.segments, &segments[..self.segments.len()], seed.clone())
    }
}

fn walk(pattern: &[Segment], segments: &[String], mut params: PathParams) -> Option<PathParams> {
    for (expected, actual) in pattern.iter().zip(segments) {
        match expected {
            Segment::Param(name) => params.insert(name.as_str(), actual.as_str()),
            Segment::PrefixLiteral(prefix) => {
                if actual.starts_with(prefix.as_str()) {
                    break;
                }
                return None;
            }
            Segment::Literal(literal) => {
                if literal != actual {
                    return None;
                }
            }
        }
    }

    Some(params)
}
