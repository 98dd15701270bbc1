//! Path parameters captured by patterns.

use std::collections::BTreeMap;

use axum::http::Request;
use serde::Serialize;

static EMPTY: PathParams = PathParams::new();

/// Parameter name to matched segment.
///
/// Subrouter captures are merged with the captures of nested routes. Names are
/// chosen by whoever writes the patterns, so a repeated name simply keeps the
/// later (innermost) value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PathParams(BTreeMap<String, String>);

impl PathParams {
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// The parameters attached to `req`, or an empty set if none were captured.
    pub fn of<B>(req: &Request<B>) -> &PathParams {
        req.extensions().get::<PathParams>().unwrap_or(&EMPTY)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PathParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = PathParams::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}
