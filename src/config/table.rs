//! Static route tables built from configuration.
//!
//! Every configured route answers with a fixed status, headers and body. The
//! body may reference captured parameters as `{name}`; unknown names are left
//! as written.

use axum::body::Body;
use axum::http::header::{HeaderName, HeaderValue};
use axum::http::{HeaderMap, Request, Response, StatusCode};
use serde::Serialize;

use crate::config::schema::{MountConfig, RouteConfig, ServerConfig};
use crate::config::validation::ValidationError;
use crate::routing::{Handler, MethodFilter, Pattern, PathParams, Route, Router, Subrouter};

/// A handler answering with a configured response.
#[derive(Debug, Clone)]
pub struct StaticReply {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl StaticReply {
    pub fn from_config(route: &RouteConfig) -> Result<Self, ValidationError> {
        let status = StatusCode::from_u16(route.status).map_err(|_| ValidationError::Status {
            pattern: route.pattern.clone(),
            status: route.status,
        })?;

        let mut headers = HeaderMap::new();
        for (name, value) in &route.headers {
            let invalid = || ValidationError::Header {
                pattern: route.pattern.clone(),
                name: name.clone(),
            };
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            headers.insert(name, value);
        }

        Ok(Self {
            status,
            headers,
            body: route.body.clone(),
        })
    }
}

impl Handler for StaticReply {
    fn call(&self, req: &mut Request<Body>) -> Option<Response<Body>> {
        let body = render(&self.body, PathParams::of(req));

        let mut response = Response::new(Body::from(body));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers.clone();
        Some(response)
    }
}

/// Fill `{name}` placeholders from `params`.
fn render(template: &str, params: &PathParams) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after[..close];
        match params.get(name) {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

/// Compile one configured route.
pub fn compile_route(route: &RouteConfig) -> Result<Route, ValidationError> {
    let pattern_error = |source| ValidationError::Pattern {
        pattern: route.pattern.clone(),
        source,
    };

    let method: MethodFilter = route.method.parse().map_err(pattern_error)?;
    let reply = StaticReply::from_config(route)?;
    Route::new(method, &route.pattern, reply).map_err(pattern_error)
}

/// Compile one configured mount and its routes.
pub fn compile_mount(mount: &MountConfig) -> Result<Subrouter, ValidationError> {
    let mut subrouter = Subrouter::new(&mount.prefix).map_err(|source| ValidationError::Mount {
        prefix: mount.prefix.clone(),
        source,
    })?;

    for route in &mount.routes {
        subrouter = subrouter.handle(compile_route(route)?);
    }
    Ok(subrouter)
}

/// Build the router for `config`: top-level routes first, then mounts.
pub fn build_router(config: &ServerConfig) -> Result<Router, ValidationError> {
    let mut router = Router::new();

    for route in &config.routes {
        router = router.handle(compile_route(route)?);
    }
    for mount in &config.mounts {
        router = router.handle(compile_mount(mount)?);
    }

    tracing::debug!(
        routes = config.routes.len(),
        mounts = config.mounts.len(),
        "Route table built"
    );
    Ok(router)
}

/// One row of the compiled route table.
#[derive(Debug, Clone, Serialize)]
pub struct TableEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount: Option<String>,
    #[serde(flatten)]
    pub pattern: Pattern,
    pub status: u16,
}

/// The compiled route table, in the order routes are tried.
pub fn route_table(config: &ServerConfig) -> Result<Vec<TableEntry>, ValidationError> {
    let mut table = Vec::new();

    for route in &config.routes {
        table.push(TableEntry {
            mount: None,
            pattern: compile_route(route)?.pattern().clone(),
            status: route.status,
        });
    }
    for mount in &config.mounts {
        let prefix = compile_mount(mount)?.prefix().as_str().to_string();
        for route in &mount.routes {
            table.push(TableEntry {
                mount: Some(prefix.clone()),
                pattern: compile_route(route)?.pattern().clone(),
                status: route.status,
            });
        }
    }

    Ok(table)
}
