//! HTTP server setup.
//!
//! # Responsibilities
//! - Expose a `Router` as a `tower::Service` any hyper/axum host can drive
//! - Create the axum app with the router as its only (fallback) service
//! - Wire up request tracing
//! - Serve a listener until shutdown

use std::convert::Infallible;
use std::future::{ready, Future, Ready};
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{Request, Response};
use tokio::net::TcpListener;
use tower::Service;
use tower_http::trace::TraceLayer;

use crate::routing::Router;

/// A cloneable service answering every request through a shared `Router`.
///
/// Routing is synchronous, so the service is always ready and its future
/// resolves immediately.
#[derive(Clone)]
pub struct RouterService {
    router: Arc<Router>,
}

impl RouterService {
    pub fn new(router: impl Into<Arc<Router>>) -> Self {
        Self {
            router: router.into(),
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }
}

impl Service<Request<Body>> for RouterService {
    type Response = Response<Body>;
    type Error = Infallible;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        ready(Ok(self.router.respond(&mut req)))
    }
}

impl Router {
    /// Wrap the router into a tower service.
    pub fn into_service(self) -> RouterService {
        RouterService::new(self)
    }
}

/// HTTP server hosting a `Router`.
pub struct HttpServer {
    app: axum::Router,
}

impl HttpServer {
    pub fn new(router: Router) -> Self {
        let app = axum::Router::new()
            .fallback_service(router.into_service())
            .layer(TraceLayer::new_for_http());

        Self { app }
    }

    /// Run the server until Ctrl+C.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        self.run_until(listener, shutdown_signal()).await
    }

    /// Run the server until `signal` resolves.
    pub async fn run_until<F>(self, listener: TcpListener, signal: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.app)
            .with_graceful_shutdown(signal)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
