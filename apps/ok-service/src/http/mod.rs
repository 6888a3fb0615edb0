use crate::config::Config;
use anyhow::Context;
use axum::http::Uri;
use axum::response::IntoResponse;
use axum::{body::Body, http::Request, Router};
use std::net::TcpListener;
use tower::ServiceBuilder;
use tower_request_id::{RequestId, RequestIdLayer};
use tracing::info_span;

/// Defines a common error type to use for all request handlers
mod error;

/// Contains all the routes of the application
mod routes;

pub use error::Error;

use tower_http::trace::TraceLayer;

/// Builds the application router with its middleware stack.
pub fn app() -> Router {
    Router::new()
        .merge(routes::router())
        .fallback(not_found_handler)
        .layer(
            ServiceBuilder::new().layer(RequestIdLayer).layer(
                TraceLayer::new_for_http().make_span_with(move |request: &Request<Body>| {
                    let request_id = request
                        .extensions()
                        .get::<RequestId>()
                        .map(ToString::to_string)
                        .unwrap_or_else(|| "unknown".into());

                    info_span!(
                        "request",
                        id = %request_id,
                        method = %request.method(),
                        uri = %request.uri()
                    )
                }),
            ),
        )
}

/// Binds the listening socket described by `config`.
///
/// `host` may be an IP literal or a resolvable name.
pub fn bind(config: &Config) -> anyhow::Result<TcpListener> {
    TcpListener::bind((config.host.as_str(), config.port))
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))
}

/// Serves [`app`] on `listener` until the process is stopped.
pub async fn serve(listener: TcpListener) -> anyhow::Result<()> {
    let addr = listener
        .local_addr()
        .context("error reading listener address")?;

    tracing::info!(%addr, "listening");

    axum::Server::from_tcp(listener)
        .context("error configuring HTTP listener")?
        .serve(app().into_make_service())
        .await
        .context("error running HTTP server")
}

async fn not_found_handler(_: Uri) -> impl IntoResponse {
    Error::NotFound
}
