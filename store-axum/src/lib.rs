#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

mod error;
mod product_routes;
mod response;

pub use error::{ApiError, ErrorBody};

use aide::{
    axum::{ApiRouter, routing::get},
    openapi::OpenApi,
};
use axum::{Extension, Json};
use headers::{Authorization, authorization::Bearer};
use schemars::JsonSchema;
use serde::Serialize;
use std::sync::Arc;
use store_core::ports::Application;
use tower_http::trace::TraceLayer;

mod openapi;
use openapi::{api_docs, docs_routes};

pub mod config;
use config::AxumConfig;

/// Response for the health check endpoint
#[derive(Serialize, JsonSchema)]
#[schemars(inline)]
struct HealthResponse {
    status: String,
}

/// Simple health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Construct a full API router with the given state and config
pub fn router<T: ApiApplication>(state: T, config: AxumConfig) -> axum::Router {
    router_with_docs(state, config).0
}

/// Construct the API router and also hand back the generated OpenAPI document
pub fn router_with_docs<T: ApiApplication>(
    state: T,
    config: AxumConfig,
) -> (axum::Router, Arc<OpenApi>) {
    let mut api = OpenApi::default();
    let router = ApiRouter::new()
        .api_route("/health", get(health_check))
        .nest(product_routes::BASE_PATH, product_routes::router())
        .nest_api_service("/docs", docs_routes())
        .finish_api_with(&mut api, api_docs);

    let api = Arc::new(api);
    let router = router
        .layer(Extension(api.clone()))
        .layer(Extension(Arc::new(config)))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    (router, api)
}

/// Starts the HTTP server with the provided configuration
pub async fn start_server<T: ApiApplication>(
    config: AxumConfig,
    app: T,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Listening for requests on {}", listener.local_addr()?);

    let service = router(app, config);
    axum::serve(listener, service).await
}

/// Everything axum needs from router state, gathered into one bound.
///
/// Any `Application` whose context is a bearer token, and that is cheap to
/// clone and thread-safe, qualifies through the blanket implementation.
pub trait ApiApplication:
    Clone
    + Send
    + Sync
    + 'static
    + Application<Context = Authorization<Bearer>, Repository: Send + Sync + 'static>
{
}

impl<T> ApiApplication for T where
    T: Clone
        + Send
        + Sync
        + 'static
        + Application<Context = Authorization<Bearer>, Repository: Send + Sync + 'static>
{
}
