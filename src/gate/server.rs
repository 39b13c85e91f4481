//! Gateway HTTP server

use crate::gate::config::GatewayConfig;
use crate::gate::handlers::{self, GatewayState};
use axum::{
    extract::Request,
    middleware::{self, Next},
    Router,
};
use std::net::SocketAddr;
use std::time::Instant;
use tracing::info;

/// Build the router: a single wildcard route for every method and path
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .fallback(handlers::simulate_handler)
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
}

/// Start the gateway server
pub async fn start_server(config: GatewayConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = config.bind_addr().parse()?;
    let state = GatewayState::new(config.upstream)?;
    let app = build_router(state);

    info!("Starting LLM HTTP Server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Logging middleware
async fn logging_middleware(
    req: Request,
    next: Next,
) -> axum::response::Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    let duration = start.elapsed();
    let status = response.status();

    info!("{} {} {} {:?}", method, uri, status, duration);

    response
}
