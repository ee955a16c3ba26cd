pub mod handlers;
pub mod types;

use crate::{Result, config::Config, llm::OllamaClient};
use axum::{Router, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub use handlers::AppState;

pub const ITINERARY_ROUTE: &str = "/api/itinerary";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(ITINERARY_ROUTE, post(handlers::generate_itinerary))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let llm = OllamaClient::new(config.llm.clone());
    info!(
        "Forwarding generations to {} using model {}",
        llm.endpoint(),
        llm.model()
    );

    let app = router(AppState::new(Arc::new(llm)));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
