pub mod handlers;
mod types;

pub use types::ErrorResponse;

use crate::{Result, config::Config, flows::FlowGateway};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(gateway: Arc<FlowGateway>) -> Router {
    let app_state = handlers::AppState { gateway };

    Router::new()
        .route("/flows", get(handlers::list_flows))
        .route("/flows/medical-faq", post(handlers::medical_faq))
        .route("/flows/symptom-analyzer", post(handlers::symptom_analyzer))
        .route("/flows/test-yourself", post(handlers::test_yourself))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}

pub async fn run(config: Config) -> Result<()> {
    let gateway = FlowGateway::new(config.llm.clone())?;
    let app = router(Arc::new(gateway));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
