pub mod api;

use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the validation service router
pub fn router(state: api::AppState) -> Router {
    Router::new()
        .route("/api/schemas", get(api::get_schemas))
        .route("/api/validate/{schema}", post(api::validate_body))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Start the validation service
pub async fn start_server(addr: SocketAddr, state: api::AppState) -> crate::Result<()> {
    let app = router(state);

    tracing::info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
