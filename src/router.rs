use crate::handlers::{
    forecast::create_forecast, health::health_check, node::get_node, team::get_team,
    transactions::get_transactions, wallet::get_wallet,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Dashboard data routes
        .route("/api/v1/wallet", get(get_wallet))
        .route("/api/v1/team", get(get_team))
        .route("/api/v1/node", get(get_node))
        .route("/api/v1/transactions", get(get_transactions))
        // AI forecast route
        .route("/api/v1/forecast", post(create_forecast))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
