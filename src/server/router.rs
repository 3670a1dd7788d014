use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/contact", post(handlers::submit_contact))
        .route("/api/skills/radar", get(handlers::radar_figure))
        .route("/projects/:index", get(handlers::open_project))
        .route("/resume.pdf", get(handlers::download_resume))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
