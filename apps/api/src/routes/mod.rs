pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::skill_gap::handlers;
use crate::state::AppState;

async fn route_not_found() -> Result<(), AppError> {
    Err(AppError::NotFound("Route not found".to_string()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/career-paths", get(handlers::handle_career_paths))
        .route("/api/v1/skill-gap/analyze", post(handlers::handle_analyze))
        .route("/api/v1/skill-gap/compare", post(handlers::handle_compare))
        .route(
            "/api/v1/skills/:skill/priority",
            get(handlers::handle_skill_priority),
        )
        .fallback(route_not_found)
        .with_state(state)
}
