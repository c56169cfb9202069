use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

pub mod health;

/// Routes mounted under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/generate", post(handlers::generate::generate_message))
}
