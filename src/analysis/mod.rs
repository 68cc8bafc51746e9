pub mod client;
pub mod error;
pub mod handlers;
pub mod pipeline;
pub mod sanitize;
pub mod schema;

use axum::extract::DefaultBodyLimit;
use axum::{routing::post, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/analysis", post(handlers::analyze_image))
        .layer(DefaultBodyLimit::max(20 * 1024 * 1024)) // 20MB
}
