pub mod day;
pub mod engine;
pub mod handlers;
pub mod motivation;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/summary", get(handlers::get_summary))
}
