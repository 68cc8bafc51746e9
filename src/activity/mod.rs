pub mod dto;
pub mod handlers;
pub mod repo;

pub use dto::ActivityKind;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::activity_routes())
}
