mod dto;
pub mod handlers;
pub mod jwt;
mod password;
mod repo;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::auth_routes())
}
