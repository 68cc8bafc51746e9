pub mod dto;
pub mod handlers;
pub mod repo;

pub use dto::MealType;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::food_routes())
}
