use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::auth::jwt::AuthUser;
use crate::food::dto::{CreateFoodRequest, FoodResponse, MealType};
use crate::food::repo::FoodEntry;
use crate::state::AppState;

pub fn food_routes() -> Router<AppState> {
    Router::new()
        .route("/food", post(create_food))
        .route("/food", get(list_food))
        .route("/food/:id", get(get_food))
        .route("/food/:id", delete(delete_food))
}

#[instrument(skip(state, body))]
pub async fn create_food(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<CreateFoodRequest>,
) -> Result<(StatusCode, Json<FoodResponse>), (StatusCode, String)> {
    if body.name.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "name is required".into()));
    }
    if body.calories < 0 {
        warn!(%user_id, calories = body.calories, "negative calories rejected");
        return Err((StatusCode::BAD_REQUEST, "calories must be non-negative".into()));
    }

    let entry = FoodEntry::create(
        &state.db,
        user_id,
        body.name.trim(),
        body.calories,
        body.meal_type.as_str(),
    )
    .await
    .map_err(internal)?;

    info!(%user_id, entry_id = %entry.id, "food logged");
    Ok((StatusCode::CREATED, Json(to_response(entry)?)))
}

#[instrument(skip(state))]
pub async fn list_food(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<FoodResponse>>, (StatusCode, String)> {
    let rows = FoodEntry::list_by_user(&state.db, user_id)
        .await
        .map_err(internal)?;
    let items = rows
        .into_iter()
        .map(to_response)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(items))
}

#[instrument(skip(state))]
pub async fn get_food(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<FoodResponse>, (StatusCode, String)> {
    let entry = FoodEntry::get_owned(&state.db, user_id, id)
        .await
        .map_err(internal)?
        .ok_or((StatusCode::NOT_FOUND, "Food entry not found".to_string()))?;
    Ok(Json(to_response(entry)?))
}

#[instrument(skip(state))]
pub async fn delete_food(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    let removed = FoodEntry::delete_owned(&state.db, user_id, id)
        .await
        .map_err(internal)?;
    if !removed {
        return Err((StatusCode::NOT_FOUND, "Food entry not found".into()));
    }
    info!(%user_id, entry_id = %id, "food deleted");
    Ok(Json(serde_json::json!({ "ok": true })))
}

fn to_response(e: FoodEntry) -> Result<FoodResponse, (StatusCode, String)> {
    let meal_type = MealType::parse(&e.meal_type).ok_or_else(|| {
        error!(entry_id = %e.id, meal_type = %e.meal_type, "unknown meal type in database");
        (StatusCode::INTERNAL_SERVER_ERROR, "corrupt entry".to_string())
    })?;
    Ok(FoodResponse {
        id: e.id,
        name: e.name,
        calories: e.calories,
        meal_type,
        created_at: e.created_at,
    })
}

fn internal<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
