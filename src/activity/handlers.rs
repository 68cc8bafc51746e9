use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::activity::dto::{ActivityKind, ActivityResponse, CreateActivityRequest};
use crate::activity::repo::ActivityEntry;
use crate::auth::jwt::AuthUser;
use crate::state::AppState;

pub fn activity_routes() -> Router<AppState> {
    Router::new()
        .route("/activities", post(create_activity))
        .route("/activities", get(list_activities))
        .route("/activities/:id", get(get_activity))
        .route("/activities/:id", delete(delete_activity))
}

#[instrument(skip(state, body))]
pub async fn create_activity(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<CreateActivityRequest>,
) -> Result<(StatusCode, Json<ActivityResponse>), (StatusCode, String)> {
    if body.name.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "name is required".into()));
    }
    if body.duration_minutes < 0 {
        return Err((StatusCode::BAD_REQUEST, "duration must be non-negative".into()));
    }
    if matches!(body.calories_burned, Some(c) if c < 0) {
        return Err((StatusCode::BAD_REQUEST, "calories must be non-negative".into()));
    }

    let name = body.name.trim();
    let calories = body
        .calories_burned
        .unwrap_or_else(|| derived_calories(name, body.duration_minutes));

    let entry = ActivityEntry::create(&state.db, user_id, name, body.duration_minutes, calories)
        .await
        .map_err(internal)?;

    if ActivityKind::from_name(&entry.name).is_none() {
        warn!(%user_id, name = %entry.name, "activity has no category mapping");
    }

    info!(%user_id, entry_id = %entry.id, "activity logged");
    Ok((StatusCode::CREATED, Json(to_response(entry))))
}

#[instrument(skip(state))]
pub async fn list_activities(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<ActivityResponse>>, (StatusCode, String)> {
    let rows = ActivityEntry::list_by_user(&state.db, user_id)
        .await
        .map_err(internal)?;
    Ok(Json(rows.into_iter().map(to_response).collect()))
}

#[instrument(skip(state))]
pub async fn get_activity(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ActivityResponse>, (StatusCode, String)> {
    let entry = ActivityEntry::get_owned(&state.db, user_id, id)
        .await
        .map_err(internal)?
        .ok_or((StatusCode::NOT_FOUND, "Activity not found".to_string()))?;
    Ok(Json(to_response(entry)))
}

#[instrument(skip(state))]
pub async fn delete_activity(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    let removed = ActivityEntry::delete_owned(&state.db, user_id, id)
        .await
        .map_err(internal)?;
    if !removed {
        return Err((StatusCode::NOT_FOUND, "Activity not found".into()));
    }
    info!(%user_id, entry_id = %id, "activity deleted");
    Ok(Json(serde_json::json!({ "ok": true })))
}

fn to_response(e: ActivityEntry) -> ActivityResponse {
    ActivityResponse {
        id: e.id,
        kind: ActivityKind::from_name(&e.name),
        name: e.name,
        duration_minutes: e.duration_minutes,
        calories_burned: e.calories_burned,
        created_at: e.created_at,
    }
}

/// Calories from the category burn rate. Saturates rather than overflowing
/// on absurd durations; the DB check still requires a non-negative value.
fn derived_calories(name: &str, duration_minutes: i32) -> i32 {
    ActivityKind::from_name(name)
        .map(|k| k.kcal_per_minute().saturating_mul(duration_minutes))
        .unwrap_or(0)
}

fn internal<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

#[cfg(test)]
mod autofill_tests {
    use super::*;

    #[test]
    fn derived_calories_use_category_rate() {
        assert_eq!(derived_calories("Running", 30), 300);
    }

    #[test]
    fn unmapped_names_derive_zero() {
        assert_eq!(derived_calories("parkour", 30), 0);
    }

    #[test]
    fn huge_durations_saturate_instead_of_wrapping() {
        let calories = derived_calories("Running", i32::MAX / 2);
        assert_eq!(calories, i32::MAX);
        assert!(calories >= 0);
    }
}
