use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::auth::jwt::AuthUser;
use crate::profile::dto::{Goal, ProfileResponse, PutProfileRequest};
use crate::profile::repo::Profile;
use crate::state::AppState;

pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile))
        .route("/profile", put(put_profile))
}

// Write-time validation. Readers downstream (summary) can assume these hold.
fn validate(body: &PutProfileRequest) -> Result<(), String> {
    if !(13..=120).contains(&body.age) {
        return Err("age must be between 13 and 120".into());
    }
    if body.weight_kg <= 0.0 || !body.weight_kg.is_finite() {
        return Err("weight must be positive".into());
    }
    if let Some(h) = body.height_cm {
        if h <= 0.0 || !h.is_finite() {
            return Err("height must be positive".into());
        }
    }
    if body.daily_calorie_intake < 0 || body.daily_calorie_burn < 0 {
        return Err("calorie goals must be non-negative".into());
    }
    Ok(())
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<ProfileResponse>, (StatusCode, String)> {
    let profile = Profile::find_by_user(&state.db, user_id)
        .await
        .map_err(|e| {
            error!(error = %e, %user_id, "find profile failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?
        .ok_or((StatusCode::NOT_FOUND, "Profile not found".to_string()))?;

    to_response(profile).map(Json)
}

#[instrument(skip(state, body))]
pub async fn put_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<PutProfileRequest>,
) -> Result<Json<ProfileResponse>, (StatusCode, String)> {
    if let Err(msg) = validate(&body) {
        warn!(%user_id, %msg, "profile rejected");
        return Err((StatusCode::BAD_REQUEST, msg));
    }

    let profile = Profile::upsert(
        &state.db,
        user_id,
        body.age,
        body.weight_kg,
        body.height_cm,
        body.goal.as_str(),
        body.daily_calorie_intake,
        body.daily_calorie_burn,
    )
    .await
    .map_err(|e| {
        error!(error = %e, %user_id, "upsert profile failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    info!(%user_id, "profile saved");
    to_response(profile).map(Json)
}

fn to_response(p: Profile) -> Result<ProfileResponse, (StatusCode, String)> {
    let goal = Goal::parse(&p.goal).ok_or_else(|| {
        error!(user_id = %p.user_id, goal = %p.goal, "unknown goal in database");
        (StatusCode::INTERNAL_SERVER_ERROR, "corrupt profile".to_string())
    })?;
    Ok(ProfileResponse {
        user_id: p.user_id,
        age: p.age,
        weight_kg: p.weight_kg,
        height_cm: p.height_cm,
        goal,
        daily_calorie_intake: p.daily_calorie_intake,
        daily_calorie_burn: p.daily_calorie_burn,
        updated_at: p.updated_at,
    })
}
