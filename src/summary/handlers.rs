use axum::{extract::State, http::StatusCode, Json};
use time::OffsetDateTime;
use tracing::{error, instrument};

use crate::activity::repo::ActivityEntry;
use crate::auth::jwt::AuthUser;
use crate::food::repo::FoodEntry;
use crate::profile::repo::Profile;
use crate::state::AppState;
use crate::summary::day::same_day;
use crate::summary::engine::{summarize, DailySummary};

/// GET /summary — today's totals, groups, BMI and motivation for the
/// caller. Entries are already ownership-scoped by the repo queries; "today"
/// is the current UTC date.
#[instrument(skip(state))]
pub async fn get_summary(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<DailySummary>, (StatusCode, String)> {
    let food = FoodEntry::list_by_user(&state.db, user_id)
        .await
        .map_err(|e| internal(user_id, "list food", e))?;
    let activities = ActivityEntry::list_by_user(&state.db, user_id)
        .await
        .map_err(|e| internal(user_id, "list activities", e))?;
    let profile = Profile::find_by_user(&state.db, user_id)
        .await
        .map_err(|e| internal(user_id, "load profile", e))?;

    let now = OffsetDateTime::now_utc();
    let todays_food = same_day(&food, now);
    let todays_activities = same_day(&activities, now);

    Ok(Json(summarize(
        &todays_food,
        &todays_activities,
        profile.as_ref(),
    )))
}

fn internal(user_id: uuid::Uuid, what: &str, e: anyhow::Error) -> (StatusCode, String) {
    error!(%user_id, error = %e, "{what} failed");
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
