use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{error, info, instrument, warn};

use crate::analysis::client::mime_from_extension;
use crate::analysis::error::AnalysisError;
use crate::analysis::pipeline;
use crate::analysis::schema::AnalysisItem;
use crate::auth::jwt::AuthUser;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub items: Vec<AnalysisItem>,
    /// Pre-fill values for the food form: first item only, calories rounded
    /// to the nearest integer. The client may edit before committing.
    pub suggestion: FoodSuggestion,
}

#[derive(Debug, Serialize)]
pub struct FoodSuggestion {
    pub name: String,
    pub calories: i32,
}

pub fn suggestion_from(items: &[AnalysisItem]) -> Option<FoodSuggestion> {
    items.first().map(|first| FoodSuggestion {
        name: first.food_name.clone(),
        calories: first.estimated_calories.round() as i32,
    })
}

/// POST /analysis (multipart, field `image`). Runs the photo through the
/// vision pipeline and returns the recognized items plus the form
/// suggestion. Nothing is persisted here; committing an entry is a separate
/// POST /food.
#[instrument(skip(state, mp))]
pub async fn analyze_image(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    mut mp: Multipart,
) -> Result<Json<AnalyzeResponse>, (StatusCode, String)> {
    let (bytes, mime) = read_image_field(mp).await?;
    if bytes.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "image is empty".into()));
    }

    let items = match pipeline::ingest(state.vision.as_ref(), &bytes, mime).await {
        Ok(items) => items,
        Err(e) => {
            // One user-facing condition, three distinct log lines.
            match &e {
                AnalysisError::ExternalService(msg) => {
                    error!(%user_id, %msg, "vision call failed")
                }
                AnalysisError::Parse(src) => warn!(%user_id, error = %src, "unparseable model output"),
                AnalysisError::Schema(msg) => warn!(%user_id, %msg, "model output failed validation"),
            }
            return Err((StatusCode::BAD_GATEWAY, "AI analysis failed".into()));
        }
    };

    // Validation guarantees at least one item.
    let suggestion = suggestion_from(&items)
        .ok_or((StatusCode::BAD_GATEWAY, "AI analysis failed".to_string()))?;

    info!(%user_id, items = items.len(), "image analyzed");
    Ok(Json(AnalyzeResponse { items, suggestion }))
}

/// Pull the `image` field out of the multipart body. Decode failures are
/// reported as such, distinct from the field simply being absent.
async fn read_image_field(mut mp: Multipart) -> Result<(Bytes, &'static str), (StatusCode, String)> {
    loop {
        match mp.next_field().await {
            Ok(Some(field)) if field.name() == Some("image") => {
                let mime = mime_from_extension(field.file_name().unwrap_or_default());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
                return Ok((data, mime));
            }
            Ok(Some(_)) => continue,
            Ok(None) => {
                return Err((StatusCode::BAD_REQUEST, "image field is required".into()))
            }
            Err(e) => {
                return Err((
                    StatusCode::BAD_REQUEST,
                    format!("invalid multipart body: {e}"),
                ))
            }
        }
    }
}
