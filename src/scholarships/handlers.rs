use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::{dto::MessageResponse, extractors::CurrentUser},
    errors::AppError,
    scholarships::{
        dto::{SaveScholarshipRequest, SavedResponse, ScholarshipOut},
        repo::SavedScholarship,
    },
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/scholarships/saved", get(list_saved))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/scholarships/save", post(save_scholarship))
        .route("/scholarships/saved/:id", delete(delete_saved))
}

#[instrument(skip_all)]
pub async fn save_scholarship(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<SaveScholarshipRequest>,
) -> Result<Json<SavedResponse>, AppError> {
    let item = payload.normalized();
    let rec = SavedScholarship::insert(&state.db, user.id, &item).await?;
    info!(user_id = %user.id, scholarship_id = %rec.id, "scholarship saved");
    Ok(Json(SavedResponse {
        message: "Saved".into(),
        id: rec.id,
    }))
}

#[instrument(skip_all)]
pub async fn list_saved(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<ScholarshipOut>>, AppError> {
    let rows = SavedScholarship::list_by_user(&state.db, user.id).await?;
    Ok(Json(rows.into_iter().map(ScholarshipOut::from).collect()))
}

#[instrument(skip(state, user))]
pub async fn delete_saved(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    if !SavedScholarship::delete_owned(&state.db, user.id, id).await? {
        return Err(AppError::NotFound("Not found".into()));
    }
    info!(user_id = %user.id, scholarship_id = %id, "scholarship deleted");
    Ok(Json(MessageResponse {
        message: "Deleted".into(),
    }))
}
