//! Subject endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, models::subject::Subject};

/// List subjects
#[utoipa::path(
    get,
    path = "/subjects",
    tag = "catalog",
    responses(
        (status = 200, description = "All subjects", body = Vec<Subject>)
    )
)]
pub async fn list_subjects(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Subject>>> {
    let subjects = state.services.catalog.list_subjects().await?;
    Ok(Json(subjects))
}
