//! Handlers for the `/halls` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::hall::{self, HallCandidate};
use marquee_core::types::DbId;
use marquee_db::models::hall::{Hall, HallInput};
use marquee_db::repositories::HallRepo;

use crate::error::AppResult;
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

/// Project the submitted input into the form the domain rules check.
fn candidate(input: &HallInput) -> HallCandidate {
    HallCandidate {
        name: input.name.clone(),
        seats: input.seats,
    }
}

/// GET /api/v1/halls
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<Hall>>>> {
    let halls = HallRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: halls }))
}

/// POST /api/v1/halls
///
/// Admin only. The hall name must be unique (case-insensitive) and the
/// seat count positive.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<HallInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Hall>>)> {
    let taken = HallRepo::names(&state.pool, None).await?;
    hall::validate_hall(&candidate(&input), &taken).into_result()?;

    let created = HallRepo::create(&state.pool, &input).await?;
    tracing::info!(hall_id = created.id, name = %created.name, "hall created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /api/v1/halls/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Hall>>> {
    let hall = HallRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Hall", id })?;
    Ok(Json(DataResponse { data: hall }))
}

/// PUT /api/v1/halls/{id}
///
/// Admin only. Replaces the hall's name and seat count. A hall whose
/// sessions have sold tickets is locked and rejects every edit.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<HallInput>,
) -> AppResult<Json<DataResponse<Hall>>> {
    // Resolve existence first so a bad body on a missing id is still a 404.
    HallRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Hall", id })?;

    let taken = HallRepo::names(&state.pool, Some(id)).await?;
    let has_purchases = HallRepo::has_purchases(&state.pool, id).await?;
    hall::validate_hall_update(&candidate(&input), &taken, has_purchases).into_result()?;

    let updated = HallRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Hall", id })?;
    tracing::info!(hall_id = updated.id, name = %updated.name, "hall updated");

    Ok(Json(DataResponse { data: updated }))
}
