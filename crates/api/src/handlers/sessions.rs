//! Handlers for the `/sessions` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use marquee_core::error::CoreError;
use marquee_core::listing::{SessionSort, ShowFilter};
use marquee_core::schedule::{self, ScheduleCandidate};
use marquee_core::types::DbId;
use marquee_db::models::session::{Session, SessionInput};
use marquee_db::repositories::{HallRepo, SessionRepo};
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the public session listing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    pub show: ShowFilter,
    pub sort: SessionSort,
}

/// Project the submitted input into the form the domain rules check.
fn candidate(input: &SessionInput) -> ScheduleCandidate {
    ScheduleCandidate {
        title: input.title.clone(),
        description: input.description.clone(),
        window: input.window(),
        ticket_price: input.ticket_price,
    }
}

/// GET /api/v1/sessions?show=&sort=
///
/// Public billboard listing. `show` narrows the schedule slice (`all`,
/// `today`, `tomorrow`); `sort` picks the row order.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<DataResponse<Vec<Session>>>> {
    let today = Utc::now().date_naive();
    let sessions = SessionRepo::list(&state.pool, query.show, query.sort, today).await?;
    Ok(Json(DataResponse { data: sessions }))
}

/// POST /api/v1/sessions
///
/// Admin only. The schedule must fit inside its hall without overlapping
/// any other session; `free_seats` starts at the hall's capacity.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<SessionInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Session>>)> {
    let now = Utc::now();

    let hall = HallRepo::find_by_id(&state.pool, input.hall_id).await?;
    let windows = match &hall {
        Some(hall) => SessionRepo::windows_in_hall(&state.pool, hall.id, None).await?,
        None => vec![],
    };

    let mut errors = schedule::validate_schedule(&candidate(&input), &windows, now);
    let Some(hall) = hall else {
        errors.add_field("hall_id", "hall does not exist");
        return Err(errors.into());
    };
    errors.into_result()?;

    let created = SessionRepo::create(&state.pool, &input, hall.seats).await?;
    tracing::info!(
        session_id = created.id,
        hall_id = created.hall_id,
        title = %created.title,
        "session created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /api/v1/sessions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Session>>> {
    let session = SessionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Session",
            id,
        })?;
    Ok(Json(DataResponse { data: session }))
}

/// PUT /api/v1/sessions/{id}
///
/// Admin only. Replaces the whole schedule; `free_seats` resets to the
/// (possibly new) hall's capacity. A session with sold tickets is locked
/// and rejects every edit.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<SessionInput>,
) -> AppResult<Json<DataResponse<Session>>> {
    // Resolve existence first so a bad body on a missing id is still a 404.
    SessionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Session",
            id,
        })?;

    let now = Utc::now();

    let hall = HallRepo::find_by_id(&state.pool, input.hall_id).await?;
    let windows = match &hall {
        Some(hall) => SessionRepo::windows_in_hall(&state.pool, hall.id, Some(id)).await?,
        None => vec![],
    };
    let has_purchases = SessionRepo::has_purchases(&state.pool, id).await?;

    let mut errors =
        schedule::validate_schedule_update(&candidate(&input), &windows, has_purchases, now);
    let Some(hall) = hall else {
        errors.add_field("hall_id", "hall does not exist");
        return Err(errors.into());
    };
    errors.into_result()?;

    let updated = SessionRepo::update(&state.pool, id, &input, hall.seats)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Session",
            id,
        })?;
    tracing::info!(session_id = updated.id, title = %updated.title, "session updated");

    Ok(Json(DataResponse { data: updated }))
}
