//! Handlers for ticket purchases and purchase history.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use marquee_core::error::CoreError;
use marquee_core::roles::ROLE_ADMIN;
use marquee_core::types::DbId;
use marquee_db::models::purchase::Purchase;
use marquee_db::repositories::{PurchaseOutcome, PurchaseRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /sessions/{id}/purchase`.
#[derive(Debug, Deserialize)]
pub struct PurchaseRequest {
    pub quantity: i32,
}

/// POST /api/v1/sessions/{id}/purchase
///
/// Buy tickets for a session. Admission rules run inside the purchase
/// transaction with the session row locked, so concurrent buyers cannot
/// jointly oversell.
pub async fn purchase(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(session_id): Path<DbId>,
    Json(input): Json<PurchaseRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Purchase>>)> {
    let now = Utc::now();

    match PurchaseRepo::execute(&state.pool, user.user_id, session_id, input.quantity, now).await? {
        PurchaseOutcome::Purchased(purchase) => {
            tracing::info!(
                purchase_id = purchase.id,
                user_id = purchase.user_id,
                session_id = purchase.session_id,
                quantity = purchase.quantity,
                "tickets purchased"
            );
            Ok((StatusCode::CREATED, Json(DataResponse { data: purchase })))
        }
        PurchaseOutcome::Rejected(errors) => Err(errors.into()),
        PurchaseOutcome::SessionMissing => Err(CoreError::NotFound {
            entity: "Session",
            id: session_id,
        }
        .into()),
        // A valid token whose user row has since been deleted.
        PurchaseOutcome::UserMissing => Err(AppError::Core(CoreError::Unauthorized(
            "User account no longer exists".into(),
        ))),
    }
}

/// GET /api/v1/purchases
///
/// A customer sees their own purchase history; an admin sees every
/// purchase in the system. Newest first either way.
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<Purchase>>>> {
    let purchases = if user.role == ROLE_ADMIN {
        PurchaseRepo::list_all(&state.pool).await?
    } else {
        PurchaseRepo::list_for_user(&state.pool, user.user_id).await?
    };
    Ok(Json(DataResponse { data: purchases }))
}
