//! Baggage handlers.
//!
//! Every route here is nested under a list, so each handler resolves the
//! list first via [`find_list`].

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use baggages_core::packing::Baggage;
use baggages_core::storage::RepositoryError;

use super::{decode_json, lists::find_list, parse_id, ApiError};
use crate::{models::CreateBaggage, state::AppState};

/// Create a baggage in a list (POST /lists/{id}/baggages).
pub async fn create_baggage(
    State(state): State<AppState>,
    Path(list_id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<Baggage>), ApiError> {
    let list = find_list(&state, &list_id).await?;
    let payload: CreateBaggage = decode_json(&body)?;

    let baggage = state
        .baggage_repo
        .create_baggage(&payload.into_new_baggage(list.id))
        .await?;

    tracing::info!(
        list_id = list.id,
        baggage_id = baggage.id,
        name = %baggage.name,
        "Created new baggage"
    );

    Ok((StatusCode::CREATED, Json(baggage)))
}

/// Delete a baggage from a list (DELETE /lists/{id}/baggages/{bid}).
///
/// Deleting a baggage that does not exist is a no-op and still answers 204.
pub async fn delete_baggage(
    State(state): State<AppState>,
    Path((list_id, baggage_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let list = find_list(&state, &list_id).await?;

    let Some(baggage_id) = parse_id(&baggage_id) else {
        return Ok(StatusCode::NO_CONTENT);
    };

    if let Some(baggage) = state.baggage_repo.get_baggage(list.id, baggage_id).await? {
        match state.baggage_repo.delete_baggage(baggage.id).await {
            Ok(()) => {
                tracing::info!(list_id = list.id, baggage_id = baggage.id, "Deleted baggage");
            }
            // Removed by a concurrent request between lookup and delete.
            Err(RepositoryError::NotFound { .. }) => {}
            Err(e) => return Err(e.into()),
        }
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Mark a baggage as packed (POST /lists/{id}/baggages/{bid}/check).
pub async fn check_baggage(
    State(state): State<AppState>,
    Path((list_id, baggage_id)): Path<(String, String)>,
) -> Result<Json<Baggage>, ApiError> {
    set_checked(&state, &list_id, &baggage_id, true).await
}

/// Mark a baggage as not packed (POST /lists/{id}/baggages/{bid}/uncheck).
pub async fn uncheck_baggage(
    State(state): State<AppState>,
    Path((list_id, baggage_id)): Path<(String, String)>,
) -> Result<Json<Baggage>, ApiError> {
    set_checked(&state, &list_id, &baggage_id, false).await
}

async fn set_checked(
    state: &AppState,
    list_id: &str,
    baggage_id: &str,
    checked: bool,
) -> Result<Json<Baggage>, ApiError> {
    let list = find_list(state, list_id).await?;

    let Some(baggage_id) = parse_id(baggage_id) else {
        return Err(ApiError::NotFound("Baggage"));
    };

    let baggage = state
        .baggage_repo
        .get_baggage(list.id, baggage_id)
        .await?
        .ok_or(ApiError::NotFound("Baggage"))?
        .with_checked(checked);

    match state.baggage_repo.update_baggage(&baggage).await {
        Ok(()) => {}
        Err(RepositoryError::NotFound { .. }) => return Err(ApiError::NotFound("Baggage")),
        Err(e) => return Err(e.into()),
    }

    tracing::info!(
        list_id = list.id,
        baggage_id = baggage.id,
        checked,
        "Updated baggage"
    );

    Ok(Json(baggage))
}
