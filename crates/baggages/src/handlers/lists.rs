//! List handlers.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use baggages_core::packing::{List, ListWithBaggages};

use super::{decode_json, parse_id, ApiError};
use crate::{models::CreateList, state::AppState};

/// Looks up the list named by a raw path segment.
///
/// Every nested route calls this first; a missing list ends the request
/// with 404 before any other storage work happens.
pub(crate) async fn find_list(state: &AppState, raw_id: &str) -> Result<List, ApiError> {
    let Some(id) = parse_id(raw_id) else {
        return Err(ApiError::NotFound("List"));
    };

    state
        .list_repo
        .get_list(id)
        .await?
        .ok_or(ApiError::NotFound("List"))
}

/// List all lists, newest first (GET /lists).
pub async fn list_lists(State(state): State<AppState>) -> Result<Json<Vec<List>>, ApiError> {
    let lists = state.list_repo.list_lists().await?;

    Ok(Json(lists))
}

/// Create a new list (POST /lists).
pub async fn create_list(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<List>), ApiError> {
    let payload: CreateList = decode_json(&body)?;

    let list = state
        .list_repo
        .create_list(&payload.into_new_list())
        .await?;

    tracing::info!(list_id = list.id, name = %list.name, "Created new list");

    Ok((StatusCode::CREATED, Json(list)))
}

/// Get a list with its baggage (GET /lists/{id}).
pub async fn get_list(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ListWithBaggages>, ApiError> {
    let list = find_list(&state, &id).await?;
    let baggages = state.baggage_repo.get_baggages_by_list(list.id).await?;

    Ok(Json(ListWithBaggages::new(list, baggages)))
}
