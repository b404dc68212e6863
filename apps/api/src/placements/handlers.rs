//! Axum route handlers for the Placements API.

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::placement::{CandidateProfile, SortOrder};
use crate::placements::commands::{
    self, AddOutcome, ChartOutcome, EligibilityOutcome, ListOutcome, NewPlacement,
    RemovalOptions, RemoveOutcome,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    #[serde(default)]
    pub sort: SortOrder,
}

#[derive(Debug, Deserialize)]
pub struct RemoveQuery {
    pub label: String,
}

/// GET /api/v1/placements
pub async fn handle_list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListOutcome>, AppError> {
    let outcome = commands::list(state.store.as_ref(), query.search.as_deref(), query.sort).await?;
    Ok(Json(outcome))
}

/// POST /api/v1/placements
pub async fn handle_add(
    State(state): State<AppState>,
    Json(new): Json<NewPlacement>,
) -> Result<Json<AddOutcome>, AppError> {
    Ok(Json(commands::add(state.store.as_ref(), new).await?))
}

/// GET /api/v1/placements/labels
pub async fn handle_removal_options(
    State(state): State<AppState>,
) -> Result<Json<RemovalOptions>, AppError> {
    Ok(Json(commands::removal_options(state.store.as_ref()).await?))
}

/// DELETE /api/v1/placements?label=Company%20-%20Role
pub async fn handle_remove(
    State(state): State<AppState>,
    Query(query): Query<RemoveQuery>,
) -> Result<Json<RemoveOutcome>, AppError> {
    Ok(Json(
        commands::remove(state.store.as_ref(), &query.label).await?,
    ))
}

/// GET /api/v1/placements/chart
pub async fn handle_chart(State(state): State<AppState>) -> Result<Json<ChartOutcome>, AppError> {
    Ok(Json(commands::visualize(state.store.as_ref()).await?))
}

/// POST /api/v1/eligibility
pub async fn handle_check_eligibility(
    State(state): State<AppState>,
    Json(profile): Json<CandidateProfile>,
) -> Result<Json<EligibilityOutcome>, AppError> {
    Ok(Json(
        commands::check_eligibility(state.store.as_ref(), profile).await?,
    ))
}

/// GET /api/v1/eligibility/export
///
/// Serves the last export as a CSV attachment.
pub async fn handle_download_export(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let csv = commands::eligible_export(state.store.as_ref()).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"eligible_companies.csv\"",
            ),
        ],
        csv,
    ))
}
