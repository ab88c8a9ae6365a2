//! Clean action handler.

use axum::{Json, extract::State};
use serde::Serialize;
use sweeper::{CleaningOptions, CleaningReport, TablePreview};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Response for the clean endpoint.
#[derive(Serialize)]
pub struct CleanResponse {
    /// The options that were applied.
    pub options: CleaningOptions,
    /// What each step did.
    pub report: CleaningReport,
    /// First rows of the cleaned table.
    pub preview: TablePreview,
}

/// Clean the uploaded dataset with the given options.
///
/// Fields left out of the request body take their default values. The
/// session stays locked from reading the dataset until the result is
/// stored, so an upload cannot slip in between.
pub async fn clean_data(
    State(state): State<AppState>,
    Json(options): Json<CleaningOptions>,
) -> Result<Json<CleanResponse>, ApiError> {
    let mut session = state.session.write().await;
    let dataset = session
        .dataset
        .as_ref()
        .ok_or_else(|| ApiError::NotFound("Upload a CSV file before cleaning".to_string()))?;
    let outcome = state.sweeper.clean(dataset, &options);

    let response = CleanResponse {
        options: outcome.options,
        report: outcome.report.clone(),
        preview: state.sweeper.preview(&outcome.table),
    };
    session.cleaned = Some(outcome);

    Ok(Json(response))
}
