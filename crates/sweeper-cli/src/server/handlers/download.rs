//! Cleaned data download handler.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use sweeper::{CSV_MIME_TYPE, DOWNLOAD_FILE_NAME};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Download the last cleaned table as CSV.
pub async fn download_cleaned(State(state): State<AppState>) -> Result<Response, ApiError> {
    let session = state.session.read().await;
    let outcome = session
        .cleaned
        .as_ref()
        .ok_or_else(|| ApiError::NotFound("Nothing has been cleaned yet".to_string()))?;

    let bytes = state
        .sweeper
        .export_bytes(&outcome.table)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    let disposition = format!("attachment; filename=\"{}\"", DOWNLOAD_FILE_NAME);

    Ok((
        [
            (header::CONTENT_TYPE, CSV_MIME_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
