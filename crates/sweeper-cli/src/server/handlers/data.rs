//! Upload and raw data preview handlers.

use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use sweeper::{SourceMetadata, TablePreview};
use tracing::debug;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// File name given by the browser.
#[derive(Debug, Deserialize)]
pub struct UploadParams {
    pub name: Option<String>,
}

/// Response for the upload and data endpoints.
#[derive(Serialize)]
pub struct DataResponse {
    /// Where the data came from.
    pub source: SourceMetadata,
    /// First rows and per-column summary.
    pub preview: TablePreview,
}

/// Parse an uploaded CSV body and make it the current dataset.
pub async fn upload_data(
    State(state): State<AppState>,
    Query(params): Query<UploadParams>,
    body: Bytes,
) -> Result<Json<DataResponse>, ApiError> {
    let name = params.name.unwrap_or_else(|| "upload.csv".to_string());
    let dataset = state.sweeper.load_bytes(name, &body)?;
    debug!(file = %dataset.source.file, rows = dataset.source.row_count, "upload accepted");

    let response = DataResponse {
        source: dataset.source.clone(),
        preview: state.sweeper.preview(&dataset.table),
    };
    state.replace_dataset(dataset).await;

    Ok(Json(response))
}

/// Get a preview of the uploaded data.
pub async fn get_data(State(state): State<AppState>) -> Result<Json<DataResponse>, ApiError> {
    let session = state.session.read().await;
    let dataset = session
        .dataset
        .as_ref()
        .ok_or_else(|| ApiError::NotFound("No data uploaded yet".to_string()))?;

    Ok(Json(DataResponse {
        source: dataset.source.clone(),
        preview: state.sweeper.preview(&dataset.table),
    }))
}
