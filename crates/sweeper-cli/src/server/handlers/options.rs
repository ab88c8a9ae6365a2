//! Cleaning options endpoint.

use axum::Json;
use serde::Serialize;
use sweeper::{CleaningOptions, MissingStrategy};

/// Defaults and choices for the UI controls.
#[derive(Serialize)]
pub struct OptionsResponse {
    /// Options the UI starts with.
    pub defaults: CleaningOptions,
    /// Accepted values for `handle_missing`, in display order.
    pub missing_strategies: Vec<&'static str>,
}

/// Get the default cleaning options.
pub async fn get_options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        defaults: CleaningOptions::default(),
        missing_strategies: MissingStrategy::ALL.iter().map(|s| s.as_str()).collect(),
    })
}
