//! Application state for the web server.

use std::sync::Arc;
use tokio::sync::RwLock;

use sweeper::{CleaningOutcome, Dataset, Sweeper};

/// What the current browser session has uploaded and cleaned.
#[derive(Default)]
pub struct Session {
    /// The uploaded dataset.
    pub dataset: Option<Dataset>,
    /// Result of the last "Clean Data" action on `dataset`.
    pub cleaned: Option<CleaningOutcome>,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Loader and cleaner.
    pub sweeper: Arc<Sweeper>,
    /// Uploaded and cleaned tables.
    pub session: Arc<RwLock<Session>>,
}

impl AppState {
    /// Create new application state with nothing uploaded.
    pub fn new() -> Self {
        Self::with_sweeper(Sweeper::new())
    }

    /// Create application state around a configured sweeper.
    pub fn with_sweeper(sweeper: Sweeper) -> Self {
        Self {
            sweeper: Arc::new(sweeper),
            session: Arc::new(RwLock::new(Session::default())),
        }
    }

    /// Replace the uploaded dataset, discarding any earlier cleaned result.
    pub async fn replace_dataset(&self, dataset: Dataset) {
        let mut session = self.session.write().await;
        session.dataset = Some(dataset);
        session.cleaned = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
