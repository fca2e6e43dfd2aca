use std::sync::Arc;

use crate::config::Config;
use crate::screening::scorer::{CandidateScorer, KeywordScorer};

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no mutable data: every request is scored independently.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable candidate scorer. Default: KeywordScorer.
    pub scorer: Arc<dyn CandidateScorer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            scorer: Arc::new(KeywordScorer),
        }
    }
}
