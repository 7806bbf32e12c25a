use thiserror::Error;

/// Failures an analysis run can surface to the caller.
///
/// Collaborator failures (history store, recommendation bridge, individual
/// repository sources) are recovered locally and never reach the caller as
/// this type; only the profile fetch is load-bearing enough to abort a run.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("store: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("provider: {0}")]
    Provider(String),

    #[error("provider timed out fetching {0}")]
    Timeout(&'static str),
}

impl AnalysisError {
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }
}
