use std::time::Duration;

/// Tunables for the network-bound collaborators. Scoring itself has no
/// timeout semantics; only the provider and the recommendation bridge do.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Per-call limit for the profile fetch and each repository source.
    pub source_timeout: Duration,
    /// Limit for the recommendation bridge before the fallback kicks in.
    pub bridge_timeout: Duration,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            source_timeout: Duration::from_secs(10),
            bridge_timeout: Duration::from_secs(30),
        }
    }
}
