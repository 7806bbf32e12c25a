use crate::error::AnalysisError;
use crate::models::repository::{Profile, RawRepoRecord};
use std::future::Future;
use std::time::Duration;

/// The three repository sources, in dedup-precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Pinned,
    TopStarred,
    RecentlyUpdated,
}

impl SourceKind {
    /// Declared priority: pinned > top-starred > recently-updated. The
    /// normalizer consumes source lists in this order regardless of which
    /// fetch completed first.
    pub const PRIORITY: [SourceKind; 3] = [
        SourceKind::Pinned,
        SourceKind::TopStarred,
        SourceKind::RecentlyUpdated,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            SourceKind::Pinned => "pinned",
            SourceKind::TopStarred => "top-starred",
            SourceKind::RecentlyUpdated => "recently-updated",
        }
    }
}

/// External data source for profile and repository records. Implementations
/// wrap the concrete GitHub REST/GraphQL client; tests use in-memory fakes.
pub trait RepositoryProvider {
    fn profile(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Profile, AnalysisError>> + Send;

    fn repositories(
        &self,
        username: &str,
        source: SourceKind,
    ) -> impl Future<Output = Result<Vec<RawRepoRecord>, AnalysisError>> + Send;
}

/// Fetch the profile under the collaborator timeout. Unlike the repository
/// sources, a missing profile aborts the run.
pub async fn fetch_profile<P: RepositoryProvider>(
    provider: &P,
    username: &str,
    limit: Duration,
) -> Result<Profile, AnalysisError> {
    tokio::time::timeout(limit, provider.profile(username))
        .await
        .map_err(|_| AnalysisError::Timeout("profile"))?
}

/// Fetch all three repository sources concurrently. A source that errors or
/// times out degrades to an empty list; the run continues with partial data.
/// Results come back in `SourceKind::PRIORITY` order.
pub async fn fetch_all_sources<P: RepositoryProvider>(
    provider: &P,
    username: &str,
    limit: Duration,
) -> [Vec<RawRepoRecord>; 3] {
    let (pinned, top_starred, recent) = tokio::join!(
        fetch_source(provider, username, SourceKind::Pinned, limit),
        fetch_source(provider, username, SourceKind::TopStarred, limit),
        fetch_source(provider, username, SourceKind::RecentlyUpdated, limit),
    );
    [pinned, top_starred, recent]
}

async fn fetch_source<P: RepositoryProvider>(
    provider: &P,
    username: &str,
    source: SourceKind,
    limit: Duration,
) -> Vec<RawRepoRecord> {
    match tokio::time::timeout(limit, provider.repositories(username, source)).await {
        Ok(Ok(records)) => records,
        Ok(Err(err)) => {
            log::warn!(
                "{} source failed for {username}, continuing without it: {err}",
                source.label()
            );
            Vec::new()
        }
        Err(_) => {
            log::warn!(
                "{} source timed out for {username}, continuing without it",
                source.label()
            );
            Vec::new()
        }
    }
}
