use crate::config::AnalyzerConfig;
use crate::engine;
use crate::error::AnalysisError;
use crate::insights::{self, RecommendationProvider};
use crate::models::insight::AIInsight;
use crate::models::repository::{Profile, Repository};
use crate::models::score::ProfileScore;
use crate::normalize::normalize_sources;
use crate::sources::{fetch_all_sources, fetch_profile, RepositoryProvider};
use crate::store::HistoryStore;
use serde::{Deserialize, Serialize};

/// Everything one analysis run produces, ready to render as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub profile: Profile,
    pub repositories: Vec<Repository>,
    pub score: ProfileScore,
    pub insight: AIInsight,
}

/// Request-scoped analysis pipeline: one call, one user, one run. Holds the
/// injected collaborators; the store is owned here and opened/closed with the
/// process, not per call.
pub struct Analyzer<P, B> {
    provider: P,
    bridge: B,
    store: HistoryStore,
    config: AnalyzerConfig,
}

impl<P, B> Analyzer<P, B>
where
    P: RepositoryProvider,
    B: RecommendationProvider,
{
    pub fn new(provider: P, bridge: B, store: HistoryStore) -> Self {
        Self::with_config(provider, bridge, store, AnalyzerConfig::default())
    }

    pub fn with_config(provider: P, bridge: B, store: HistoryStore, config: AnalyzerConfig) -> Self {
        Self {
            provider,
            bridge,
            store,
            config,
        }
    }

    /// Run one end-to-end analysis. Only a failed profile fetch aborts;
    /// repository sources, the bridge, and all persistence degrade gracefully.
    pub async fn analyze(
        &self,
        user_id: &str,
        username: &str,
    ) -> Result<AnalysisReport, AnalysisError> {
        log::info!("starting analysis for {username}");

        let profile =
            fetch_profile(&self.provider, username, self.config.source_timeout).await?;

        let sources =
            fetch_all_sources(&self.provider, username, self.config.source_timeout).await;
        let repositories = normalize_sources(sources);
        log::info!(
            "normalized {} repositories for {username}",
            repositories.len()
        );

        let score = engine::compute_score(&self.store, user_id, &repositories, &profile);

        if let Err(err) = self.store.upsert_repositories(
            user_id,
            &repositories,
            score.last_analyzed_at.timestamp(),
        ) {
            log::warn!("repository snapshot upsert failed for {user_id}: {err}");
        }

        let insight = insights::generate_with_fallback(
            &self.bridge,
            &profile,
            &repositories,
            &score,
            self.config.bridge_timeout,
        )
        .await;

        if let Err(err) =
            self.store
                .save_insight(user_id, &score.analysis_id, &insight, score.last_analyzed_at.timestamp())
        {
            log::warn!("insight persistence failed for {user_id}: {err}");
        }

        log::info!(
            "analysis complete for {username}: overall {} ({})",
            score.overall,
            score.analysis_id
        );

        Ok(AnalysisReport {
            profile,
            repositories,
            score,
            insight,
        })
    }

    /// Access the underlying store for history/trend queries.
    pub fn store(&self) -> &HistoryStore {
        &self.store
    }
}
