use crate::error::AnalysisError;
use crate::models::insight::{AIInsight, AIRecommendation, Priority};
use crate::models::repository::{Profile, Repository};
use crate::models::score::ProfileScore;
use std::future::Future;
use std::time::Duration;

/// External recommendation generator (in production, an LLM behind an API).
/// The engine only requires that it accept the analysis inputs and return a
/// structured insight; everything about how is the implementor's business.
pub trait RecommendationProvider {
    fn generate(
        &self,
        profile: &Profile,
        repositories: &[Repository],
        score: &ProfileScore,
    ) -> impl Future<Output = Result<AIInsight, AnalysisError>> + Send;
}

/// Run the bridge under a timeout. Any failure — error, timeout, whatever the
/// provider chokes on — degrades to the deterministic local fallback; the
/// caller always gets a well-formed insight.
pub async fn generate_with_fallback<B: RecommendationProvider>(
    bridge: &B,
    profile: &Profile,
    repositories: &[Repository],
    score: &ProfileScore,
    limit: Duration,
) -> AIInsight {
    match tokio::time::timeout(limit, bridge.generate(profile, repositories, score)).await {
        Ok(Ok(insight)) => insight,
        Ok(Err(err)) => {
            log::warn!(
                "recommendation bridge failed for {}, using fallback: {err}",
                profile.username
            );
            fallback_insight(profile, repositories, score)
        }
        Err(_) => {
            log::warn!(
                "recommendation bridge timed out for {}, using fallback",
                profile.username
            );
            fallback_insight(profile, repositories, score)
        }
    }
}

/// Locally computed recommendations derived from the score and repository
/// count alone. Relies only on the `ProfileScore` contract — all nine
/// dimension keys are guaranteed present, so no field access here can miss.
pub fn fallback_insight(
    profile: &Profile,
    repositories: &[Repository],
    score: &ProfileScore,
) -> AIInsight {
    AIInsight {
        summary: format!(
            "{} has {} public repositories with a total score of {}/100.",
            profile.username,
            repositories.len(),
            score.overall
        ),
        strengths: vec![
            format!(
                "{} public repositories showing active development",
                repositories.len()
            ),
            format!(
                "{}/100 project impact score",
                score.dimensions.project_impact.score
            ),
        ],
        improvements: vec![
            "Improve documentation on existing projects".to_string(),
            "Increase frequency of repository updates".to_string(),
        ],
        recommendations: vec![
            AIRecommendation {
                category: "Documentation".to_string(),
                title: "Improve Repository Documentation".to_string(),
                description: "Add comprehensive README files to all repositories".to_string(),
                priority: Priority::High,
                action_items: vec![
                    "Add README.md to repositories without documentation".to_string(),
                    "Include setup instructions and usage examples".to_string(),
                    "Add badges for build status and version".to_string(),
                ],
                estimated_impact: "Significantly improve repository quality score and usability"
                    .to_string(),
            },
            AIRecommendation {
                category: "Code Quality".to_string(),
                title: "Add Project Organization".to_string(),
                description: "Use topics and consistent folder structure".to_string(),
                priority: Priority::High,
                action_items: vec![
                    "Add relevant topics to repositories".to_string(),
                    "Standardize folder structure across projects".to_string(),
                    "Add contributing guidelines".to_string(),
                ],
                estimated_impact: "Better project visibility and contributor engagement"
                    .to_string(),
            },
        ],
    }
}
