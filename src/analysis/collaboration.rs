use crate::models::repository::Repository;
use crate::models::score::{DimensionKey, ScoreDimension};

const KEY: DimensionKey = DimensionKey::Collaboration;

/// Collaboration (0–100):
/// min(following/100 × 50, 50) + reposWithForks/total × 50
pub fn score_collaboration(following: u32, repositories: &[Repository]) -> ScoreDimension {
    if repositories.is_empty() {
        return ScoreDimension::zero(KEY, "No repositories to analyze");
    }

    let following_score = (f64::from(following) / 100.0 * 50.0).min(50.0);

    let forked = repositories.iter().filter(|r| r.forks > 0).count();
    let fork_score = forked as f64 / repositories.len() as f64 * 50.0;

    let details = format!("Following {following}, {forked} repos with forks");

    ScoreDimension::new(KEY, following_score + fork_score, details)
}
