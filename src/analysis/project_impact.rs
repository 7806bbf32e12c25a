use crate::models::repository::Repository;
use crate::models::score::{DimensionKey, ScoreDimension};

const KEY: DimensionKey = DimensionKey::ProjectImpact;

/// Project Impact (0–100):
/// (min(totalStars/100 × 100, 100) + min(totalForks/50 × 100, 100)) / 2
pub fn score_project_impact(repositories: &[Repository]) -> ScoreDimension {
    if repositories.is_empty() {
        return ScoreDimension::zero(KEY, "No repositories to analyze");
    }

    let total_stars: u64 = repositories.iter().map(|r| u64::from(r.stars)).sum();
    let total_forks: u64 = repositories.iter().map(|r| u64::from(r.forks)).sum();

    let stars_score = (total_stars as f64 / 100.0 * 100.0).min(100.0);
    let forks_score = (total_forks as f64 / 50.0 * 100.0).min(100.0);

    let details = format!("{total_stars} total stars, {total_forks} total forks");

    ScoreDimension::new(KEY, (stars_score + forks_score) / 2.0, details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures::repo;
    use chrono::Utc;

    #[test]
    fn stars_and_forks_average() {
        let now = Utc::now();
        let mut a = repo("a", 50, now);
        a.forks = 25;

        // stars: 50/100×100 = 50; forks: 25/50×100 = 50 → 50
        let dim = score_project_impact(&[a]);
        assert!((dim.score - 50.0).abs() < 1e-9);
        assert_eq!(dim.details, "50 total stars, 25 total forks");
    }

    #[test]
    fn each_half_caps_independently() {
        let now = Utc::now();
        let mut popular = repo("popular", 100_000, now);
        popular.forks = 0;

        let dim = score_project_impact(&[popular]);
        assert!((dim.score - 50.0).abs() < 1e-9);
    }
}
