use crate::models::repository::Repository;
use crate::models::score::{DimensionKey, ScoreDimension};

const KEY: DimensionKey = DimensionKey::RepositoryQuality;

/// Repository Quality (0–100):
/// min(repoCount/20 × 100, 40) + min(avgStars/10 × 100, 30) + withDescription/total × 30
pub fn score_repository_quality(repositories: &[Repository]) -> ScoreDimension {
    if repositories.is_empty() {
        return ScoreDimension::zero(KEY, "No public repositories found");
    }

    let total = repositories.len() as f64;
    let count_score = (total / 20.0 * 100.0).min(40.0);

    let avg_stars = repositories.iter().map(|r| f64::from(r.stars)).sum::<f64>() / total;
    let stars_score = (avg_stars / 10.0 * 100.0).min(30.0);

    let with_descriptions = repositories.iter().filter(|r| has_description(r)).count();
    let description_score = with_descriptions as f64 / total * 30.0;

    let details = format!(
        "{} repos, avg {:.1} stars, {} with descriptions",
        repositories.len(),
        avg_stars,
        with_descriptions
    );

    ScoreDimension::new(KEY, count_score + stars_score + description_score, details)
}

fn has_description(repo: &Repository) -> bool {
    repo.description.as_deref().is_some_and(|d| !d.is_empty())
}
