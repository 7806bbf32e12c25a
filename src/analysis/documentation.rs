use crate::models::repository::Repository;
use crate::models::score::{DimensionKey, ScoreDimension};

const KEY: DimensionKey = DimensionKey::Documentation;

/// Minimum description length to count as "detailed".
const DETAILED_DESCRIPTION_CHARS: usize = 50;

/// Documentation (0–100):
/// reposWithDesc>50chars/total × 50 + min(avgDescLength/200 × 50, 50)
pub fn score_documentation(repositories: &[Repository]) -> ScoreDimension {
    if repositories.is_empty() {
        return ScoreDimension::zero(KEY, "No repositories to analyze");
    }

    let total = repositories.len() as f64;

    let detailed = repositories
        .iter()
        .filter(|r| description_chars(r) > DETAILED_DESCRIPTION_CHARS)
        .count();
    let description_score = detailed as f64 / total * 50.0;

    // README presence approximated by description length.
    let avg_desc_len =
        repositories.iter().map(|r| description_chars(r) as f64).sum::<f64>() / total;
    let readme_score = (avg_desc_len / 200.0 * 50.0).min(50.0);

    let details = format!("{detailed} repos with detailed descriptions");

    ScoreDimension::new(KEY, description_score + readme_score, details)
}

fn description_chars(repo: &Repository) -> usize {
    repo.description.as_deref().map_or(0, |d| d.chars().count())
}
