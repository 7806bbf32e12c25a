use crate::analysis::distinct_languages;
use crate::models::repository::Repository;
use crate::models::score::{DimensionKey, ScoreDimension};

const KEY: DimensionKey = DimensionKey::EngineeringPractices;

/// Engineering Practices (0–100):
/// reposWithTopics/total × 50 + (distinctLanguages > 2 ? 50 : distinctLanguages/2 × 50)
pub fn score_engineering_practices(repositories: &[Repository]) -> ScoreDimension {
    if repositories.is_empty() {
        return ScoreDimension::zero(KEY, "No repositories to analyze");
    }

    let total = repositories.len() as f64;

    let with_topics = repositories.iter().filter(|r| !r.topics.is_empty()).count();
    let topics_score = with_topics as f64 / total * 50.0;

    let languages = distinct_languages(repositories);
    let multi_language_score = if languages > 2 {
        50.0
    } else {
        languages as f64 / 2.0 * 50.0
    };

    let details = format!("{with_topics} repos with topics, {languages} languages used");

    ScoreDimension::new(KEY, topics_score + multi_language_score, details)
}
