use crate::analysis::distinct_languages;
use crate::models::repository::Repository;
use crate::models::score::{DimensionKey, ScoreDimension};
use chrono::{DateTime, Utc};

const KEY: DimensionKey = DimensionKey::CodeQuality;

/// Updates within this window count as recent.
const RECENT_WINDOW_DAYS: f64 = 90.0;

/// Code Quality (0–100):
/// min(distinctLanguages/5 × 40, 40) + recentlyUpdated<90days/total × 60
pub fn score_code_quality(repositories: &[Repository], now: DateTime<Utc>) -> ScoreDimension {
    if repositories.is_empty() {
        return ScoreDimension::zero(KEY, "No repositories to analyze");
    }

    let total = repositories.len() as f64;

    let languages = distinct_languages(repositories);
    let language_score = (languages as f64 / 5.0 * 40.0).min(40.0);

    let recent = repositories
        .iter()
        .filter(|r| is_recently_updated(r, now))
        .count();
    let recency_score = recent as f64 / total * 60.0;

    let details = format!("{languages} languages, {recent} recently updated");

    ScoreDimension::new(KEY, language_score + recency_score, details)
}

fn is_recently_updated(repo: &Repository, now: DateTime<Utc>) -> bool {
    let diff_days = (now - repo.updated_at).num_seconds().abs() as f64 / 86_400.0;
    diff_days < RECENT_WINDOW_DAYS
}
