use crate::analysis::distinct_languages;
use crate::models::repository::Repository;
use crate::models::score::{DimensionKey, ScoreDimension};
use std::collections::HashSet;

const KEY: DimensionKey = DimensionKey::TechDiversity;

/// Tech Diversity (0–100):
/// min(distinctLanguages × 15, 50) + min(distinctTopics × 2, 50)
pub fn score_tech_diversity(repositories: &[Repository]) -> ScoreDimension {
    if repositories.is_empty() {
        return ScoreDimension::zero(KEY, "No repositories to analyze");
    }

    let languages = distinct_languages(repositories);
    let topics: HashSet<&str> = repositories
        .iter()
        .flat_map(|r| r.topics.iter().map(String::as_str))
        .collect();

    let language_score = (languages as f64 * 15.0).min(50.0);
    let topic_score = (topics.len() as f64 * 2.0).min(50.0);

    let details = format!("{languages} languages, {} different topics", topics.len());

    ScoreDimension::new(KEY, language_score + topic_score, details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures::repo;
    use chrono::Utc;

    #[test]
    fn topics_are_counted_once_across_repos() {
        let now = Utc::now();
        let mut a = repo("a", 0, now);
        a.topics.extend(["web".to_string(), "api".to_string()]);
        let mut b = repo("b", 0, now);
        b.topics.extend(["web".to_string(), "cli".to_string()]);

        // languages: 0; topics: 3×2 = 6
        let dim = score_tech_diversity(&[a, b]);
        assert!((dim.score - 6.0).abs() < 1e-9);
        assert_eq!(dim.details, "0 languages, 3 different topics");
    }

    #[test]
    fn four_languages_cap_the_language_term() {
        let now = Utc::now();
        let repos: Vec<Repository> = ["Rust", "Go", "Python", "C"]
            .iter()
            .enumerate()
            .map(|(i, lang)| {
                let mut r = repo(&format!("r{i}"), 0, now);
                r.language = Some(lang.to_string());
                r
            })
            .collect();

        let dim = score_tech_diversity(&repos);
        assert!((dim.score - 50.0).abs() < 1e-9);
    }
}
