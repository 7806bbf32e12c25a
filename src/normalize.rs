use crate::models::repository::{RawRepoRecord, Repository};
use std::collections::HashSet;

/// Merge the three source lists into the canonical deduplicated set, keyed by
/// repository name. Lists arrive in declared priority order (pinned,
/// top-starred, recently-updated) and the first occurrence of a name wins, so
/// the result does not depend on which network call finished first.
pub fn normalize_sources(sources: [Vec<RawRepoRecord>; 3]) -> Vec<Repository> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged = Vec::new();

    for records in sources {
        for raw in records {
            if seen.insert(raw.name.clone()) {
                merged.push(Repository::from_raw(raw));
            }
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, stars: u32) -> RawRepoRecord {
        RawRepoRecord {
            id: format!("id-{name}-{stars}"),
            name: name.to_string(),
            description: None,
            url: Some(format!("https://example.com/{name}")),
            stars: Some(stars),
            language: None,
            updated_at: None,
            topics: None,
            forks: None,
        }
    }

    #[test]
    fn pinned_version_wins_over_recent() {
        let merged = normalize_sources([
            vec![raw("x", 10)],
            vec![],
            vec![raw("x", 99), raw("y", 1)],
        ]);

        assert_eq!(merged.len(), 2);
        let x = merged.iter().find(|r| r.name == "x").expect("repo x");
        assert_eq!(x.stars, 10);
    }

    #[test]
    fn normalization_is_idempotent() {
        let sources = || {
            [
                vec![raw("a", 1), raw("b", 2)],
                vec![raw("b", 20), raw("c", 3)],
                vec![raw("a", 100), raw("d", 4)],
            ]
        };

        let first = normalize_sources(sources());
        let second = normalize_sources(sources());

        let names = |repos: &[Repository]| {
            repos
                .iter()
                .map(|r| (r.name.clone(), r.stars))
                .collect::<Vec<_>>()
        };
        assert_eq!(names(&first), names(&second));
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn duplicates_within_one_source_collapse_to_first() {
        let merged = normalize_sources([vec![raw("a", 1), raw("a", 2)], vec![], vec![]]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].stars, 1);
    }
}
