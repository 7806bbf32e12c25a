use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A repository record as it arrives from a source, before normalization.
/// Everything beyond `id`/`name` is optional; providers disagree on which
/// fields they populate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRepoRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub stars: Option<u32>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
    #[serde(default)]
    pub forks: Option<u32>,
}

/// Canonical repository shape produced by the normalizer. Immutable for the
/// rest of the analysis run; one instance per distinct name per user per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub stars: u32,
    pub language: Option<String>,
    pub updated_at: DateTime<Utc>,
    pub topics: BTreeSet<String>,
    pub forks: u32,
}

impl Repository {
    /// Fill defaults for missing optionals: zero counts, empty topic set,
    /// Unix epoch for a missing update timestamp (reads as "not recent").
    pub fn from_raw(raw: RawRepoRecord) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            description: raw.description,
            url: raw.url.unwrap_or_default(),
            stars: raw.stars.unwrap_or(0),
            language: raw.language,
            updated_at: raw.updated_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
            topics: raw.topics.unwrap_or_default().into_iter().collect(),
            forks: raw.forks.unwrap_or(0),
        }
    }
}

/// Read-only profile input to scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub followers: u32,
    pub following: u32,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_defaults_missing_optionals() {
        let repo = Repository::from_raw(RawRepoRecord {
            id: "r1".to_string(),
            name: "widget".to_string(),
            description: None,
            url: None,
            stars: None,
            language: None,
            updated_at: None,
            topics: None,
            forks: None,
        });

        assert_eq!(repo.stars, 0);
        assert_eq!(repo.forks, 0);
        assert!(repo.topics.is_empty());
        assert_eq!(repo.updated_at, DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn from_raw_dedups_topics() {
        let repo = Repository::from_raw(RawRepoRecord {
            id: "r1".to_string(),
            name: "widget".to_string(),
            description: None,
            url: Some("https://example.com/widget".to_string()),
            stars: Some(3),
            language: Some("Rust".to_string()),
            updated_at: None,
            topics: Some(vec![
                "cli".to_string(),
                "rust".to_string(),
                "cli".to_string(),
            ]),
            forks: Some(1),
        });

        assert_eq!(repo.topics.len(), 2);
        assert!(repo.topics.contains("cli"));
        assert!(repo.topics.contains("rust"));
    }
}
