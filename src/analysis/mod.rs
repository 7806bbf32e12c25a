pub mod code_quality;
pub mod collaboration;
pub mod contribution_activity;
pub mod documentation;
pub mod engineering_practices;
pub mod profile_presentation;
pub mod project_impact;
pub mod repository_quality;
pub mod tech_diversity;

pub use code_quality::score_code_quality;
pub use collaboration::score_collaboration;
pub use contribution_activity::score_contribution_activity;
pub use documentation::score_documentation;
pub use engineering_practices::score_engineering_practices;
pub use profile_presentation::score_profile_presentation;
pub use project_impact::score_project_impact;
pub use repository_quality::score_repository_quality;
pub use tech_diversity::score_tech_diversity;

use crate::models::repository::Repository;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Account age in fractional years. Future-dated creation reads as zero.
pub fn account_age_years(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let seconds = (now - created_at).num_seconds();
    if seconds <= 0 {
        return 0.0;
    }
    seconds as f64 / (365.0 * 86_400.0)
}

/// Count distinct primary languages, ignoring repos without one.
pub(crate) fn distinct_languages(repositories: &[Repository]) -> usize {
    repositories
        .iter()
        .filter_map(|r| r.language.as_deref())
        .filter(|lang| !lang.is_empty())
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::repository::Repository;
    use chrono::{DateTime, Duration, Utc};
    use std::collections::BTreeSet;

    pub fn repo(name: &str, stars: u32, updated_at: DateTime<Utc>) -> Repository {
        Repository {
            id: format!("id-{name}"),
            name: name.to_string(),
            description: None,
            url: format!("https://example.com/{name}"),
            stars,
            language: None,
            updated_at,
            topics: BTreeSet::new(),
            forks: 0,
        }
    }

    pub fn days_ago(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
        now - Duration::days(days)
    }
}
