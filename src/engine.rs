use crate::analysis::{
    account_age_years, score_code_quality, score_collaboration, score_contribution_activity,
    score_documentation, score_engineering_practices, score_profile_presentation,
    score_project_impact, score_repository_quality, score_tech_diversity,
};
use crate::models::repository::{Profile, Repository};
use crate::models::score::{Dimensions, ProfileScore};
use crate::store::HistoryStore;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Compute the weighted profile score, diff it against the most recent prior
/// run, and append the result to history. Store failures on either side are
/// logged and swallowed: the caller always gets the computed score.
pub fn compute_score(
    store: &HistoryStore,
    user_id: &str,
    repositories: &[Repository],
    profile: &Profile,
) -> ProfileScore {
    compute_score_at(store, user_id, repositories, profile, Utc::now())
}

/// Deterministic variant taking an explicit `now`; recomputing with the same
/// inputs and instant yields the same dimensions and overall.
pub fn compute_score_at(
    store: &HistoryStore,
    user_id: &str,
    repositories: &[Repository],
    profile: &Profile,
    now: DateTime<Utc>,
) -> ProfileScore {
    let account_age = account_age_years(profile.created_at, now);

    let dimensions = Dimensions {
        repository_quality: score_repository_quality(repositories),
        documentation: score_documentation(repositories),
        contribution_activity: score_contribution_activity(
            profile.followers,
            profile.following,
            account_age,
        ),
        code_quality: score_code_quality(repositories, now),
        project_impact: score_project_impact(repositories),
        engineering_practices: score_engineering_practices(repositories),
        tech_diversity: score_tech_diversity(repositories),
        collaboration: score_collaboration(profile.following, repositories),
        profile_presentation: score_profile_presentation(
            profile.name.as_deref(),
            profile.bio.as_deref(),
        ),
    };

    // Improvement deltas run over the unrounded sum, which is also what gets
    // persisted; rounding only happens at the display edge.
    let overall_raw = dimensions.weighted_total();

    let prior = match store.most_recent_overall(user_id) {
        Ok(prior) => prior,
        Err(err) => {
            log::warn!("score history read failed for {user_id}, treating as first run: {err}");
            None
        }
    };
    let improvement = prior.map(|p| overall_raw - p);

    let analysis_id = format!("analysis_{}_{}", user_id, Uuid::new_v4().simple());

    let score = ProfileScore {
        overall: overall_raw.round() as u32,
        dimensions,
        improvement,
        last_analyzed_at: now,
        analysis_id,
    };

    if let Err(err) = store.append_score(user_id, overall_raw, &score) {
        log::warn!("score history write failed for {user_id}, returning unpersisted score: {err}");
    }

    score
}
