use crate::models::score::{DimensionKey, ScoreDimension};

const KEY: DimensionKey = DimensionKey::ContributionActivity;

/// Contribution Activity (0–100):
/// min(followers/100 × 100, 40) + min(following/200 × 30, 30) + min(ageYears/10 × 30, 30)
pub fn score_contribution_activity(
    followers: u32,
    following: u32,
    account_age_years: f64,
) -> ScoreDimension {
    let follower_score = (f64::from(followers) / 100.0 * 100.0).min(40.0);
    let following_score = (f64::from(following) / 200.0 * 30.0).min(30.0);
    let age_score = (account_age_years / 10.0 * 30.0).min(30.0);

    let details = format!(
        "{followers} followers, {following} following, account age {account_age_years:.1} years"
    );

    ScoreDimension::new(KEY, follower_score + following_score + age_score, details)
}
