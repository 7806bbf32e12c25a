use crate::models::score::{DimensionKey, ScoreDimension};

const KEY: DimensionKey = DimensionKey::ProfilePresentation;

/// Bios at or below this length earn no credit.
const MIN_BIO_CHARS: usize = 20;

/// Profile Presentation (0–100): 50 if a name is set, +50 for a bio longer
/// than 20 characters.
pub fn score_profile_presentation(name: Option<&str>, bio: Option<&str>) -> ScoreDimension {
    let has_name = name.is_some_and(|n| !n.is_empty());
    let has_bio = bio.is_some_and(|b| !b.is_empty());

    let mut score = 0.0;
    if has_name {
        score += 50.0;
    }
    if bio.is_some_and(|b| b.chars().count() > MIN_BIO_CHARS) {
        score += 50.0;
    }

    let details = format!(
        "{} name, {} bio",
        if has_name { "Has" } else { "Missing" },
        if has_bio { "Has" } else { "Missing" }
    );

    ScoreDimension::new(KEY, score, details)
}
