use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Version tag written alongside persisted dimension payloads so historical
/// rows stay parseable if the dimension set ever changes.
pub const DIMENSIONS_SCHEMA_VERSION: u32 = 1;

/// The nine fixed scoring dimensions, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionKey {
    RepositoryQuality,
    Documentation,
    ContributionActivity,
    CodeQuality,
    ProjectImpact,
    EngineeringPractices,
    TechDiversity,
    Collaboration,
    ProfilePresentation,
}

impl DimensionKey {
    pub const ALL: [DimensionKey; 9] = [
        DimensionKey::RepositoryQuality,
        DimensionKey::Documentation,
        DimensionKey::ContributionActivity,
        DimensionKey::CodeQuality,
        DimensionKey::ProjectImpact,
        DimensionKey::EngineeringPractices,
        DimensionKey::TechDiversity,
        DimensionKey::Collaboration,
        DimensionKey::ProfilePresentation,
    ];

    /// Fixed weight table (sums to 1.0). Compile-time constants on purpose:
    /// the sum invariant is asserted in tests, never re-derived at runtime.
    pub const fn weight(self) -> f64 {
        match self {
            DimensionKey::RepositoryQuality => 0.25,
            DimensionKey::Documentation => 0.15,
            DimensionKey::ContributionActivity => 0.15,
            DimensionKey::CodeQuality => 0.15,
            DimensionKey::ProjectImpact => 0.10,
            DimensionKey::EngineeringPractices => 0.08,
            DimensionKey::TechDiversity => 0.05,
            DimensionKey::Collaboration => 0.04,
            DimensionKey::ProfilePresentation => 0.03,
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            DimensionKey::RepositoryQuality => "Repository Quality",
            DimensionKey::Documentation => "Documentation",
            DimensionKey::ContributionActivity => "Contribution Activity",
            DimensionKey::CodeQuality => "Code Quality",
            DimensionKey::ProjectImpact => "Project Impact",
            DimensionKey::EngineeringPractices => "Engineering Practices",
            DimensionKey::TechDiversity => "Tech Diversity",
            DimensionKey::Collaboration => "Collaboration",
            DimensionKey::ProfilePresentation => "Profile Presentation",
        }
    }
}

/// One scored facet of profile quality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreDimension {
    pub name: String,
    pub weight: f64,
    pub score: f64,
    pub max_score: f64,
    pub details: String,
}

impl ScoreDimension {
    /// Build a dimension result, clamping the score into [0, 100]. Scorers
    /// cap sub-terms where their formula says so; this is the outer clamp.
    pub fn new(key: DimensionKey, score: f64, details: impl Into<String>) -> Self {
        Self {
            name: key.display_name().to_string(),
            weight: key.weight(),
            score: score.clamp(0.0, 100.0),
            max_score: 100.0,
            details: details.into(),
        }
    }

    /// Zero-state result for repository-dependent dimensions on an empty list.
    pub fn zero(key: DimensionKey, details: impl Into<String>) -> Self {
        Self::new(key, 0.0, details)
    }
}

/// The full dimension set for one analysis run. Field order is the canonical
/// dimension order; serde keeps it when rendering or persisting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dimensions {
    pub repository_quality: ScoreDimension,
    pub documentation: ScoreDimension,
    pub contribution_activity: ScoreDimension,
    pub code_quality: ScoreDimension,
    pub project_impact: ScoreDimension,
    pub engineering_practices: ScoreDimension,
    pub tech_diversity: ScoreDimension,
    pub collaboration: ScoreDimension,
    pub profile_presentation: ScoreDimension,
}

impl Dimensions {
    pub fn get(&self, key: DimensionKey) -> &ScoreDimension {
        match key {
            DimensionKey::RepositoryQuality => &self.repository_quality,
            DimensionKey::Documentation => &self.documentation,
            DimensionKey::ContributionActivity => &self.contribution_activity,
            DimensionKey::CodeQuality => &self.code_quality,
            DimensionKey::ProjectImpact => &self.project_impact,
            DimensionKey::EngineeringPractices => &self.engineering_practices,
            DimensionKey::TechDiversity => &self.tech_diversity,
            DimensionKey::Collaboration => &self.collaboration,
            DimensionKey::ProfilePresentation => &self.profile_presentation,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (DimensionKey, &ScoreDimension)> {
        DimensionKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }

    /// Weighted sum over the fixed weight table, unrounded. The table on
    /// `DimensionKey` is authoritative, not the weights stored per dimension.
    pub fn weighted_total(&self) -> f64 {
        self.iter()
            .map(|(key, dim)| dim.score * key.weight())
            .sum()
    }
}

/// Persisted form of a dimension set, tagged with its schema version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionsRecord {
    pub schema_version: u32,
    pub dimensions: Dimensions,
}

impl DimensionsRecord {
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            schema_version: DIMENSIONS_SCHEMA_VERSION,
            dimensions,
        }
    }
}

/// The result of one analysis run. Immutable once returned; corrections
/// require a new run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileScore {
    pub overall: u32,
    pub dimensions: Dimensions,
    /// Signed delta vs. the most recent prior run, `None` on the first run.
    pub improvement: Option<f64>,
    pub last_analyzed_at: DateTime<Utc>,
    pub analysis_id: String,
}
