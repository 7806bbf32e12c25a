pub mod analysis;
pub mod analyzer;
pub mod config;
pub mod engine;
pub mod error;
pub mod insights;
pub mod models;
pub mod normalize;
pub mod sources;
pub mod store;

pub use analyzer::{AnalysisReport, Analyzer};
pub use config::AnalyzerConfig;
pub use error::AnalysisError;
pub use insights::RecommendationProvider;
pub use models::insight::{AIInsight, AIRecommendation, Priority};
pub use models::repository::{Profile, RawRepoRecord, Repository};
pub use models::score::{DimensionKey, Dimensions, ProfileScore, ScoreDimension};
pub use sources::{RepositoryProvider, SourceKind};
pub use store::HistoryStore;
