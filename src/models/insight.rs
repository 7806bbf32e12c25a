use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AIRecommendation {
    pub category: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub action_items: Vec<String>,
    pub estimated_impact: String,
}

/// Structured recommendation set returned by the bridge. Always well-formed:
/// the fallback path produces one when the external generator fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AIInsight {
    pub summary: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub recommendations: Vec<AIRecommendation>,
}
