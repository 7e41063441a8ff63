//! Derived facts and recommendations. Computed per request from a context
//! bundle, never stored.

use serde::{Deserialize, Serialize};

/// Kinds of facts derived from retrieved evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsightKind {
    PopularPattern,
    Pitfall,
    PerfOptimization,
    AccessibilityFeature,
}

/// A single derived fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub value: String,
}

impl Insight {
    pub fn new(kind: InsightKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Kinds of guidance derived from insights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationKind {
    SuggestedFeature,
    BestPractice,
    AntiPattern,
}

/// A single piece of guidance for the generation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub value: String,
}

impl Recommendation {
    pub fn new(kind: RecommendationKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
