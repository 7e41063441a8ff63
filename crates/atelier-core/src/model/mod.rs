//! Per-request data model. Everything here is created for one request and
//! dropped with it; nothing is mutated after construction except
//! [`OptimizationRecord`], which accumulates within a single run.

pub mod context;
pub mod insight;
pub mod optimize;
pub mod review;
pub mod search;

pub use context::{
    CodeTemplate, ComponentRequest, ContextBundle, DocSection, KnowledgeContext, KnowledgeRecord,
};
pub use insight::{Insight, InsightKind, Recommendation, RecommendationKind};
pub use optimize::OptimizationRecord;
pub use review::{Issue, Priority, ReviewVerdict, Severity, Suggestion, SuggestionCategory};
pub use search::{FusedResult, HitOrigin, SearchHit};
