//! # atelier-retrieval
//!
//! The evidence side of the pipeline: hybrid fusion over the two search
//! channels, then synthesis of the full context bundle with derived
//! insights and recommendations.
//!
//! ```text
//! ContextSynthesizer
//! ├── Provider fan-out (scoped threads, degrade-on-failure)
//! │   ├── SemanticSearchProvider
//! │   ├── KeywordSearchProvider
//! │   ├── KnowledgeProvider
//! │   ├── TemplateProvider
//! │   └── DocumentationProvider
//! ├── Fusion (channel boosts + mean merge + deterministic ranking)
//! ├── Insights (popular patterns, pitfalls, perf, accessibility)
//! └── Recommendations (fixed lookup tables)
//! ```

pub mod fusion;
pub mod synthesis;

pub use fusion::{fuse, fuse_default};
pub use synthesis::ContextSynthesizer;
