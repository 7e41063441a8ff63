//! # atelier-review
//!
//! The quality side of the pipeline: a fixed registry of single-concern
//! analyzers aggregated into one verdict, and a deterministic optimization
//! pass driven by that verdict.
//!
//! ```text
//! ReviewEngine
//! ├── Analyzer registry (8 categories, fixed order)
//! │   ├── types, performance, accessibility, security
//! │   └── best-practices, dependencies, quality, styling
//! └── Aggregation (mean score, stable severity/priority ordering)
//! Optimizer
//! ├── Rewrite rules (ordered, skip-on-ambiguity)
//! ├── Verdict-carried line fixes (re-anchored edits)
//! └── High-priority suggestion rewrites (fixed lookup)
//! ```

pub mod analyzers;
pub mod engine;
pub mod optimize;

pub use engine::review;
pub use optimize::optimize;
