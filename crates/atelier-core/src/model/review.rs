//! Review verdict model: severities, issues, suggestions, and the
//! aggregated verdict.

use serde::{Deserialize, Serialize};

use crate::config::PASS_THRESHOLD;

/// Defect severity. Variant order is the aggregation sort order: most
/// severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Improvement priority. Variant order is the aggregation sort order:
/// most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A defect found by exactly one analyzer. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub message: String,
    /// 1-based line of the offending construct, when known.
    pub line: Option<u32>,
    /// Corrected source line for `line`, when a mechanical fix exists.
    pub fix: Option<String>,
}

impl Issue {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            line: None,
            fix: None,
        }
    }

    pub fn at_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }
}

/// Which concern a suggestion improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionCategory {
    Enhancement,
    Performance,
    Accessibility,
    Security,
}

/// An improvement proposed by exactly one analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: SuggestionCategory,
    pub message: String,
    pub priority: Priority,
}

impl Suggestion {
    pub fn new(
        category: SuggestionCategory,
        message: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            category,
            message: message.into(),
            priority,
        }
    }
}

/// Aggregated review outcome for one artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewVerdict {
    /// Rounded mean of the analyzer section scores, 0-100.
    pub score: u8,
    pub passed: bool,
    pub issues: Vec<Issue>,
    pub suggestions: Vec<Suggestion>,
    pub auto_fix_available: bool,
}

impl ReviewVerdict {
    /// Build a verdict, deriving `passed` and `auto_fix_available` so the
    /// pass invariant (`score >= 80` and no Error issues) holds by
    /// construction.
    pub fn new(score: u8, issues: Vec<Issue>, suggestions: Vec<Suggestion>) -> Self {
        let score = score.min(100);
        let has_errors = issues.iter().any(|i| i.severity == Severity::Error);
        let auto_fix_available = issues
            .iter()
            .any(|i| i.fix.as_deref().is_some_and(|f| !f.is_empty()));
        Self {
            score,
            passed: score >= PASS_THRESHOLD && !has_errors,
            issues,
            suggestions,
            auto_fix_available,
        }
    }

    /// Number of Error-severity issues.
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }
}
