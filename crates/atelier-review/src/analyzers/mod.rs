//! Analyzer trait, category enum, shared artifact view, section scoring.

pub mod accessibility;
pub mod best_practices;
pub mod dependencies;
pub mod performance;
pub mod quality;
pub mod security;
pub mod styling;
pub mod types;

use atelier_core::config::ScorePenalties;
use atelier_core::model::{Issue, Priority, Severity, Suggestion};

/// The eight analyzer categories, in registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalyzerCategory {
    Types,
    Performance,
    Accessibility,
    Security,
    BestPractices,
    Dependencies,
    Quality,
    Styling,
}

impl AnalyzerCategory {
    pub fn all() -> &'static [AnalyzerCategory] {
        &[
            Self::Types,
            Self::Performance,
            Self::Accessibility,
            Self::Security,
            Self::BestPractices,
            Self::Dependencies,
            Self::Quality,
            Self::Styling,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Types => "types",
            Self::Performance => "performance",
            Self::Accessibility => "accessibility",
            Self::Security => "security",
            Self::BestPractices => "best_practices",
            Self::Dependencies => "dependencies",
            Self::Quality => "quality",
            Self::Styling => "styling",
        }
    }
}

/// Immutable view shared by every analyzer: the raw artifact plus the
/// derived forms the scans need. Built once per review.
pub struct ArtifactView {
    pub text: String,
    pub lower: String,
    pub lines: Vec<String>,
    /// Declared component category, lowercased.
    pub category: String,
}

impl ArtifactView {
    pub fn new(artifact: &str, declared_category: &str) -> Self {
        Self {
            text: artifact.to_string(),
            lower: artifact.to_lowercase(),
            lines: artifact.lines().map(str::to_string).collect(),
            category: declared_category.to_lowercase(),
        }
    }

    /// Whether the declared category contains any of the given terms.
    pub fn category_matches(&self, terms: &[&str]) -> bool {
        terms.iter().any(|t| self.category.contains(t))
    }
}

/// Output of one analyzer pass over one artifact.
#[derive(Debug, Default)]
pub struct SectionReport {
    pub issues: Vec<Issue>,
    pub suggestions: Vec<Suggestion>,
}

impl SectionReport {
    /// Section score: start at 100, subtract one fixed penalty per
    /// finding, floor at 0.
    pub fn score(&self, penalties: &ScorePenalties) -> u32 {
        let mut debit = 0u32;
        for issue in &self.issues {
            debit += match issue.severity {
                Severity::Error => penalties.issue_error,
                Severity::Warning => penalties.issue_warning,
                Severity::Info => penalties.issue_info,
            };
        }
        for suggestion in &self.suggestions {
            debit += match suggestion.priority {
                Priority::High => penalties.suggestion_high,
                Priority::Medium => penalties.suggestion_medium,
                Priority::Low => penalties.suggestion_low,
            };
        }
        100u32.saturating_sub(debit)
    }
}

/// A single-concern pure scan over the shared artifact view. Analyzers
/// never mutate shared state and may run concurrently.
pub trait Analyzer: Send + Sync {
    /// Unique identifier for this analyzer.
    fn id(&self) -> &'static str;

    /// The concern category this analyzer covers.
    fn category(&self) -> AnalyzerCategory;

    /// Scan the artifact and report findings for this category.
    fn analyze(&self, view: &ArtifactView) -> SectionReport;
}

/// The fixed analyzer registry, in aggregation order.
pub fn registry() -> Vec<Box<dyn Analyzer>> {
    vec![
        Box::new(types::TypeSafetyAnalyzer),
        Box::new(performance::PerformanceAnalyzer),
        Box::new(accessibility::AccessibilityAnalyzer),
        Box::new(security::SecurityAnalyzer),
        Box::new(best_practices::BestPracticesAnalyzer),
        Box::new(dependencies::DependencyAnalyzer),
        Box::new(quality::CodeQualityAnalyzer),
        Box::new(styling::StylingAnalyzer),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::model::SuggestionCategory;

    #[test]
    fn registry_covers_every_category_once() {
        let analyzers = registry();
        assert_eq!(analyzers.len(), AnalyzerCategory::all().len());
        for (analyzer, category) in analyzers.iter().zip(AnalyzerCategory::all()) {
            assert_eq!(analyzer.category(), *category);
        }
    }

    #[test]
    fn section_score_floors_at_zero() {
        let mut report = SectionReport::default();
        for _ in 0..20 {
            report.issues.push(Issue::new(Severity::Error, "e"));
        }
        report.suggestions.push(Suggestion::new(
            SuggestionCategory::Enhancement,
            "s",
            Priority::High,
        ));
        assert_eq!(report.score(&ScorePenalties::default()), 0);
    }

    #[test]
    fn section_score_subtracts_per_finding() {
        let mut report = SectionReport::default();
        report.issues.push(Issue::new(Severity::Error, "e"));
        report.issues.push(Issue::new(Severity::Warning, "w"));
        report.issues.push(Issue::new(Severity::Info, "i"));
        report.suggestions.push(Suggestion::new(
            SuggestionCategory::Performance,
            "s",
            Priority::Medium,
        ));
        // 100 - 10 - 5 - 2 - 2
        assert_eq!(report.score(&ScorePenalties::default()), 81);
    }
}
