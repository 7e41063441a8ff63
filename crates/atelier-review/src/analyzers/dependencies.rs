//! Dependency hygiene analyzer — heavyweight or legacy imports.

use atelier_core::model::{Issue, Priority, Severity, Suggestion, SuggestionCategory};

use super::{Analyzer, AnalyzerCategory, ArtifactView, SectionReport};

pub struct DependencyAnalyzer;

impl Analyzer for DependencyAnalyzer {
    fn id(&self) -> &'static str {
        "dependencies-base"
    }

    fn category(&self) -> AnalyzerCategory {
        AnalyzerCategory::Dependencies
    }

    fn analyze(&self, view: &ArtifactView) -> SectionReport {
        let mut report = SectionReport::default();

        for (index, line) in view.lines.iter().enumerate() {
            let line_no = (index + 1) as u32;
            let trimmed = line.trim_start();
            if !trimmed.starts_with("import") && !trimmed.contains("require(") {
                continue;
            }
            let lower = trimmed.to_lowercase();

            if imports_package(&lower, "moment") {
                report.suggestions.push(Suggestion::new(
                    SuggestionCategory::Performance,
                    "Prefer date-fns or the platform Intl API over moment",
                    Priority::Medium,
                ));
            }

            if imports_package(&lower, "lodash") {
                report.suggestions.push(Suggestion::new(
                    SuggestionCategory::Performance,
                    "Import lodash methods individually to keep the bundle lean",
                    Priority::Medium,
                ));
            }

            if imports_package(&lower, "jquery") {
                report.issues.push(
                    Issue::new(
                        Severity::Warning,
                        "Direct DOM library import inside a component",
                    )
                    .at_line(line_no),
                );
            }

            if lower.contains("../../../") {
                report.issues.push(
                    Issue::new(
                        Severity::Info,
                        "Deep relative import suggests a missing module boundary",
                    )
                    .at_line(line_no),
                );
            }
        }

        report
    }
}

/// Whole-package import, not a scoped sub-path like `lodash/debounce`.
fn imports_package(lower_line: &str, package: &str) -> bool {
    ["'", "\""].iter().any(|quote| {
        lower_line.contains(&format!("{quote}{package}{quote}"))
    })
}
