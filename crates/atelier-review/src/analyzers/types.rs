//! Type-safety analyzer — unchecked dynamic-type annotations, suppressed
//! checks, bare object types.

use once_cell::sync::Lazy;
use regex::Regex;

use atelier_core::model::{Issue, Priority, Severity, Suggestion, SuggestionCategory};

use super::{Analyzer, AnalyzerCategory, ArtifactView, SectionReport};

/// `: any` annotation, not matching longer identifiers like `anyValue`.
pub(crate) static ANY_ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":\s*any\b").expect("static pattern"));

/// `as any` cast.
pub(crate) static ANY_CAST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bas\s+any\b").expect("static pattern"));

static BARE_OBJECT_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":\s*(Object|Function)\b").expect("static pattern"));

pub struct TypeSafetyAnalyzer;

impl Analyzer for TypeSafetyAnalyzer {
    fn id(&self) -> &'static str {
        "types-base"
    }

    fn category(&self) -> AnalyzerCategory {
        AnalyzerCategory::Types
    }

    fn analyze(&self, view: &ArtifactView) -> SectionReport {
        let mut report = SectionReport::default();

        for (index, line) in view.lines.iter().enumerate() {
            let line_no = (index + 1) as u32;

            if ANY_ANNOTATION.is_match(line) {
                let mut issue = Issue::new(
                    Severity::Warning,
                    "Unchecked `any` annotation defeats type checking",
                )
                .at_line(line_no);
                // Single occurrence: the corrected line is unambiguous.
                if ANY_ANNOTATION.find_iter(line).count() == 1 {
                    issue = issue.with_fix(ANY_ANNOTATION.replace(line, ": unknown").into_owned());
                }
                report.issues.push(issue);
            }

            if ANY_CAST.is_match(line) {
                report.issues.push(
                    Issue::new(Severity::Warning, "`as any` cast bypasses the type system")
                        .at_line(line_no),
                );
            }

            if line.contains("@ts-ignore") || line.contains("@ts-nocheck") {
                report
                    .issues
                    .push(Issue::new(Severity::Warning, "Suppressed type check").at_line(line_no));
            }

            if BARE_OBJECT_TYPE.is_match(line) {
                report.issues.push(
                    Issue::new(
                        Severity::Info,
                        "Bare `Object`/`Function` type carries no shape information",
                    )
                    .at_line(line_no),
                );
            }
        }

        if ANY_ANNOTATION.is_match(&view.text) || ANY_CAST.is_match(&view.text) {
            report.suggestions.push(Suggestion::new(
                SuggestionCategory::Enhancement,
                "Replace `any` with a concrete interface or `unknown` plus narrowing",
                Priority::High,
            ));
        }

        report
    }
}
