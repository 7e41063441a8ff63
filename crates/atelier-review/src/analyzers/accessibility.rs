//! Accessibility analyzer — alt text, interactive semantics, label
//! association, keyboard support.

use atelier_core::model::{Issue, Priority, Severity, Suggestion, SuggestionCategory};

use super::{Analyzer, AnalyzerCategory, ArtifactView, SectionReport};

pub struct AccessibilityAnalyzer;

impl Analyzer for AccessibilityAnalyzer {
    fn id(&self) -> &'static str {
        "accessibility-base"
    }

    fn category(&self) -> AnalyzerCategory {
        AnalyzerCategory::Accessibility
    }

    fn analyze(&self, view: &ArtifactView) -> SectionReport {
        let mut report = SectionReport::default();

        for (index, line) in view.lines.iter().enumerate() {
            let line_no = (index + 1) as u32;
            let lower = line.to_lowercase();

            if lower.contains("<img") && !lower.contains("alt=") {
                let mut issue =
                    Issue::new(Severity::Error, "Media tag without descriptive alt text")
                        .at_line(line_no);
                if let Some(position) = line.find("<img") {
                    let mut fixed = line.clone();
                    fixed.insert_str(position + "<img".len(), " alt=\"\"");
                    issue = issue.with_fix(fixed);
                }
                report.issues.push(issue);
            }

            if (lower.contains("<div") || lower.contains("<span"))
                && lower.contains("onclick")
                && !lower.contains("role=")
            {
                report.issues.push(
                    Issue::new(
                        Severity::Warning,
                        "Clickable non-semantic element without a role",
                    )
                    .at_line(line_no),
                );
            }

            if lower.contains("<input")
                && !lower.contains("aria-label")
                && !lower.contains("aria-labelledby")
                && !lower.contains("id=")
            {
                report.issues.push(
                    Issue::new(Severity::Warning, "Form input without label association")
                        .at_line(line_no),
                );
            }

            if has_positive_tabindex(&lower) {
                report.issues.push(
                    Issue::new(
                        Severity::Info,
                        "Positive tabindex overrides natural focus order",
                    )
                    .at_line(line_no),
                );
            }
        }

        if view.lower.contains("onclick") && !view.lower.contains("onkey") {
            report.suggestions.push(Suggestion::new(
                SuggestionCategory::Accessibility,
                "Pair click handlers with keyboard handlers for non-pointer users",
                Priority::Medium,
            ));
        }

        report
    }
}

fn has_positive_tabindex(lower: &str) -> bool {
    for quote in ["tabindex=\"", "tabindex='", "tabindex={"] {
        if let Some(position) = lower.find(quote) {
            let value = &lower[position + quote.len()..];
            if let Some(first) = value.chars().next() {
                if first.is_ascii_digit() && first != '0' {
                    return true;
                }
            }
        }
    }
    false
}
