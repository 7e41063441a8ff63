//! Security analyzer — injection sinks, credential-shaped literals,
//! insecure transport, tab-nabbing.

use once_cell::sync::Lazy;
use regex::Regex;

use atelier_core::model::{Issue, Priority, Severity, Suggestion, SuggestionCategory};

use super::{Analyzer, AnalyzerCategory, ArtifactView, SectionReport};

static CREDENTIAL_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(api[_-]?key|secret|password|token)\s*[:=]\s*["'][A-Za-z0-9_\-]{8,}["']"#)
        .expect("static pattern")
});

pub struct SecurityAnalyzer;

impl Analyzer for SecurityAnalyzer {
    fn id(&self) -> &'static str {
        "security-base"
    }

    fn category(&self) -> AnalyzerCategory {
        AnalyzerCategory::Security
    }

    fn analyze(&self, view: &ArtifactView) -> SectionReport {
        let mut report = SectionReport::default();

        for (index, line) in view.lines.iter().enumerate() {
            let line_no = (index + 1) as u32;
            let lower = line.to_lowercase();

            if line.contains("dangerouslySetInnerHTML") {
                report.issues.push(
                    Issue::new(Severity::Error, "Raw HTML injection sink").at_line(line_no),
                );
            }

            if lower.contains("eval(") || lower.contains("new function(") {
                report.issues.push(
                    Issue::new(Severity::Error, "Dynamic code evaluation").at_line(line_no),
                );
            }

            if CREDENTIAL_LITERAL.is_match(line) {
                report.issues.push(
                    Issue::new(Severity::Error, "Hard-coded credential-shaped literal")
                        .at_line(line_no),
                );
            }

            if lower.contains("http://")
                && !lower.contains("localhost")
                && !lower.contains("127.0.0.1")
            {
                report.issues.push(
                    Issue::new(Severity::Warning, "Unencrypted resource URL").at_line(line_no),
                );
            }

            if line.contains("target=\"_blank\"") && !line.contains("rel=") {
                let fixed = line.replacen(
                    "target=\"_blank\"",
                    "target=\"_blank\" rel=\"noopener noreferrer\"",
                    1,
                );
                report.issues.push(
                    Issue::new(
                        Severity::Warning,
                        "target=\"_blank\" without rel=\"noopener\" enables tab-nabbing",
                    )
                    .at_line(line_no)
                    .with_fix(fixed),
                );
            }
        }

        if !report.issues.is_empty() {
            report.suggestions.push(Suggestion::new(
                SuggestionCategory::Security,
                "Route untrusted values through sanitization before rendering",
                Priority::High,
            ));
        }

        report
    }
}
