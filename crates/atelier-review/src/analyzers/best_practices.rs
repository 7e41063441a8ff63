//! Best-practices analyzer — debug artifacts, legacy declarations, loose
//! equality, list identity. Also the place where a malformed artifact is
//! surfaced as a finding instead of a pipeline fault.

use atelier_core::model::{Issue, Severity};

use super::{Analyzer, AnalyzerCategory, ArtifactView, SectionReport};

pub struct BestPracticesAnalyzer;

impl Analyzer for BestPracticesAnalyzer {
    fn id(&self) -> &'static str {
        "best-practices-base"
    }

    fn category(&self) -> AnalyzerCategory {
        AnalyzerCategory::BestPractices
    }

    fn analyze(&self, view: &ArtifactView) -> SectionReport {
        let mut report = SectionReport::default();

        if view.text.trim().is_empty() {
            report
                .issues
                .push(Issue::new(Severity::Warning, "Empty artifact"));
            return report;
        }

        if !balanced_delimiters(&view.text) {
            report.issues.push(Issue::new(
                Severity::Warning,
                "Unbalanced delimiters; artifact may be truncated or malformed",
            ));
        }

        for (index, line) in view.lines.iter().enumerate() {
            let line_no = (index + 1) as u32;
            let trimmed = line.trim_start();

            if line.contains("console.log(") {
                report.issues.push(
                    Issue::new(Severity::Warning, "Debug logging left in component code")
                        .at_line(line_no),
                );
            }

            if trimmed.starts_with("var ") {
                report.issues.push(
                    Issue::new(Severity::Warning, "`var` declaration; use `let` or `const`")
                        .at_line(line_no)
                        .with_fix(line.replacen("var ", "let ", 1)),
                );
            }

            if loose_equality(line) {
                report.issues.push(
                    Issue::new(Severity::Info, "Loose equality; prefer === / !==")
                        .at_line(line_no),
                );
            }

            if trimmed.contains("TODO") || trimmed.contains("FIXME") {
                report.issues.push(
                    Issue::new(Severity::Info, "Unresolved TODO/FIXME marker").at_line(line_no),
                );
            }
        }

        // List renders need a stable identity attribute. Detection is
        // line-granular, matching the rewrite rule's granularity.
        for (index, line) in view.lines.iter().enumerate() {
            if line.contains(".map(") && line.contains("=>") && line.contains('<')
                && !line.contains("key=")
            {
                report.issues.push(
                    Issue::new(
                        Severity::Warning,
                        "List rendering without a stable key attribute",
                    )
                    .at_line((index + 1) as u32),
                );
            }
        }

        report
    }
}

/// Cheap structural sanity check; strings and comments are not parsed.
fn balanced_delimiters(text: &str) -> bool {
    let mut round = 0i64;
    let mut square = 0i64;
    let mut curly = 0i64;
    for ch in text.chars() {
        match ch {
            '(' => round += 1,
            ')' => round -= 1,
            '[' => square += 1,
            ']' => square -= 1,
            '{' => curly += 1,
            '}' => curly -= 1,
            _ => {}
        }
    }
    round == 0 && square == 0 && curly == 0
}

fn loose_equality(line: &str) -> bool {
    (line.contains(" == ") && !line.contains(" === "))
        || (line.contains(" != ") && !line.contains(" !== "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_artifact_is_a_warning_not_a_fault() {
        let view = ArtifactView::new("", "button");
        let report = BestPracticesAnalyzer.analyze(&view);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].severity, Severity::Warning);
    }

    #[test]
    fn unbalanced_delimiters_are_surfaced() {
        let view = ArtifactView::new("function f() { return (", "button");
        let report = BestPracticesAnalyzer.analyze(&view);
        assert!(report
            .issues
            .iter()
            .any(|i| i.message.contains("Unbalanced")));
    }

    #[test]
    fn var_declaration_gets_a_fix() {
        let view = ArtifactView::new("var count = 0;", "counter");
        let report = BestPracticesAnalyzer.analyze(&view);
        assert_eq!(report.issues[0].fix.as_deref(), Some("let count = 0;"));
    }

    #[test]
    fn map_without_key_warns_on_the_offending_line() {
        let view = ArtifactView::new(
            "const rows = items.map(item => <Row item={item} />);",
            "list",
        );
        let report = BestPracticesAnalyzer.analyze(&view);
        let issue = report
            .issues
            .iter()
            .find(|i| i.message.contains("stable key"))
            .unwrap();
        assert_eq!(issue.line, Some(1));
    }

    #[test]
    fn map_with_key_is_clean() {
        let view = ArtifactView::new(
            "const rows = items.map(item => <Row key={item.id} item={item} />);",
            "list",
        );
        let report = BestPracticesAnalyzer.analyze(&view);
        assert!(!report.issues.iter().any(|i| i.message.contains("key")));
    }
}
