//! Styling analyzer — inline style objects, specificity hammers,
//! hard-coded colors, mixed styling systems.

use once_cell::sync::Lazy;
use regex::Regex;

use atelier_core::model::{Issue, Priority, Severity, Suggestion, SuggestionCategory};

use super::{Analyzer, AnalyzerCategory, ArtifactView, SectionReport};

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#[0-9a-fA-F]{3,8}\b").expect("static pattern"));

const HEX_COLOR_THRESHOLD: usize = 3;

pub struct StylingAnalyzer;

impl Analyzer for StylingAnalyzer {
    fn id(&self) -> &'static str {
        "styling-base"
    }

    fn category(&self) -> AnalyzerCategory {
        AnalyzerCategory::Styling
    }

    fn analyze(&self, view: &ArtifactView) -> SectionReport {
        let mut report = SectionReport::default();

        for (index, line) in view.lines.iter().enumerate() {
            let line_no = (index + 1) as u32;

            if line.contains("style={{") {
                report.issues.push(
                    Issue::new(
                        Severity::Warning,
                        "Inline style object recreated on every render",
                    )
                    .at_line(line_no),
                );
            }

            if line.contains("!important") {
                report.issues.push(
                    Issue::new(Severity::Info, "Specificity override via !important")
                        .at_line(line_no),
                );
            }
        }

        if HEX_COLOR.find_iter(&view.text).count() >= HEX_COLOR_THRESHOLD {
            report.suggestions.push(Suggestion::new(
                SuggestionCategory::Enhancement,
                "Hoist hard-coded colors into design tokens",
                Priority::Low,
            ));
        }

        if view.lower.contains("styled.") && view.lower.contains("classname=") {
            report.issues.push(Issue::new(
                Severity::Info,
                "Mixed styling systems in one component",
            ));
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_style_object_warns() {
        let view = ArtifactView::new("<div style={{ margin: 4 }} />", "card");
        let report = StylingAnalyzer.analyze(&view);
        assert_eq!(report.issues[0].severity, Severity::Warning);
    }

    #[test]
    fn scattered_hex_colors_suggest_tokens() {
        let view = ArtifactView::new(
            "const a = \"#fff\"; const b = \"#1a2b3c\"; const c = \"#000\";",
            "card",
        );
        let report = StylingAnalyzer.analyze(&view);
        assert_eq!(report.suggestions.len(), 1);
    }

    #[test]
    fn two_colors_stay_quiet() {
        let view = ArtifactView::new("const a = \"#fff\"; const b = \"#000\";", "card");
        let report = StylingAnalyzer.analyze(&view);
        assert!(report.suggestions.is_empty());
    }
}
