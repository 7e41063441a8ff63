//! Performance analyzer — render-path allocations, list identity, media
//! loading behavior.

use atelier_core::model::{Issue, Priority, Severity, Suggestion, SuggestionCategory};

use super::{Analyzer, AnalyzerCategory, ArtifactView, SectionReport};

const LIST_CATEGORIES: &[&str] = &["list", "table", "grid", "feed"];

pub struct PerformanceAnalyzer;

impl Analyzer for PerformanceAnalyzer {
    fn id(&self) -> &'static str {
        "performance-base"
    }

    fn category(&self) -> AnalyzerCategory {
        AnalyzerCategory::Performance
    }

    fn analyze(&self, view: &ArtifactView) -> SectionReport {
        let mut report = SectionReport::default();

        for (index, line) in view.lines.iter().enumerate() {
            let line_no = (index + 1) as u32;
            let lower = line.to_lowercase();

            if line.contains("={() =>") || line.contains("={async () =>") {
                report.issues.push(
                    Issue::new(
                        Severity::Warning,
                        "Inline arrow handler allocates on every render",
                    )
                    .at_line(line_no),
                );
            }

            if line.contains("key={index}") || line.contains("key={i}") {
                report.issues.push(
                    Issue::new(Severity::Warning, "Array index used as list key")
                        .at_line(line_no),
                );
            }

            if lower.contains("json.parse(json.stringify(") {
                report.issues.push(
                    Issue::new(Severity::Info, "Stringify round-trip used as deep clone")
                        .at_line(line_no),
                );
            }
        }

        if view.lower.contains("<img") && !view.lower.contains("loading=") {
            report.suggestions.push(Suggestion::new(
                SuggestionCategory::Performance,
                "Add loading=\"lazy\" to offscreen images",
                Priority::Medium,
            ));
        }

        if view.category_matches(LIST_CATEGORIES) && !view.lower.contains("memo") {
            report.suggestions.push(Suggestion::new(
                SuggestionCategory::Performance,
                "Memoize row rendering for large collections",
                Priority::Medium,
            ));
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_handler_warns() {
        let view = ArtifactView::new("<button onClick={() => save()} />", "button");
        let report = PerformanceAnalyzer.analyze(&view);
        assert_eq!(report.issues[0].severity, Severity::Warning);
    }

    #[test]
    fn index_key_warns() {
        let view = ArtifactView::new(
            "items.map((item, index) => <Row key={index} item={item} />)",
            "list",
        );
        let report = PerformanceAnalyzer.analyze(&view);
        assert!(report.issues.iter().any(|i| i.message.contains("index")));
    }

    #[test]
    fn missing_lazy_loading_suggested_once() {
        let view = ArtifactView::new("<img alt=\"a\" src={a} />\n<img alt=\"b\" src={b} />", "gallery");
        let report = PerformanceAnalyzer.analyze(&view);
        assert_eq!(report.suggestions.len(), 1);
        assert_eq!(report.suggestions[0].priority, Priority::Medium);
    }

    #[test]
    fn list_category_without_memo_gets_suggestion() {
        let view = ArtifactView::new("export function Table() {}", "data-table");
        let report = PerformanceAnalyzer.analyze(&view);
        assert!(report
            .suggestions
            .iter()
            .any(|s| s.message.contains("Memoize")));
    }
}
