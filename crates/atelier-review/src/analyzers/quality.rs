//! General code-quality analyzer — line length, nesting depth, repeated
//! literals.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashMap;

use atelier_core::model::{Issue, Priority, Severity, Suggestion, SuggestionCategory};

use super::{Analyzer, AnalyzerCategory, ArtifactView, SectionReport};

const MAX_LINE_LENGTH: usize = 120;
const MAX_NESTING_DEPTH: i64 = 4;
const MAX_FUNCTION_LINES: usize = 50;
const REPEAT_THRESHOLD: usize = 3;

static STRING_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"\\]{4,40})""#).expect("static pattern"));

static NUMERIC_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{2,})\b").expect("static pattern"));

pub struct CodeQualityAnalyzer;

impl Analyzer for CodeQualityAnalyzer {
    fn id(&self) -> &'static str {
        "quality-base"
    }

    fn category(&self) -> AnalyzerCategory {
        AnalyzerCategory::Quality
    }

    fn analyze(&self, view: &ArtifactView) -> SectionReport {
        let mut report = SectionReport::default();

        let long_lines = view
            .lines
            .iter()
            .filter(|l| l.chars().count() > MAX_LINE_LENGTH)
            .count();
        if long_lines > 0 {
            report.issues.push(Issue::new(
                Severity::Info,
                format!("{long_lines} line(s) exceed {MAX_LINE_LENGTH} characters"),
            ));
        }

        let depth = max_nesting_depth(&view.text);
        if depth > MAX_NESTING_DEPTH {
            report.issues.push(Issue::new(
                Severity::Warning,
                format!("Deeply nested logic (brace depth {depth})"),
            ));
        }

        let span = longest_function_span(&view.lines);
        if span > MAX_FUNCTION_LINES {
            report.suggestions.push(Suggestion::new(
                SuggestionCategory::Enhancement,
                format!("Break up long function bodies (longest spans {span} lines)"),
                Priority::Medium,
            ));
        }

        if let Some(literal) = most_repeated(&STRING_LITERAL, &view.text) {
            report.suggestions.push(Suggestion::new(
                SuggestionCategory::Enhancement,
                format!("Extract repeated literal \"{literal}\" into a constant"),
                Priority::Low,
            ));
        }

        if let Some(number) = most_repeated(&NUMERIC_LITERAL, &view.text) {
            report.suggestions.push(Suggestion::new(
                SuggestionCategory::Enhancement,
                format!("Name the repeated magic number {number}"),
                Priority::Low,
            ));
        }

        report
    }
}

fn max_nesting_depth(text: &str) -> i64 {
    let mut depth = 0i64;
    let mut max = 0i64;
    for ch in text.chars() {
        match ch {
            '{' => {
                depth += 1;
                max = max.max(depth);
            }
            '}' => depth -= 1,
            _ => {}
        }
    }
    max
}

/// Line span of the longest brace-balanced body opened on a line that
/// declares a function. Single pass over the artifact: one stack entry per
/// unmatched `{`, tagged with its line when that brace anchors a function
/// body. Unclosed bodies never pop and so do not count; the malformed
/// artifact is surfaced elsewhere.
fn longest_function_span(lines: &[String]) -> usize {
    let mut longest = 0;
    let mut open: Vec<Option<usize>> = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        let mut declares = line.contains("function") || line.contains("=> {");
        for ch in line.chars() {
            match ch {
                '{' => {
                    open.push(declares.then_some(index));
                    declares = false;
                }
                '}' => {
                    if let Some(Some(start)) = open.pop() {
                        longest = longest.max(index - start + 1);
                    }
                }
                _ => {}
            }
        }
    }
    longest
}

/// The first capture repeated at least `REPEAT_THRESHOLD` times, by first
/// occurrence order so the report is deterministic.
fn most_repeated(pattern: &Regex, text: &str) -> Option<String> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    let mut order: Vec<&str> = Vec::new();
    for captures in pattern.captures_iter(text) {
        if let Some(m) = captures.get(1) {
            let count = counts.entry(m.as_str()).or_insert(0);
            if *count == 0 {
                order.push(m.as_str());
            }
            *count += 1;
        }
    }
    order
        .into_iter()
        .find(|value| counts[value] >= REPEAT_THRESHOLD)
        .map(str::to_string)
}
