//! End-to-end review tests over realistic artifacts.

use atelier_core::model::{Priority, Severity, SuggestionCategory};
use atelier_review::engine::review;

#[test]
fn flawed_artifact_collects_findings_across_analyzers() {
    let artifact = "const data: any = load();\n<img src={avatar} />\n";
    let verdict = review(artifact, "card");

    // The missing alt text is an accessibility error with a mechanical fix.
    let alt_error = verdict
        .issues
        .iter()
        .find(|i| i.severity == Severity::Error && i.message.contains("alt text"))
        .unwrap();
    assert_eq!(alt_error.line, Some(2));
    assert_eq!(
        alt_error.fix.as_deref(),
        Some("<img alt=\"\" src={avatar} />")
    );

    // The unchecked annotation surfaces as a warning plus a High-priority
    // type-safety suggestion.
    assert!(verdict
        .issues
        .iter()
        .any(|i| i.severity == Severity::Warning && i.message.contains("`any`")));
    assert!(verdict
        .suggestions
        .iter()
        .any(|s| s.priority == Priority::High && s.message.contains("`any`")));

    assert!(verdict.score < 100);
    assert!(!verdict.passed);
    assert!(verdict.auto_fix_available);
}

#[test]
fn clean_artifact_scores_full_and_passes() {
    let verdict = review("export const Button = () => null;\n", "button");
    assert_eq!(verdict.score, 100);
    assert!(verdict.passed);
    assert!(verdict.issues.is_empty());
    assert!(!verdict.auto_fix_available);
}

#[test]
fn issues_are_ordered_most_severe_first() {
    let artifact = concat!(
        "if (a == b) { render(); }\n",                // Info: loose equality
        "var legacy = 1;\n",                          // Warning: var
        "<div dangerouslySetInnerHTML={{__html: raw}} />\n", // Error: sink
    );
    let verdict = review(artifact, "card");

    let severities: Vec<Severity> = verdict.issues.iter().map(|i| i.severity).collect();
    let mut sorted = severities.clone();
    sorted.sort();
    assert_eq!(severities, sorted);
    assert_eq!(severities.first(), Some(&Severity::Error));
}

#[test]
fn suggestions_are_ordered_most_urgent_first() {
    // High from security, Medium from performance, Low from styling.
    let artifact = concat!(
        "const token = \"abcd1234efgh5678\";\n",
        "<img alt=\"a\" src={a} />\n",
        "const a = \"#fff\"; const b = \"#000\"; const c = \"#111\";\n",
    );
    let verdict = review(artifact, "card");

    let priorities: Vec<Priority> = verdict.suggestions.iter().map(|s| s.priority).collect();
    let mut sorted = priorities.clone();
    sorted.sort();
    assert_eq!(priorities, sorted);
}

#[test]
fn empty_artifact_is_reviewed_not_rejected() {
    let verdict = review("", "button");
    assert!(verdict
        .issues
        .iter()
        .any(|i| i.message.contains("Empty artifact")));
    assert!(verdict.score <= 100);
}

#[test]
fn truncated_artifact_is_surfaced_as_a_finding() {
    let verdict = review("export function Card() { return (", "card");
    assert!(verdict
        .issues
        .iter()
        .any(|i| i.message.contains("Unbalanced")));
}

#[test]
fn passing_needs_both_score_and_zero_errors() {
    // One error on an otherwise-clean artifact keeps the score high but
    // must still fail the review.
    let verdict = review("<img src={logo} />\n", "card");
    assert!(verdict.score >= 80);
    assert!(verdict.error_count() > 0);
    assert!(!verdict.passed);
}

#[test]
fn megabyte_scale_garbage_is_reviewed_not_stalled() {
    // ~1 MB of pathological input: every line opens a function body that
    // never closes. The review must stay a linear scan.
    let artifact = "function f() {\n".repeat(70_000);
    let verdict = review(&artifact, "card");

    assert!(verdict.score <= 100);
    assert!(verdict
        .issues
        .iter()
        .any(|i| i.message.contains("Unbalanced")));
}

#[test]
fn verdicts_are_deterministic() {
    let artifact = concat!(
        "var a: any = 1;\n",
        "items.map(item => <Row item={item} />)\n",
        "<img src={x} />\n",
    );
    let first = review(artifact, "list");
    let second = review(artifact, "list");

    assert_eq!(first.score, second.score);
    assert_eq!(first.issues, second.issues);
    assert_eq!(first.suggestions, second.suggestions);
}

#[test]
fn suggestion_categories_reflect_their_analyzer() {
    let artifact = "<img alt=\"a\" src={a} />\n";
    let verdict = review(artifact, "photo-list");

    // Missing lazy loading and an unmemoized list category both come from
    // the performance analyzer.
    assert!(verdict
        .suggestions
        .iter()
        .all(|s| s.category == SuggestionCategory::Performance));
    assert_eq!(verdict.suggestions.len(), 2);
}
