//! Property tests for the review invariants: bounded scores, the pass
//! rule, finding order, determinism on arbitrary text.

use proptest::prelude::*;

use atelier_core::config::PASS_THRESHOLD;
use atelier_review::engine::review;
use atelier_review::optimize::optimize;

fn arb_artifact() -> impl Strategy<Value = String> {
    // Mix free-form text with fragments the analyzers key on, joined into
    // a multi-line artifact.
    let fragment = prop_oneof![
        "[a-zA-Z0-9 ={}<>/().;:\"_-]{0,60}",
        Just("var x: any = 1;".to_string()),
        Just("<img src={a} />".to_string()),
        Just("items.map(item => <Row item={item} />)".to_string()),
        Just("<a href={u} target=\"_blank\">x</a>".to_string()),
        Just("console.log(state);".to_string()),
        Just("export const Widget = () => null;".to_string()),
    ];
    prop::collection::vec(fragment, 0..12).prop_map(|lines| lines.join("\n"))
}

fn arb_category() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("button".to_string()),
        Just("form".to_string()),
        Just("data-table".to_string()),
        Just("list".to_string()),
        Just("card".to_string()),
    ]
}

proptest! {
    #[test]
    fn score_is_bounded(artifact in arb_artifact(), category in arb_category()) {
        let verdict = review(&artifact, &category);
        prop_assert!(verdict.score <= 100);
    }

    #[test]
    fn pass_rule_holds(artifact in arb_artifact(), category in arb_category()) {
        let verdict = review(&artifact, &category);
        prop_assert_eq!(
            verdict.passed,
            verdict.score >= PASS_THRESHOLD && verdict.error_count() == 0
        );
    }

    #[test]
    fn findings_are_ordered(artifact in arb_artifact(), category in arb_category()) {
        let verdict = review(&artifact, &category);
        for pair in verdict.issues.windows(2) {
            prop_assert!(pair[0].severity <= pair[1].severity);
        }
        for pair in verdict.suggestions.windows(2) {
            prop_assert!(pair[0].priority <= pair[1].priority);
        }
    }

    #[test]
    fn review_is_deterministic(artifact in arb_artifact(), category in arb_category()) {
        let first = review(&artifact, &category);
        let second = review(&artifact, &category);
        prop_assert_eq!(first.score, second.score);
        prop_assert_eq!(first.issues, second.issues);
        prop_assert_eq!(first.suggestions, second.suggestions);
    }

    #[test]
    fn optimize_reaches_a_fixed_point(
        artifact in arb_artifact(),
        category in arb_category(),
    ) {
        let verdict = review(&artifact, &category);
        let (optimized, _) = optimize(&artifact, &verdict, &category);

        let fresh = review(&optimized, &category);
        let (again, record) = optimize(&optimized, &fresh, &category);

        prop_assert_eq!(again, optimized);
        prop_assert!(record.applied.is_empty());
    }
}
