//! Recommendation derivation: fixed lookup tables keyed by insight
//! content. No randomness, no provider calls.

use atelier_core::model::{Insight, InsightKind, Recommendation, RecommendationKind};

/// Popular-pattern categories mapped to suggested features.
const SUGGESTED_FEATURES: &[(&str, &[&str])] = &[
    (
        "form",
        &[
            "inline validation with field-level error messages",
            "disabled submit while a request is pending",
        ],
    ),
    ("table", &["column sorting", "pagination for large datasets"]),
    ("list", &["empty-state placeholder", "incremental loading"]),
    ("modal", &["focus trap while open", "escape-key dismissal"]),
    (
        "button",
        &["loading state with spinner", "disabled state styling"],
    ),
    ("input", &["controlled value with a debounced change handler"]),
    (
        "navigation",
        &["active-route highlighting", "collapsed mobile variant"],
    ),
    ("card", &["skeleton placeholder while loading"]),
];

/// Pitfall content mapped to named anti-patterns.
const PITFALL_ANTIPATTERNS: &[(&str, &str)] = &[
    (
        "low-relevance",
        "Copying weakly-matched evidence verbatim into generated code",
    ),
    (
        "sparse catalog",
        "Inventing component structure without catalog precedent",
    ),
];

/// Anti-patterns appended on every derivation, regardless of findings.
const STANDING_ANTIPATTERNS: &[&str] = &[
    "Defining functions inline in render paths",
    "Manipulating the DOM directly instead of going through component state",
    "Omitting loading and error states",
];

/// Derive recommendations from a set of insights via the fixed tables.
pub fn derive(insights: &[Insight]) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    for insight in insights
        .iter()
        .filter(|i| i.kind == InsightKind::PopularPattern)
    {
        let value = insight.value.to_lowercase();
        for (category, features) in SUGGESTED_FEATURES {
            if value.contains(category) {
                for feature in *features {
                    push_unique(
                        &mut recommendations,
                        RecommendationKind::SuggestedFeature,
                        feature,
                    );
                }
            }
        }
    }

    if insights
        .iter()
        .any(|i| i.kind == InsightKind::PerfOptimization)
    {
        push_unique(
            &mut recommendations,
            RecommendationKind::BestPractice,
            "Apply the performance techniques observed in the retrieved templates",
        );
    }
    if insights
        .iter()
        .any(|i| i.kind == InsightKind::AccessibilityFeature)
    {
        push_unique(
            &mut recommendations,
            RecommendationKind::BestPractice,
            "Carry over the accessibility affordances of highly-rated components",
        );
    }

    for insight in insights.iter().filter(|i| i.kind == InsightKind::Pitfall) {
        let value = insight.value.to_lowercase();
        for (needle, antipattern) in PITFALL_ANTIPATTERNS {
            if value.contains(needle) {
                push_unique(
                    &mut recommendations,
                    RecommendationKind::AntiPattern,
                    antipattern,
                );
            }
        }
    }

    // Appended unconditionally; these recur in generated component code
    // regardless of what the evidence shows.
    for antipattern in STANDING_ANTIPATTERNS {
        push_unique(
            &mut recommendations,
            RecommendationKind::AntiPattern,
            antipattern,
        );
    }

    recommendations
}

fn push_unique(recommendations: &mut Vec<Recommendation>, kind: RecommendationKind, value: &str) {
    if !recommendations
        .iter()
        .any(|r| r.kind == kind && r.value == value)
    {
        recommendations.push(Recommendation::new(kind, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standing_antipatterns_always_present() {
        let recommendations = derive(&[]);
        let antipatterns: Vec<&str> = recommendations
            .iter()
            .filter(|r| r.kind == RecommendationKind::AntiPattern)
            .map(|r| r.value.as_str())
            .collect();
        assert_eq!(antipatterns.len(), 3);
        assert!(antipatterns[0].contains("inline"));
    }

    #[test]
    fn popular_pattern_maps_to_features() {
        let insights = vec![Insight::new(InsightKind::PopularPattern, "form")];
        let recommendations = derive(&insights);
        assert!(recommendations.iter().any(|r| {
            r.kind == RecommendationKind::SuggestedFeature && r.value.contains("inline validation")
        }));
    }

    #[test]
    fn perf_insight_maps_to_best_practice() {
        let insights = vec![Insight::new(InsightKind::PerfOptimization, "memoization")];
        let recommendations = derive(&insights);
        assert!(recommendations
            .iter()
            .any(|r| r.kind == RecommendationKind::BestPractice));
    }

    #[test]
    fn repeated_insights_do_not_duplicate() {
        let insights = vec![
            Insight::new(InsightKind::PopularPattern, "form"),
            Insight::new(InsightKind::PopularPattern, "form layout"),
        ];
        let recommendations = derive(&insights);
        let validation = recommendations
            .iter()
            .filter(|r| r.value.contains("inline validation"))
            .count();
        assert_eq!(validation, 1);
    }
}
