//! Review engine: parallel analyzer pass, deterministic aggregation.

use rayon::prelude::*;
use tracing::debug;

use atelier_core::config::ScorePenalties;
use atelier_core::model::ReviewVerdict;

use crate::analyzers::{registry, ArtifactView, SectionReport};

/// Run every registered analyzer over the artifact and aggregate one
/// verdict, using the default penalty table.
pub fn review(artifact: &str, declared_category: &str) -> ReviewVerdict {
    review_with_penalties(artifact, declared_category, &ScorePenalties::default())
}

/// Analyzers are pure functions over the shared view and run in parallel;
/// results are collected in registry order and aggregated on one thread,
/// so the verdict is deterministic for deterministic input.
pub fn review_with_penalties(
    artifact: &str,
    declared_category: &str,
    penalties: &ScorePenalties,
) -> ReviewVerdict {
    let view = ArtifactView::new(artifact, declared_category);
    let analyzers = registry();

    let sections: Vec<(u32, SectionReport)> = analyzers
        .par_iter()
        .map(|analyzer| {
            let report = analyzer.analyze(&view);
            (report.score(penalties), report)
        })
        .collect();

    let overall = mean_score(&sections);

    let mut issues = Vec::new();
    let mut suggestions = Vec::new();
    for (_, report) in sections {
        issues.extend(report.issues);
        suggestions.extend(report.suggestions);
    }
    // Stable sorts: within a severity/priority band, registry order and
    // per-analyzer emission order are preserved.
    issues.sort_by_key(|issue| issue.severity);
    suggestions.sort_by_key(|suggestion| suggestion.priority);

    debug!(
        score = overall,
        issues = issues.len(),
        suggestions = suggestions.len(),
        "review aggregated"
    );

    ReviewVerdict::new(overall, issues, suggestions)
}

/// Overall score: rounded mean of the section scores.
fn mean_score(sections: &[(u32, SectionReport)]) -> u8 {
    if sections.is_empty() {
        return 100;
    }
    let total: u32 = sections.iter().map(|(score, _)| *score).sum();
    let mean = (f64::from(total) / sections.len() as f64).round();
    mean.clamp(0.0, 100.0) as u8
}
