//! Insight derivation from a context bundle. Everything here is
//! deterministic: frequency ranking with first-seen tie order, fixed
//! needle tables for technique detection.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use atelier_core::config::SynthesisLimits;
use atelier_core::model::{ContextBundle, Insight, InsightKind};

/// Performance techniques detected in template code: (needle, reported name).
const PERF_TECHNIQUES: &[(&str, &str)] = &[
    ("memo(", "memoization"),
    ("usememo", "memoization"),
    ("usecallback", "callback memoization"),
    ("lazy(", "lazy loading"),
    ("loading=\"lazy\"", "lazy loading"),
    ("virtualiz", "list virtualization"),
    ("import(", "code splitting"),
    ("debounce", "debouncing"),
    ("throttle", "throttling"),
];

/// Accessibility markers looked for in highly-rated knowledge records.
const A11Y_MARKERS: &[(&str, &str)] = &[
    ("aria-", "ARIA attributes"),
    ("role=", "semantic roles"),
    ("alt text", "alternative text"),
    ("alt=", "alternative text"),
    ("keyboard", "keyboard navigation"),
    ("focus", "focus management"),
    ("contrast", "color contrast"),
    ("screen reader", "screen reader support"),
];

/// Pitfall heuristics emitted when the fused ranking contains weak matches.
const WEAK_MATCH_PITFALLS: &[&str] = &[
    "Low-relevance matches in retrieved evidence; verify against the component requirements",
    "Sparse catalog coverage for this query; generated structure may need manual review",
];

static PERF_AUTOMATON: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::new(PERF_TECHNIQUES.iter().map(|(needle, _)| needle))
        .expect("static needle set")
});

static A11Y_AUTOMATON: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::new(A11Y_MARKERS.iter().map(|(needle, _)| needle)).expect("static needle set")
});

/// Derive all insight kinds from a bundle, in fixed kind order.
pub fn derive(bundle: &ContextBundle, limits: &SynthesisLimits) -> Vec<Insight> {
    let mut insights = Vec::new();
    popular_patterns(bundle, limits, &mut insights);
    pitfalls(bundle, limits, &mut insights);
    perf_optimizations(bundle, &mut insights);
    accessibility_features(bundle, limits, &mut insights);
    insights
}

/// Frequency-ranked tags across retrieved knowledge records; ties keep
/// first-seen order. Capped to bound downstream prompt size.
fn popular_patterns(bundle: &ContextBundle, limits: &SynthesisLimits, out: &mut Vec<Insight>) {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    let mut first_seen: Vec<&str> = Vec::new();

    for record in &bundle.knowledge.records {
        for tag in &record.tags {
            let count = counts.entry(tag.as_str()).or_insert(0);
            if *count == 0 {
                first_seen.push(tag.as_str());
            }
            *count += 1;
        }
    }

    // Stable sort over insertion order: equal counts keep first-seen order.
    let mut ranked = first_seen;
    ranked.sort_by(|a, b| counts[b].cmp(&counts[a]));

    for tag in ranked.into_iter().take(limits.popular_pattern_cap) {
        out.push(Insight::new(InsightKind::PopularPattern, tag));
    }
}

/// Weak fused matches hint that the catalog does not cover the query well.
fn pitfalls(bundle: &ContextBundle, limits: &SynthesisLimits, out: &mut Vec<Insight>) {
    let weak = bundle
        .fusion
        .iter()
        .filter(|r| r.score < limits.pitfall_score_floor)
        .count();
    if weak > 0 {
        for message in WEAK_MATCH_PITFALLS {
            out.push(Insight::new(InsightKind::Pitfall, *message));
        }
    }
}

fn perf_optimizations(bundle: &ContextBundle, out: &mut Vec<Insight>) {
    let techniques = detect(
        &PERF_AUTOMATON,
        PERF_TECHNIQUES,
        bundle.templates.iter().map(|t| t.code.to_lowercase()),
    );
    for name in techniques {
        out.push(Insight::new(InsightKind::PerfOptimization, name));
    }
}

/// Same detection technique as performance, restricted to knowledge
/// records whose rating clears the configured floor.
fn accessibility_features(bundle: &ContextBundle, limits: &SynthesisLimits, out: &mut Vec<Insight>) {
    let features = detect(
        &A11Y_AUTOMATON,
        A11Y_MARKERS,
        bundle
            .knowledge
            .records
            .iter()
            .filter(|r| r.rating >= limits.accessibility_rating_floor)
            .map(|r| {
                format!("{} {} {}", r.name, r.description, r.tags.join(" ")).to_lowercase()
            }),
    );
    for name in features {
        out.push(Insight::new(InsightKind::AccessibilityFeature, name));
    }
}

/// Run the automaton over each haystack and report the matched names once
/// each, in table order.
fn detect(
    automaton: &AhoCorasick,
    table: &[(&str, &'static str)],
    haystacks: impl Iterator<Item = String>,
) -> Vec<&'static str> {
    let mut hit = vec![false; table.len()];
    for text in haystacks {
        for m in automaton.find_iter(&text) {
            hit[m.pattern().as_usize()] = true;
        }
    }

    let mut names: Vec<&'static str> = Vec::new();
    for (index, matched) in hit.iter().enumerate() {
        if *matched {
            let name = table[index].1;
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}
