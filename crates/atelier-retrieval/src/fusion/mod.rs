//! Hybrid score fusion over the semantic and keyword channels.

use rustc_hash::FxHashMap;
use tracing::debug;

use atelier_core::config::FusionWeights;
use atelier_core::model::{FusedResult, SearchHit};

/// Fuse two independently-scored hit lists into one ranked list.
///
/// Semantic hits seed the merge map with a boosted score. Keyword hits
/// either average into an existing entry (with a tag union) or insert with
/// their own boost. The resulting asymmetry between first-seen-semantic and
/// keyword-only ids is deliberate; it matches the shipped ranking and is
/// preserved as-is.
///
/// Output is sorted by score descending, id ascending on ties, and
/// truncated to `weights.max_results`. Fusion itself never fails: callers
/// substitute an empty list for a failed channel before calling in.
pub fn fuse(
    semantic: &[SearchHit],
    keyword: &[SearchHit],
    weights: &FusionWeights,
) -> Vec<FusedResult> {
    let mut merged: FxHashMap<String, FusedResult> = FxHashMap::default();

    for hit in semantic {
        merged.insert(
            hit.id.clone(),
            FusedResult {
                id: hit.id.clone(),
                score: sanitize(hit.score) * weights.semantic_boost,
                title: hit.title.clone(),
                description: hit.description.clone(),
                tags: hit.tags.clone(),
                attributes: hit.attributes.clone(),
            },
        );
    }

    for hit in keyword {
        let boosted = sanitize(hit.score) * weights.keyword_boost;
        match merged.get_mut(&hit.id) {
            Some(existing) => {
                existing.score = (existing.score + boosted) / 2.0;
                for tag in &hit.tags {
                    if !existing.tags.contains(tag) {
                        existing.tags.push(tag.clone());
                    }
                }
                if existing.title.is_none() {
                    existing.title = hit.title.clone();
                }
                if existing.description.is_none() {
                    existing.description = hit.description.clone();
                }
                for (key, value) in &hit.attributes {
                    existing
                        .attributes
                        .entry(key.clone())
                        .or_insert_with(|| value.clone());
                }
            }
            None => {
                merged.insert(
                    hit.id.clone(),
                    FusedResult {
                        id: hit.id.clone(),
                        score: boosted,
                        title: hit.title.clone(),
                        description: hit.description.clone(),
                        tags: hit.tags.clone(),
                        attributes: hit.attributes.clone(),
                    },
                );
            }
        }
    }

    let mut ranked: Vec<FusedResult> = merged.into_values().collect();
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
    ranked.truncate(weights.max_results);

    debug!(
        semantic = semantic.len(),
        keyword = keyword.len(),
        fused = ranked.len(),
        "fused search channels"
    );
    ranked
}

/// Fuse with the default boost factors.
pub fn fuse_default(semantic: &[SearchHit], keyword: &[SearchHit]) -> Vec<FusedResult> {
    fuse(semantic, keyword, &FusionWeights::default())
}

/// Malformed scores (NaN, infinite, negative) count as zero rather than
/// poisoning the ranking.
fn sanitize(score: f64) -> f64 {
    if score.is_finite() && score > 0.0 {
        score
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::model::HitOrigin;

    fn semantic_hit(id: &str, score: f64) -> SearchHit {
        SearchHit::new(id, score, HitOrigin::Semantic)
    }

    fn keyword_hit(id: &str, score: f64) -> SearchHit {
        SearchHit::new(id, score, HitOrigin::Keyword)
    }

    #[test]
    fn merges_shared_id_with_mean_of_boosted_scores() {
        let fused = fuse_default(
            &[semantic_hit("a", 0.9)],
            &[keyword_hit("a", 0.8), keyword_hit("b", 0.95)],
        );

        assert_eq!(fused.len(), 2);
        // b = 0.95 * 1.1 = 1.045 outranks a = (0.9*1.3 + 0.8*1.1)/2 = 1.025.
        assert_eq!(fused[0].id, "b");
        assert!((fused[0].score - 1.045).abs() < 1e-9);
        assert_eq!(fused[1].id, "a");
        assert!((fused[1].score - 1.025).abs() < 1e-9);
    }

    #[test]
    fn ties_break_by_id_ascending() {
        let fused = fuse_default(
            &[semantic_hit("zeta", 0.5), semantic_hit("alpha", 0.5)],
            &[],
        );
        assert_eq!(fused[0].id, "alpha");
        assert_eq!(fused[1].id, "zeta");
    }

    #[test]
    fn truncates_to_max_results() {
        let semantic: Vec<SearchHit> = (0..40)
            .map(|i| semantic_hit(&format!("id-{i:02}"), 0.9))
            .collect();
        let fused = fuse_default(&semantic, &[]);
        assert_eq!(fused.len(), 20);
    }

    #[test]
    fn keyword_merge_unions_tags() {
        let mut s = semantic_hit("a", 0.9);
        s.tags = vec!["form".into(), "input".into()];
        let mut k = keyword_hit("a", 0.8);
        k.tags = vec!["input".into(), "validation".into()];

        let fused = fuse_default(&[s], &[k]);
        assert_eq!(fused[0].tags, vec!["form", "input", "validation"]);
    }

    #[test]
    fn malformed_scores_count_as_zero() {
        let fused = fuse_default(
            &[semantic_hit("nan", f64::NAN), semantic_hit("neg", -3.0)],
            &[keyword_hit("inf", f64::INFINITY)],
        );
        assert_eq!(fused.len(), 3);
        assert!(fused.iter().all(|r| r.score == 0.0));
    }

    #[test]
    fn empty_inputs_yield_empty_output() {
        assert!(fuse_default(&[], &[]).is_empty());
    }
}
