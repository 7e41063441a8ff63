//! Property tests for the fusion invariants: bounded output, distinct
//! ids, descending order, determinism.

use proptest::prelude::*;

use atelier_core::config::FusionWeights;
use atelier_core::model::{HitOrigin, SearchHit};
use atelier_retrieval::fusion;

fn arb_hit(origin: HitOrigin) -> impl Strategy<Value = SearchHit> {
    // Ids drawn from a small pool so channels overlap often; scores cover
    // the malformed range on purpose.
    (0u32..30, prop_oneof![
        -2.0f64..2.0,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ])
        .prop_map(move |(id, score)| SearchHit::new(format!("id-{id:02}"), score, origin))
}

fn arb_channel(origin: HitOrigin) -> impl Strategy<Value = Vec<SearchHit>> {
    prop::collection::vec(arb_hit(origin), 0..60)
}

proptest! {
    #[test]
    fn output_is_bounded_and_ids_are_distinct(
        semantic in arb_channel(HitOrigin::Semantic),
        keyword in arb_channel(HitOrigin::Keyword),
    ) {
        let weights = FusionWeights::default();
        let fused = fusion::fuse(&semantic, &keyword, &weights);

        prop_assert!(fused.len() <= weights.max_results);

        let mut ids: Vec<&str> = fused.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), fused.len());
    }

    #[test]
    fn scores_descend_and_ties_break_by_id(
        semantic in arb_channel(HitOrigin::Semantic),
        keyword in arb_channel(HitOrigin::Keyword),
    ) {
        let fused = fusion::fuse_default(&semantic, &keyword);
        for pair in fused.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn scores_are_finite_and_non_negative(
        semantic in arb_channel(HitOrigin::Semantic),
        keyword in arb_channel(HitOrigin::Keyword),
    ) {
        let fused = fusion::fuse_default(&semantic, &keyword);
        for result in &fused {
            prop_assert!(result.score.is_finite());
            prop_assert!(result.score >= 0.0);
        }
    }

    #[test]
    fn fusion_is_deterministic(
        semantic in arb_channel(HitOrigin::Semantic),
        keyword in arb_channel(HitOrigin::Keyword),
    ) {
        let first = fusion::fuse_default(&semantic, &keyword);
        let second = fusion::fuse_default(&semantic, &keyword);

        prop_assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            prop_assert_eq!(&a.id, &b.id);
            prop_assert_eq!(a.score, b.score);
        }
    }
}
