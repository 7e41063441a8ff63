//! Tuning constants. Named here so ranking and scoring behavior can be
//! tuned without touching the fusion or review logic.

/// Boost factors applied during hybrid fusion.
#[derive(Debug, Clone)]
pub struct FusionWeights {
    /// Multiplier for semantic hits. Semantic matches capture intent rather
    /// than literal terms and are weighted more heavily.
    pub semantic_boost: f64,
    /// Multiplier for keyword hits.
    pub keyword_boost: f64,
    /// Maximum number of fused results returned.
    pub max_results: usize,
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            semantic_boost: 1.3,
            keyword_boost: 1.1,
            max_results: 20,
        }
    }
}

/// Thresholds used when deriving insights from a context bundle.
#[derive(Debug, Clone)]
pub struct SynthesisLimits {
    /// Cap on popular-pattern insights, bounding downstream prompt size.
    pub popular_pattern_cap: usize,
    /// Fused results scoring below this trigger the pitfall heuristics.
    pub pitfall_score_floor: f64,
    /// Only knowledge records rated at or above this contribute
    /// accessibility-feature insights.
    pub accessibility_rating_floor: f64,
}

impl Default for SynthesisLimits {
    fn default() -> Self {
        Self {
            popular_pattern_cap: 10,
            pitfall_score_floor: 0.5,
            accessibility_rating_floor: 4.5,
        }
    }
}

/// Per-finding penalties used by the analyzer section scorers. Sections
/// start at 100 and subtract one penalty per finding, floored at 0.
#[derive(Debug, Clone)]
pub struct ScorePenalties {
    pub issue_error: u32,
    pub issue_warning: u32,
    pub issue_info: u32,
    pub suggestion_high: u32,
    pub suggestion_medium: u32,
    pub suggestion_low: u32,
}

impl Default for ScorePenalties {
    fn default() -> Self {
        Self {
            issue_error: 10,
            issue_warning: 5,
            issue_info: 2,
            suggestion_high: 3,
            suggestion_medium: 2,
            suggestion_low: 1,
        }
    }
}

/// Verdicts at or above this score with no Error issues pass review.
pub const PASS_THRESHOLD: u8 = 80;

/// Advisory score contribution of one applied optimization. The estimate
/// is capped so it never exceeds a perfect score; callers re-review for
/// ground truth.
pub const POINTS_PER_OPTIMIZATION: u8 = 2;
