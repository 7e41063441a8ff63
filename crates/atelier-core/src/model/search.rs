//! Search hits and fused results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Which search channel produced a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitOrigin {
    Semantic,
    Keyword,
}

/// A single result from one provider call. Scores are provider-local and
/// normalized to [0, 1] on the provider side; they are not comparable
/// across channels until fused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub score: f64,
    pub origin: HitOrigin,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub attributes: BTreeMap<String, String>,
}

impl SearchHit {
    pub fn new(id: impl Into<String>, score: f64, origin: HitOrigin) -> Self {
        Self {
            id: id.into(),
            score,
            origin,
            title: None,
            description: None,
            tags: Vec::new(),
            attributes: BTreeMap::new(),
        }
    }
}

/// One entry of the fused ranking. Ids are distinct within a fused list;
/// the score is the weighted combination of the channel scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusedResult {
    pub id: String,
    pub score: f64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub attributes: BTreeMap<String, String>,
}
