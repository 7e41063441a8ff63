//! Context synthesis: provider fan-out, fusion, insight and
//! recommendation derivation.

pub mod insights;
pub mod recommendations;

use std::thread;

use tracing::{debug, warn};

use atelier_core::config::{FusionWeights, SynthesisLimits};
use atelier_core::errors::{AtelierError, AtelierResult};
use atelier_core::model::{ComponentRequest, ContextBundle, Insight, Recommendation};
use atelier_core::traits::{
    DocumentationProvider, KeywordSearchProvider, KnowledgeProvider, SemanticSearchProvider,
    TemplateProvider,
};

use crate::fusion;

/// Per-channel candidate limit when the request does not carry one.
const DEFAULT_SEARCH_LIMIT: usize = 20;

const PROVIDER_COUNT: usize = 5;

/// Builds the evidence bundle for one generation request.
///
/// All five providers are queried concurrently; a failing provider degrades
/// to an empty section rather than aborting the build. The only error
/// surfaced is [`AtelierError::InsufficientContext`], when every provider
/// failed and there is nothing to build from.
pub struct ContextSynthesizer<'a> {
    semantic: &'a dyn SemanticSearchProvider,
    keyword: &'a dyn KeywordSearchProvider,
    knowledge: &'a dyn KnowledgeProvider,
    templates: &'a dyn TemplateProvider,
    docs: &'a dyn DocumentationProvider,
    weights: FusionWeights,
    limits: SynthesisLimits,
}

impl<'a> ContextSynthesizer<'a> {
    pub fn new(
        semantic: &'a dyn SemanticSearchProvider,
        keyword: &'a dyn KeywordSearchProvider,
        knowledge: &'a dyn KnowledgeProvider,
        templates: &'a dyn TemplateProvider,
        docs: &'a dyn DocumentationProvider,
    ) -> Self {
        Self {
            semantic,
            keyword,
            knowledge,
            templates,
            docs,
            weights: FusionWeights::default(),
            limits: SynthesisLimits::default(),
        }
    }

    pub fn with_weights(mut self, weights: FusionWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_limits(mut self, limits: SynthesisLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Gather evidence from every provider, fuse the search channels, and
    /// derive insights and recommendations.
    ///
    /// Given identical provider responses the output is identical: the
    /// fan-out join is followed by a single-threaded aggregation step, so
    /// scheduling cannot reorder anything observable.
    pub fn build_context(
        &self,
        request: &ComponentRequest,
    ) -> AtelierResult<(ContextBundle, Vec<Insight>, Vec<Recommendation>)> {
        let limit = request.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);

        // Fan out: five independent calls, wait for all, no sibling
        // cancellation. Each failure degrades to that provider's empty
        // value.
        let mut failures = 0usize;
        let (semantic_hits, keyword_hits, knowledge, templates, docs) = thread::scope(|s| {
            let semantic =
                s.spawn(|| self.semantic.search(&request.query, &request.filters, limit));
            let keyword = s.spawn(|| self.keyword.search(&request.query, &request.filters, limit));
            let knowledge = s.spawn(|| {
                self.knowledge
                    .find_related(&request.category, &request.framework)
            });
            let templates = s.spawn(|| {
                self.templates
                    .find_templates(&request.category, &request.framework)
            });
            let docs = s.spawn(|| self.docs.fetch(&request.framework, &request.category));

            (
                settle("semantic-search", semantic.join(), &mut failures),
                settle("keyword-search", keyword.join(), &mut failures),
                settle("knowledge", knowledge.join(), &mut failures),
                settle("templates", templates.join(), &mut failures),
                settle("documentation", docs.join(), &mut failures),
            )
        });

        if failures == PROVIDER_COUNT {
            return Err(AtelierError::InsufficientContext);
        }

        let fused = fusion::fuse(&semantic_hits, &keyword_hits, &self.weights);

        let bundle = ContextBundle {
            knowledge,
            fusion: fused,
            templates,
            docs,
        };

        let insights = insights::derive(&bundle, &self.limits);
        let recommendations = recommendations::derive(&insights);
        debug!(
            fusion = bundle.fusion.len(),
            records = bundle.knowledge.records.len(),
            templates = bundle.templates.len(),
            docs = bundle.docs.len(),
            insights = insights.len(),
            recommendations = recommendations.len(),
            "context bundle built"
        );

        Ok((bundle, insights, recommendations))
    }
}

/// Unwrap one settled provider task, degrading failure or panic to the
/// provider's empty value.
fn settle<T: Default>(
    provider: &str,
    joined: thread::Result<AtelierResult<T>>,
    failures: &mut usize,
) -> T {
    match joined {
        Ok(Ok(value)) => value,
        Ok(Err(err)) => {
            warn!(provider, error = %err, "provider degraded to empty result");
            *failures += 1;
            T::default()
        }
        Err(_) => {
            warn!(provider, "provider task panicked; degraded to empty result");
            *failures += 1;
            T::default()
        }
    }
}
