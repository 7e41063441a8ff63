//! Provider capability traits. Implementations live with the external
//! collaborators (vector index, keyword index, catalog store, template
//! store, documentation store); the core only ever sees these seams,
//! injected at construction time.

use std::collections::BTreeMap;

use crate::errors::AtelierResult;
use crate::model::{CodeTemplate, DocSection, KnowledgeContext, SearchHit};

/// Embedding-similarity search over the component catalog.
pub trait SemanticSearchProvider: Send + Sync {
    fn search(
        &self,
        query: &str,
        filters: &BTreeMap<String, String>,
        limit: usize,
    ) -> AtelierResult<Vec<SearchHit>>;
}

/// Literal term/field search over the component catalog.
pub trait KeywordSearchProvider: Send + Sync {
    fn search(
        &self,
        query: &str,
        filters: &BTreeMap<String, String>,
        limit: usize,
    ) -> AtelierResult<Vec<SearchHit>>;
}

/// Structured catalog knowledge: records, tags, conventions.
pub trait KnowledgeProvider: Send + Sync {
    fn find_related(&self, category: &str, framework: &str) -> AtelierResult<KnowledgeContext>;
}

/// Code sample lookup by category and framework.
pub trait TemplateProvider: Send + Sync {
    fn find_templates(&self, category: &str, framework: &str)
        -> AtelierResult<Vec<CodeTemplate>>;
}

/// Framework documentation fetch.
pub trait DocumentationProvider: Send + Sync {
    fn fetch(&self, framework: &str, topic: &str) -> AtelierResult<Vec<DocSection>>;
}
