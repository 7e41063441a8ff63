//! Request and evidence-bundle carriers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::search::FusedResult;

/// A generation request as seen by the context synthesizer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentRequest {
    /// Free-text description of the component to generate.
    pub query: String,
    /// Declared component category ("form", "data-table", ...).
    pub category: String,
    /// Target framework ("react", "vue", ...).
    pub framework: String,
    /// Provider-side filters forwarded to the search channels.
    pub filters: BTreeMap<String, String>,
    /// Per-channel candidate limit override.
    pub limit: Option<usize>,
}

/// One catalog record from the structured-knowledge store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Community rating in [0.0, 5.0].
    pub rating: f64,
    pub usage_count: u64,
}

/// Everything the knowledge provider returns for a category/framework pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeContext {
    pub records: Vec<KnowledgeRecord>,
    /// Project conventions that apply to the category.
    pub conventions: Vec<String>,
}

/// A code sample from the template store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeTemplate {
    pub id: String,
    pub name: String,
    pub framework: String,
    pub code: String,
    pub tags: Vec<String>,
}

/// A fetched documentation excerpt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocSection {
    pub title: String,
    pub content: String,
    pub url: Option<String>,
}

/// Aggregate evidence for one generation request. Built once per request
/// by the synthesizer, read-only afterward.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContextBundle {
    pub knowledge: KnowledgeContext,
    pub fusion: Vec<FusedResult>,
    pub templates: Vec<CodeTemplate>,
    pub docs: Vec<DocSection>,
}
