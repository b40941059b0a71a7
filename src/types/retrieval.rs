//! Per-query retrieval outputs and corpus diagnostics

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Category, Document};

/// One scored document for a query. Ephemeral, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetrievalResult {
    pub document: Document,
    /// `base_similarity * (1 + category_boost)`
    pub similarity: f64,
    /// Cosine similarity between query and document embeddings, `[-1, 1]`
    pub base_similarity: f64,
    pub category_boost: f64,
}

/// Corpus summary for admin and diagnostics display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KnowledgeStats {
    pub total_documents: usize,
    pub categories: BTreeMap<String, usize>,
    pub sources: BTreeMap<String, usize>,
    pub average_relevance: f64,
    /// Latest `last_updated` across documents; `None` for an empty corpus
    pub last_update: Option<NaiveDate>,
    pub total_regulations: usize,
    pub total_trends: usize,
}

/// Post-retrieval filters for `semantic_search`. Absent filters match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
    #[serde(default)]
    pub min_relevance: Option<f64>,
    #[serde(default)]
    pub sources: Option<Vec<String>>,
}

impl SearchFilters {
    pub fn matches(&self, doc: &Document) -> bool {
        if let Some(ref categories) = self.categories {
            if !categories.contains(&doc.category) {
                return false;
            }
        }
        if let Some(min) = self.min_relevance {
            if doc.relevance_score < min {
                return false;
            }
        }
        if let Some(ref sources) = self.sources {
            if !sources.iter().any(|s| s == &doc.source) {
                return false;
            }
        }
        true
    }
}

/// Detail view of a single document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentSummary {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub source: String,
    pub relevance_score: f64,
    pub last_updated: NaiveDate,
    pub word_count: usize,
    pub key_topics: Vec<String>,
    pub content_preview: String,
}
