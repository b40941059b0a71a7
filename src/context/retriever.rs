//! Document ranking
//!
//! Score = cosine(query, document) * (1 + category boost). The boost rewards
//! queries that literally mention a document category's keywords and is
//! capped. Ranking is a stable sort, so equal scores keep insertion order.

use tracing::debug;

use super::knowledge_store::KnowledgeStore;
use super::taxonomy::{boost_keywords, KeywordMatching};
use crate::config::RetrievalConfig;
use crate::types::{Category, Document, RetrievalResult};

#[derive(Debug, Clone, Copy)]
pub struct Retriever {
    matching: KeywordMatching,
    boost_per_match: f64,
    max_boost: f64,
}

impl Default for Retriever {
    fn default() -> Self {
        Self::from_config(&RetrievalConfig::default())
    }
}

impl Retriever {
    pub fn from_config(config: &RetrievalConfig) -> Self {
        Self {
            matching: config.keyword_matching,
            boost_per_match: config.boost_per_match,
            max_boost: config.max_category_boost,
        }
    }

    /// Boost for `category` given an already lower-cased query.
    ///
    /// Counts how many distinct category keywords occur in the query, not how
    /// often each occurs.
    pub fn category_boost(&self, query_lower: &str, category: &Category) -> f64 {
        let matches = boost_keywords(category)
            .iter()
            .filter(|kw| self.matching.contains(query_lower, kw))
            .count();
        (self.boost_per_match * matches as f64).min(self.max_boost)
    }

    /// Every document scored against `query`, best first.
    pub fn rank(&self, store: &KnowledgeStore, query: &str) -> Vec<RetrievalResult> {
        let query_lower = query.to_lowercase();
        let query_vec = store.vectorizer().embed(&query_lower);

        let mut results: Vec<RetrievalResult> = store
            .documents()
            .iter()
            .map(|doc| {
                let base_similarity = store
                    .embedding(&doc.id)
                    .map(|e| query_vec.cosine_similarity(e))
                    .unwrap_or(0.0);
                let category_boost = self.category_boost(&query_lower, &doc.category);
                RetrievalResult {
                    document: doc.clone(),
                    similarity: base_similarity * (1.0 + category_boost),
                    base_similarity,
                    category_boost,
                }
            })
            .collect();

        // sort_by is stable
        results.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

        if let Some(top) = results.first() {
            debug!(
                query = %query,
                top_id = %top.document.id,
                top_score = top.similarity,
                "ranked documents"
            );
        }
        results
    }

    /// Top `top_k` scored rows.
    pub fn retrieve_scored(&self, store: &KnowledgeStore, query: &str, top_k: usize) -> Vec<RetrievalResult> {
        let mut ranked = self.rank(store, query);
        ranked.truncate(top_k);
        ranked
    }

    /// Top `top_k` documents. Returns all of them when the corpus is smaller.
    pub fn retrieve(&self, store: &KnowledgeStore, query: &str, top_k: usize) -> Vec<Document> {
        self.retrieve_scored(store, query, top_k)
            .into_iter()
            .map(|r| r.document)
            .collect()
    }
}
