//! RagEngine - the shareable knowledge engine instance
//!
//! Owns the knowledge store behind a single `RwLock` together with the query
//! caches. Readers hold the read guard while they consult and fill a cache;
//! `add_document` takes the write guard, mutates the store and clears every
//! cache before releasing it. A cached entry can therefore never describe a
//! corpus older than the one it is served against.
//!
//! Construct one instance at startup and share it (`Arc<RagEngine>`) with
//! every caller.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::composer::{self, ResponseComposer};
use crate::config::{defaults, EngineConfig};
use crate::context::{
    KnowledgeResponder, KnowledgeStore, QueryCache, Retriever, TopicLookup, Vectorizer,
};
use crate::error::EngineError;
use crate::types::{
    Document, DocumentSummary, KnowledgeStats, NewDocument, Regulation, RetrievalResult,
    SearchFilters, Trend, TrendAnalysis,
};

type RetrievalKey = (String, usize);

pub struct RagEngine {
    config: EngineConfig,
    store: RwLock<KnowledgeStore>,
    retriever: Retriever,
    composer: ResponseComposer,
    retrieval_cache: QueryCache<RetrievalKey, Vec<Document>>,
    response_cache: QueryCache<RetrievalKey, String>,
    lookup: TopicLookup,
}

impl RagEngine {
    /// Engine over the built-in seed corpus.
    pub fn new(config: EngineConfig) -> Self {
        let store = KnowledgeStore::initialize(Vectorizer::new(config.retrieval.keyword_matching));
        Self::with_store(config, store)
    }

    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default())
    }

    /// Engine over a caller-built store, e.g. a custom corpus in tests.
    pub fn with_store(config: EngineConfig, store: KnowledgeStore) -> Self {
        let stats = store.stats();
        info!(
            documents = stats.total_documents,
            regulations = stats.total_regulations,
            trends = stats.total_trends,
            matching = config.retrieval.keyword_matching.as_str(),
            cache = config.cache.enabled,
            "Knowledge engine initialized"
        );
        Self {
            retriever: Retriever::from_config(&config.retrieval),
            composer: ResponseComposer::new(config.response.clone()),
            retrieval_cache: QueryCache::new("retrieval", &config.cache),
            response_cache: QueryCache::new("response", &config.cache),
            lookup: TopicLookup::new(&config.cache),
            store: RwLock::new(store),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn read(&self) -> RwLockReadGuard<'_, KnowledgeStore> {
        self.store.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, KnowledgeStore> {
        self.store.write().unwrap_or_else(|e| e.into_inner())
    }

    // ========================================================================
    // Retrieval
    // ========================================================================

    fn retrieve_locked(&self, store: &KnowledgeStore, query: &str, top_k: usize) -> Vec<Document> {
        let key = (query.to_string(), top_k);
        if let Some(hit) = self.retrieval_cache.get(&key) {
            return hit;
        }
        let docs = self.retriever.retrieve(store, query, top_k);
        self.retrieval_cache.insert(key, docs.clone());
        docs
    }

    /// Top `top_k` documents for `query`, memoized by exact `(query, top_k)`.
    pub fn retrieve(&self, query: &str, top_k: usize) -> Vec<Document> {
        let store = self.read();
        self.retrieve_locked(&store, query, top_k)
    }

    /// Same ranking as `retrieve`, with scores. Not cached.
    pub fn retrieve_scored(&self, query: &str, top_k: usize) -> Vec<RetrievalResult> {
        let store = self.read();
        self.retriever.retrieve_scored(&store, query, top_k)
    }

    /// Rank the search pool, then keep documents matching every filter.
    pub fn semantic_search(&self, query: &str, filters: &SearchFilters) -> Vec<Document> {
        let pool = self.retrieve(query, self.config.retrieval.search_pool_size);
        pool.into_iter().filter(|d| filters.matches(d)).collect()
    }

    // ========================================================================
    // Responses
    // ========================================================================

    /// Intent-shaped markdown answer built from the top documents.
    pub fn compose(&self, query: &str) -> String {
        let top_k = self.config.retrieval.default_top_k;
        let store = self.read();
        let key = (query.to_string(), top_k);
        if let Some(hit) = self.response_cache.get(&key) {
            return hit;
        }
        let docs = self.retrieve_locked(&store, query, top_k);
        let response = self.composer.compose(query, &docs);
        self.response_cache.insert(key, response.clone());
        response
    }

    /// Lightweight topic lookup answer.
    pub fn query_knowledge(&self, query: &str) -> String {
        self.lookup.query_knowledge(query)
    }

    /// Retrieved documents as a plain-text context block.
    pub fn build_context(&self, query: &str) -> String {
        let docs = self.retrieve(query, self.config.retrieval.default_top_k);
        composer::context_block(&docs)
    }

    // ========================================================================
    // Corpus
    // ========================================================================

    /// Append a document dated today and invalidate every cache.
    pub fn add_document(&self, document: NewDocument) -> Result<String, EngineError> {
        self.add_document_dated(document, Local::now().date_naive())
    }

    /// `add_document` with an explicit date.
    pub fn add_document_dated(&self, document: NewDocument, today: NaiveDate) -> Result<String, EngineError> {
        let mut store = self.write();
        let category = document.category.clone();
        let id = store.add_document(document, today)?;
        self.retrieval_cache.clear();
        self.response_cache.clear();
        self.lookup.clear_cache();
        info!(
            id = %id,
            category = %category.map(|c| c.to_string()).unwrap_or_default(),
            total = store.len(),
            "Document added, caches cleared"
        );
        Ok(id)
    }

    pub fn get_document(&self, id: &str) -> Option<Document> {
        self.read().document(id).cloned()
    }

    pub fn document_summary(&self, id: &str) -> Result<DocumentSummary, EngineError> {
        let store = self.read();
        let doc = store
            .document(id)
            .ok_or_else(|| EngineError::DocumentNotFound(id.to_string()))?;

        let content_preview = if doc.content.chars().count() > defaults::SUMMARY_PREVIEW_CHARS {
            format!(
                "{}...",
                composer::templates::preview(&doc.content, defaults::SUMMARY_PREVIEW_CHARS)
            )
        } else {
            doc.content.clone()
        };
        let mut key_topics = composer::common_keywords(&doc.content);
        key_topics.truncate(defaults::SUMMARY_KEY_TOPICS);

        Ok(DocumentSummary {
            id: doc.id.clone(),
            title: doc.title.clone(),
            category: doc.category.clone(),
            source: doc.source.clone(),
            relevance_score: doc.relevance_score,
            last_updated: doc.last_updated,
            word_count: doc.content.split_whitespace().count(),
            key_topics,
            content_preview,
        })
    }

    pub fn stats(&self) -> KnowledgeStats {
        self.read().stats()
    }

    // ========================================================================
    // Reference data
    // ========================================================================

    pub fn search_regulations(&self, query: &str) -> Vec<Regulation> {
        self.read().search_regulations(query)
    }

    pub fn get_trends(&self, query: &str) -> Vec<Trend> {
        self.read().get_trends(query)
    }

    pub fn trend_analysis(&self, query: &str) -> TrendAnalysis {
        let trends = self.get_trends(query);
        debug!(query = %query, matches = trends.len(), "trend analysis");
        let summary = composer::trend_summary(&trends);
        TrendAnalysis { trends, summary }
    }
}

impl KnowledgeResponder for RagEngine {
    fn respond(&self, query: &str) -> String {
        self.compose(query)
    }

    fn responder_name(&self) -> &'static str {
        "RagEngine"
    }

    fn is_healthy(&self) -> bool {
        !self.store.is_poisoned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::NO_INFORMATION;
    use crate::config::CacheConfig;
    use crate::types::Category;

    fn new_policy() -> NewDocument {
        NewDocument::new(
            "New Policy",
            "carbon neutral offset renewable",
            Category::Sustainability,
            8.5,
            "Test",
        )
    }

    #[test]
    fn test_add_document_invalidates_retrieval_cache() {
        let engine = RagEngine::with_defaults();
        let before = engine.retrieve("carbon neutral", 3);
        assert!(before.iter().all(|d| d.id != "doc_011"));

        let id = engine.add_document(new_policy()).unwrap();
        assert_eq!(id, "doc_011");

        let after = engine.retrieve("carbon neutral", 3);
        assert!(after.iter().any(|d| d.id == "doc_011"));
    }

    #[test]
    fn test_add_document_invalidates_response_cache() {
        let engine = RagEngine::with_defaults();
        let before = engine.compose("carbon neutral");
        engine.add_document(new_policy()).unwrap();
        let after = engine.compose("carbon neutral");
        assert_ne!(before, after);
        assert!(after.contains("**New Policy**"));
    }

    #[test]
    fn test_rejected_document_leaves_corpus_unchanged() {
        let engine = RagEngine::with_defaults();
        let mut doc = new_policy();
        doc.relevance_score = Some(11.0);
        let err = engine.add_document(doc).unwrap_err();
        assert!(err.is_malformed_document());
        assert_eq!(engine.stats().total_documents, 10);
    }

    #[test]
    fn test_compose_with_disabled_cache() {
        let mut config = EngineConfig::default();
        config.cache = CacheConfig {
            enabled: false,
            ..CacheConfig::default()
        };
        let engine = RagEngine::new(config);
        let a = engine.compose("green marketing strategy for eco resorts");
        let b = engine.compose("green marketing strategy for eco resorts");
        assert_eq!(a, b);
        assert!(a.contains("Implementation Steps"));
    }

    #[test]
    fn test_empty_corpus_composes_no_information() {
        let engine = RagEngine::with_store(
            EngineConfig::default(),
            KnowledgeStore::empty(Vectorizer::default()),
        );
        assert_eq!(engine.compose("What is eco tourism?"), NO_INFORMATION);
    }

    #[test]
    fn test_semantic_search_filters() {
        let engine = RagEngine::with_defaults();
        let filters = SearchFilters {
            categories: Some(vec![Category::Marketing, Category::Environment]),
            min_relevance: Some(9.1),
            sources: None,
        };
        let docs = engine.semantic_search("green carbon marketing", &filters);
        let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["doc_007"]);
    }

    #[test]
    fn test_document_summary() {
        let engine = RagEngine::with_defaults();
        let summary = engine.document_summary("doc_001").unwrap();
        assert_eq!(summary.title, "Sustainable Tourism Development Guidelines");
        assert_eq!(summary.word_count, 27);
        assert_eq!(summary.key_topics, vec!["environmental"]);
        assert!(summary.content_preview.ends_with("..."));
        assert_eq!(summary.content_preview.chars().count(), 203);

        assert!(matches!(
            engine.document_summary("doc_999"),
            Err(EngineError::DocumentNotFound(_))
        ));
    }

    #[test]
    fn test_trend_analysis() {
        let engine = RagEngine::with_defaults();
        let analysis = engine.trend_analysis("carbon");
        assert_eq!(analysis.trends.len(), 1);
        assert!(analysis.summary.contains("Carbon Footprint Tracking"));

        let none = engine.trend_analysis("zzz");
        assert!(none.trends.is_empty());
        assert_eq!(none.summary, composer::NO_TRENDS);
    }

    #[test]
    fn test_responder_impl() {
        let engine = RagEngine::with_defaults();
        let responder: &dyn KnowledgeResponder = &engine;
        assert_eq!(responder.responder_name(), "RagEngine");
        assert!(responder.is_healthy());
        assert!(!responder.respond("carbon").is_empty());
    }
}
