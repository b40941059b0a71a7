//! Knowledge Store
//!
//! Owns the corpus: documents with their precomputed embeddings, plus the
//! read-only regulation and trend records. The only mutation is
//! `add_document`, which appends a document and its embedding together so the
//! two collections never drift apart.
//!
//! The store itself is not synchronized. `RagEngine` wraps it in a `RwLock`
//! and clears its caches under the same write guard.

use chrono::NaiveDate;
use statrs::statistics::Statistics;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use super::seed;
use super::vectorizer::{FeatureVector, Vectorizer};
use crate::error::EngineError;
use crate::types::{Document, KnowledgeStats, NewDocument, Regulation, Trend};

#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    documents: Vec<Document>,
    embeddings: HashMap<String, FeatureVector>,
    regulations: Vec<Regulation>,
    trends: Vec<Trend>,
    vectorizer: Vectorizer,
}

impl KnowledgeStore {
    /// Store populated with the built-in seed corpus.
    pub fn initialize(vectorizer: Vectorizer) -> Self {
        Self::with_corpus(
            vectorizer,
            seed::seed_documents(),
            seed::seed_regulations(),
            seed::seed_trends(),
        )
    }

    /// Store populated with a caller-supplied corpus. Embeddings are computed here.
    pub fn with_corpus(
        vectorizer: Vectorizer,
        documents: Vec<Document>,
        regulations: Vec<Regulation>,
        trends: Vec<Trend>,
    ) -> Self {
        let embeddings = documents
            .iter()
            .map(|d| (d.id.clone(), vectorizer.embed(&d.content)))
            .collect();
        Self {
            documents,
            embeddings,
            regulations,
            trends,
            vectorizer,
        }
    }

    pub fn empty(vectorizer: Vectorizer) -> Self {
        Self::with_corpus(vectorizer, Vec::new(), Vec::new(), Vec::new())
    }

    pub fn vectorizer(&self) -> &Vectorizer {
        &self.vectorizer
    }

    /// Documents in insertion order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn document(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn embedding(&self, id: &str) -> Option<&FeatureVector> {
        self.embeddings.get(id)
    }

    pub fn regulations(&self) -> &[Regulation] {
        &self.regulations
    }

    pub fn trends(&self) -> &[Trend] {
        &self.trends
    }

    /// Validate, stamp and append a new document. Returns its id.
    ///
    /// Ids follow `doc_NNN` with `NNN = count + 1`. A custom corpus may already
    /// use that id, in which case the number is bumped until it is free.
    pub fn add_document(&mut self, new: NewDocument, today: NaiveDate) -> Result<String, EngineError> {
        new.validate()?;

        let mut n = self.documents.len() + 1;
        let mut id = format!("doc_{:03}", n);
        while self.embeddings.contains_key(&id) {
            n += 1;
            id = format!("doc_{:03}", n);
        }

        let document = new.into_document(id.clone(), today)?;
        let embedding = self.vectorizer.embed(&document.content);
        self.embeddings.insert(id.clone(), embedding);
        self.documents.push(document);
        debug!(id = %id, total = self.documents.len(), "document appended");
        Ok(id)
    }

    /// Regulations whose title or content contains any query token.
    pub fn search_regulations(&self, query: &str) -> Vec<Regulation> {
        let tokens = query_tokens(query);
        self.regulations
            .iter()
            .filter(|r| {
                let title = r.title.to_lowercase();
                let content = r.content.to_lowercase();
                tokens
                    .iter()
                    .any(|t| title.contains(t.as_str()) || content.contains(t.as_str()))
            })
            .cloned()
            .collect()
    }

    /// Trends matching any query token in their description (all trends for a
    /// blank query), sorted by adoption then projected growth, descending.
    pub fn get_trends(&self, query: &str) -> Vec<Trend> {
        let tokens = query_tokens(query);
        let mut trends: Vec<Trend> = if tokens.is_empty() {
            self.trends.clone()
        } else {
            self.trends
                .iter()
                .filter(|t| {
                    let description = t.description.to_lowercase();
                    tokens.iter().any(|tok| description.contains(tok.as_str()))
                })
                .cloned()
                .collect()
        };
        trends.sort_by(|a, b| {
            b.adoption_rate
                .total_cmp(&a.adoption_rate)
                .then(b.growth_projection.total_cmp(&a.growth_projection))
        });
        trends
    }

    pub fn stats(&self) -> KnowledgeStats {
        let mut categories = BTreeMap::new();
        let mut sources = BTreeMap::new();
        for doc in &self.documents {
            *categories.entry(doc.category.as_str().to_string()).or_insert(0) += 1;
            *sources.entry(doc.source.clone()).or_insert(0) += 1;
        }

        let average_relevance = if self.documents.is_empty() {
            0.0
        } else {
            self.documents.iter().map(|d| d.relevance_score).mean()
        };

        KnowledgeStats {
            total_documents: self.documents.len(),
            categories,
            sources,
            average_relevance,
            last_update: self.documents.iter().map(|d| d.last_updated).max(),
            total_regulations: self.regulations.len(),
            total_trends: self.trends.len(),
        }
    }
}

/// Lower-cased whitespace tokens of a query.
fn query_tokens(query: &str) -> Vec<String> {
    query.to_lowercase().split_whitespace().map(str::to_string).collect()
}
