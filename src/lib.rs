//! ecotour-rag: sustainable-tourism knowledge engine
//!
//! Answers free-text questions by ranking a small curated corpus and shaping
//! the top documents into a structured, intent-aware text answer.
//!
//! ## Architecture
//!
//! - **KnowledgeStore**: Documents, regulations and trends with precomputed embeddings
//! - **Vectorizer**: Keyword-count feature vectors over a fixed 5-dimension taxonomy
//! - **Retriever**: Cosine ranking with a category keyword boost
//! - **ResponseComposer**: Intent classification and templated answers
//! - **QueryCache**: Bounded TTL memoization of retrievals and answers
//! - **RagEngine**: Facade tying the above together behind one lock

pub mod api;
pub mod composer;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod types;

pub use composer::{classify_intent, Intent, ResponseComposer, NO_INFORMATION};
pub use config::{ConfigError, EngineConfig};
pub use context::{KnowledgeResponder, KnowledgeStore, Retriever, TopicLookup, Vectorizer};
pub use engine::RagEngine;
pub use error::EngineError;

pub use types::{
    Category, Document, DocumentSummary, KnowledgeStats, NewDocument, Regulation,
    RetrievalResult, SearchFilters, Trend, TrendAnalysis,
};
