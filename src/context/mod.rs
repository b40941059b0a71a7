//! Context module - corpus, embeddings and retrieval
//!
//! Holds the tourism knowledge corpus and everything needed to rank it
//! against a free-text query.
//!
//! ## Retrieval pipeline
//!
//! query -> `Vectorizer::embed` -> cosine against precomputed document
//! embeddings -> category boost -> stable sort -> top-k. Results are memoized
//! in a `QueryCache` owned by the engine.
//!
//! ## KnowledgeResponder trait
//!
//! The `KnowledgeResponder` trait abstracts the query-to-text interface so the
//! host can swap the full engine for the lightweight `TopicLookup`.

pub mod cache;
pub mod knowledge_store;
pub mod responder;
pub mod retriever;
pub mod seed;
pub mod taxonomy;
pub mod topic_lookup;
pub mod vectorizer;

pub use cache::QueryCache;
pub use knowledge_store::KnowledgeStore;
pub use responder::KnowledgeResponder;
pub use retriever::Retriever;
pub use taxonomy::{boost_keywords, KeywordMatching, EMBEDDING_DIMS, EMBEDDING_TAXONOMY};
pub use topic_lookup::{Topic, TopicLookup};
pub use vectorizer::{FeatureVector, Vectorizer};
