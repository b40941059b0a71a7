//! Knowledge Responder trait
//!
//! The interface a hosting application consumes: free-text query in,
//! rendered markdown out. Two implementations can be swapped:
//! - `RagEngine`: ranked document retrieval with intent-shaped responses
//! - `TopicLookup`: literal topic lookup over a small tips table

use super::topic_lookup::TopicLookup;

/// Every implementation must be thread-safe (Send + Sync) since the HTTP
/// server shares one instance across request handlers.
pub trait KnowledgeResponder: Send + Sync {
    /// Answer `query`. Never fails: no match yields a "no information" text.
    fn respond(&self, query: &str) -> String;

    /// Responder name for logging and health checks
    fn responder_name(&self) -> &'static str;

    fn is_healthy(&self) -> bool {
        true
    }
}

impl KnowledgeResponder for TopicLookup {
    fn respond(&self, query: &str) -> String {
        self.query_knowledge(query)
    }

    fn responder_name(&self) -> &'static str {
        "TopicLookup"
    }
}
