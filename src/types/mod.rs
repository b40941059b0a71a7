//! Shared data structures for the tourism knowledge engine
//!
//! - `Document` / `Category` / `NewDocument`: the retrievable corpus
//! - `Regulation` / `Trend`: read-only reference data
//! - `RetrievalResult`, `KnowledgeStats`, `SearchFilters`, `DocumentSummary`:
//!   per-query outputs and diagnostics

mod document;
mod reference;
mod retrieval;

pub use document::*;
pub use reference::*;
pub use retrieval::*;
