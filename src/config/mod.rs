//! Engine Configuration Module
//!
//! Retrieval, cache and rendering parameters loaded from TOML, with built-in
//! defaults tuned for the built-in seed corpus.
//!
//! ## Loading Order
//!
//! 1. `ECOTOUR_RAG_CONFIG` environment variable (path to TOML file)
//! 2. `rag_config.toml` in the current working directory
//! 3. Built-in defaults
//!
//! ## Usage
//!
//! The config is passed by value to `RagEngine::new`; there is no global:
//!
//! ```ignore
//! let engine = RagEngine::new(EngineConfig::load());
//! ```

mod engine_config;
pub mod defaults;
pub mod validation;

pub use engine_config::*;
pub use validation::ValidationWarning;
