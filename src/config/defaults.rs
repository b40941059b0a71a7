//! System-wide default constants.
//!
//! Every `EngineConfig` default comes from here, so an engine built without a
//! config file ranks the seed corpus the same way every time.

// ============================================================================
// Retrieval
// ============================================================================

/// Documents retrieved for `compose`.
pub const DEFAULT_TOP_K: usize = 3;

/// Candidate pool ranked before `semantic_search` applies its filters.
pub const SEARCH_POOL_SIZE: usize = 10;

/// Category boost added per matched category keyword.
pub const BOOST_PER_MATCH: f64 = 0.2;

/// Upper bound on the category boost. Boosted scores stay within 1.5x.
pub const MAX_CATEGORY_BOOST: f64 = 0.5;

// ============================================================================
// Cache
// ============================================================================

/// Entries kept per cache before eviction.
pub const CACHE_MAX_ENTRIES: u64 = 1_000;

/// Entry time-to-live (seconds).
pub const CACHE_TTL_SECS: u64 = 300;

// ============================================================================
// Response rendering
// ============================================================================

/// Content preview length for information responses (characters).
pub const INFORMATION_PREVIEW_CHARS: usize = 200;

/// Content preview length for strategy blocks (characters).
pub const STRATEGY_PREVIEW_CHARS: usize = 150;

/// Content preview length for solution blocks (characters).
pub const SOLUTION_PREVIEW_CHARS: usize = 100;

/// Key themes shown in an information synthesis.
pub const MAX_KEY_THEMES: usize = 5;

/// Content preview length for document summaries (characters).
pub const SUMMARY_PREVIEW_CHARS: usize = 200;

/// Key topics listed in a document summary.
pub const SUMMARY_KEY_TOPICS: usize = 5;

// ============================================================================
// Server
// ============================================================================

pub const SERVER_ADDR: &str = "127.0.0.1:8080";

/// Maximum accepted request body (bytes).
pub const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;
