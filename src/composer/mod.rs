//! Response composition
//!
//! Classifies a query's intent and renders retrieved documents into markdown
//! shaped for that intent. The composer is stateless: retrieval and caching
//! live in `RagEngine`.

pub mod synthesis;
pub mod templates;
pub mod trends;

use serde::Serialize;
use tracing::debug;

use crate::config::ResponseConfig;
use crate::types::Document;

pub use synthesis::{common_keywords, synthesize};
pub use templates::context_block;
pub use trends::{market_maturity, trend_summary, NO_TRENDS};

/// Returned in place of a response when retrieval finds nothing.
pub const NO_INFORMATION: &str =
    "I don't have specific information about that topic in my knowledge base.";

const STRATEGY_KEYWORDS: [&str; 6] = ["strategy", "plan", "approach", "method", "implement", "develop"];
const PROBLEM_KEYWORDS: [&str; 6] = ["problem", "issue", "challenge", "solution", "fix", "improve"];
const INFORMATION_KEYWORDS: [&str; 7] = ["what", "how", "why", "when", "where", "explain", "describe"];

/// How a query's response is shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    InformationSeeking,
    StrategyPlanning,
    ProblemSolving,
    General,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::InformationSeeking => "information_seeking",
            Intent::StrategyPlanning => "strategy_planning",
            Intent::ProblemSolving => "problem_solving",
            Intent::General => "general",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Substring keyword rules, checked strategy -> problem -> information.
pub fn classify_intent(query: &str) -> Intent {
    let q = query.to_lowercase();
    let hit = |keywords: &[&str]| keywords.iter().any(|kw| q.contains(kw));
    if hit(&STRATEGY_KEYWORDS) {
        Intent::StrategyPlanning
    } else if hit(&PROBLEM_KEYWORDS) {
        Intent::ProblemSolving
    } else if hit(&INFORMATION_KEYWORDS) {
        Intent::InformationSeeking
    } else {
        Intent::General
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResponseComposer {
    config: ResponseConfig,
}

impl ResponseComposer {
    pub fn new(config: ResponseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResponseConfig {
        &self.config
    }

    /// Render `documents` (already ranked for `query`).
    pub fn compose(&self, query: &str, documents: &[Document]) -> String {
        if documents.is_empty() {
            return NO_INFORMATION.to_string();
        }
        let intent = classify_intent(query);
        debug!(intent = %intent, documents = documents.len(), "composing response");
        match intent {
            Intent::InformationSeeking => templates::information(documents, &self.config),
            Intent::StrategyPlanning => templates::strategy(documents, &self.config),
            Intent::ProblemSolving => templates::solution(query, documents, &self.config),
            Intent::General => templates::general(documents),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::seed::seed_documents;

    #[test]
    fn test_intent_order() {
        assert_eq!(classify_intent("What is eco tourism?"), Intent::InformationSeeking);
        assert_eq!(classify_intent("green marketing strategy"), Intent::StrategyPlanning);
        assert_eq!(classify_intent("how to fix crowding"), Intent::ProblemSolving);
        assert_eq!(classify_intent("carbon credits"), Intent::General);
    }

    #[test]
    fn test_strategy_beats_problem_and_information() {
        assert_eq!(
            classify_intent("What plan will fix this problem?"),
            Intent::StrategyPlanning
        );
    }

    #[test]
    fn test_intent_matches_inside_words() {
        // "development" contains "develop"
        assert_eq!(
            classify_intent("What is sustainable tourism development?"),
            Intent::StrategyPlanning
        );
        // "somewhere" contains "where"
        assert_eq!(classify_intent("somewhere green"), Intent::InformationSeeking);
    }

    #[test]
    fn test_empty_documents_yield_no_information() {
        let composer = ResponseComposer::default();
        assert_eq!(composer.compose("anything", &[]), NO_INFORMATION);
    }

    #[test]
    fn test_dispatch_headers() {
        let composer = ResponseComposer::default();
        let docs = seed_documents();
        assert!(composer
            .compose("describe heritage", &docs[..3])
            .starts_with("📚 **Information from Knowledge Base:**"));
        assert!(composer
            .compose("plan", &docs[..3])
            .starts_with("🎯 **Strategic Recommendations"));
        assert!(composer
            .compose("challenge", &docs[..3])
            .starts_with("🛠️ **Solution Framework:**"));
        assert!(composer
            .compose("carbon", &docs[..3])
            .starts_with("💡 **Knowledge Base Insights:**"));
    }
}
