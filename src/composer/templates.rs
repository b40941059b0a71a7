//! Per-intent response templates
//!
//! Each renderer turns a ranked document list into markdown. Truncation counts
//! characters, not bytes, so multi-byte text is never split mid-character.

use super::synthesis::synthesize;
use crate::config::ResponseConfig;
use crate::types::Document;

/// Content stems that mark a document as carrying strategy guidance.
const STRATEGY_STEMS: [&str; 4] = ["strateg", "approach", "method", "implement"];

const IMPLEMENTATION_STEPS: &str = "📋 **Implementation Steps:**\n\
1. Assess current situation and resources\n\
2. Define clear objectives and KPIs\n\
3. Develop detailed action plan\n\
4. Implement pilot program\n\
5. Monitor, evaluate, and scale\n";

const SUCCESS_FACTORS: &str = "✅ **Success Factors:**\n\
• Stakeholder engagement and buy-in\n\
• Adequate resource allocation\n\
• Continuous monitoring and adaptation\n\
• Clear communication and coordination\n";

/// First `max_chars` characters of `text`.
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Relevance score as "9.2" or "9.0".
fn score(value: f64) -> String {
    format!("{:?}", value)
}

pub fn is_strategy_document(doc: &Document) -> bool {
    let content = doc.content.to_lowercase();
    STRATEGY_STEMS.iter().any(|s| content.contains(s))
}

pub fn information(documents: &[Document], config: &ResponseConfig) -> String {
    let mut out = String::from("📚 **Information from Knowledge Base:**\n\n");
    for (i, doc) in documents.iter().enumerate() {
        out.push_str(&format!("**{}. {}**\n", i + 1, doc.title));
        out.push_str(&format!(
            "{}...\n",
            preview(&doc.content, config.information_preview_chars)
        ));
        out.push_str(&format!("*Source: {}*\n\n", doc.source));
    }
    out.push_str("🔗 **Key Insights:**\n");
    out.push_str(&synthesize(documents, config.max_key_themes));
    out
}

/// Strategy blocks for documents carrying strategy guidance, then the
/// implementation checklist. The checklist is emitted even when no document
/// qualifies.
pub fn strategy(documents: &[Document], config: &ResponseConfig) -> String {
    let mut out = String::from("🎯 **Strategic Recommendations Based on Best Practices:**\n\n");
    for (i, doc) in documents.iter().filter(|d| is_strategy_document(d)).enumerate() {
        out.push_str(&format!("**Strategy {}: From {}**\n", i + 1, doc.title));
        out.push_str(&format!(
            "{}...\n\n",
            preview(&doc.content, config.strategy_preview_chars)
        ));
    }
    out.push_str(IMPLEMENTATION_STEPS);
    out
}

pub fn solution(query: &str, documents: &[Document], config: &ResponseConfig) -> String {
    let mut out = String::from("🛠️ **Solution Framework:**\n\n");
    out.push_str("**Problem Analysis:**\n");
    out.push_str(&format!("Based on your query about: {}\n\n", query));
    out.push_str("**Evidence-Based Solutions:**\n");
    for (i, doc) in documents.iter().enumerate() {
        out.push_str(&format!("**Solution {}: {}**\n", i + 1, doc.title));
        out.push_str(&format!(
            "• {}...\n",
            preview(&doc.content, config.solution_preview_chars)
        ));
        out.push_str(&format!(
            "• Source reliability: {}/10\n\n",
            score(doc.relevance_score)
        ));
    }
    out.push_str(SUCCESS_FACTORS);
    out
}

/// Full documents, untruncated.
pub fn general(documents: &[Document]) -> String {
    let mut out = String::from("💡 **Knowledge Base Insights:**\n\n");
    for doc in documents {
        out.push_str(&format!("**{}**\n", doc.title));
        out.push_str(&format!("{}\n", doc.content));
        out.push_str(&format!(
            "*Category: {} | Source: {}*\n\n",
            doc.category, doc.source
        ));
    }
    out
}

/// Plain-text context for an external completion API.
pub fn context_block(documents: &[Document]) -> String {
    documents
        .iter()
        .map(|doc| {
            format!(
                "Document: {}\nContent: {}\nSource: {}\nCategory: {}\n",
                doc.title, doc.content, doc.source, doc.category
            )
        })
        .collect::<Vec<_>>()
        .join("\n---\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::seed::seed_documents;

    fn cfg() -> ResponseConfig {
        ResponseConfig::default()
    }

    #[test]
    fn test_preview_counts_chars() {
        assert_eq!(preview("héllo", 2), "hé");
        assert_eq!(preview("abc", 10), "abc");
        assert_eq!(preview("abc", 0), "");
    }

    #[test]
    fn test_score_format() {
        assert_eq!(score(9.0), "9.0");
        assert_eq!(score(9.2), "9.2");
    }

    #[test]
    fn test_strategy_stems() {
        let docs = seed_documents();
        // "Strategies include" and "Key strategies include"
        assert!(is_strategy_document(&docs[2]));
        assert!(is_strategy_document(&docs[6]));
        // "This approach ensures"
        assert!(is_strategy_document(&docs[5]));
        assert!(!is_strategy_document(&docs[0]));
    }

    #[test]
    fn test_information_truncates_to_preview() {
        let docs = seed_documents();
        let out = information(&docs[..1], &cfg());
        let expected: String = docs[0].content.chars().take(200).collect();
        assert!(out.contains(&format!("{expected}...\n*Source: UNWTO Guidelines*")));
        assert!(out.contains("🔗 **Key Insights:**\n"));
    }

    #[test]
    fn test_strategy_checklist_always_present() {
        let docs = seed_documents();
        let out = strategy(&docs[..1], &cfg());
        assert!(!out.contains("**Strategy 1"));
        assert!(out.ends_with("5. Monitor, evaluate, and scale\n"));
    }

    #[test]
    fn test_strategy_numbering_skips_filtered() {
        let docs = seed_documents();
        let picked = vec![docs[0].clone(), docs[2].clone(), docs[6].clone()];
        let out = strategy(&picked, &cfg());
        assert!(out.contains("**Strategy 1: From Green Marketing in Tourism Industry**\n"));
        assert!(out.contains("**Strategy 2: From Carbon Neutral Tourism Strategies**\n"));
        assert!(!out.contains("Strategy 3"));
    }

    #[test]
    fn test_solution_restates_query() {
        let docs = seed_documents();
        let out = solution("fix overtourism", &docs[..2], &cfg());
        assert!(out.contains("Based on your query about: fix overtourism\n\n"));
        assert!(out.contains("• Source reliability: 9.2/10\n\n"));
        assert!(out.contains("**Solution 2: Educational Tourism Best Practices**\n"));
        assert!(out.ends_with("• Clear communication and coordination\n"));
    }

    #[test]
    fn test_general_is_untruncated() {
        let docs = seed_documents();
        let out = general(&docs[..1]);
        assert!(out.contains(&docs[0].content));
        assert!(out.contains("*Category: sustainability | Source: UNWTO Guidelines*"));
    }

    #[test]
    fn test_context_block_separator() {
        let docs = seed_documents();
        let out = context_block(&docs[..2]);
        assert_eq!(out.matches("\n---\n").count(), 1);
        assert!(out.starts_with("Document: Sustainable Tourism Development Guidelines\nContent: "));
        assert!(out.ends_with("Category: education\n"));
    }
}
