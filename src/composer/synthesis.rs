//! Keyword extraction and cross-document synthesis

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::types::Document;

/// Words too common to count as themes.
const STOPWORDS: [&str; 9] = [
    "this", "that", "with", "from", "they", "have", "will", "been", "were",
];

/// Upper bound on the extracted keyword list before display truncation.
const MAX_COMMON_KEYWORDS: usize = 10;

fn word_pattern() -> Option<&'static Regex> {
    static WORD_RE: OnceLock<Option<Regex>> = OnceLock::new();
    WORD_RE
        .get_or_init(|| Regex::new(r"\b[a-zA-Z]{4,}\b").ok())
        .as_ref()
}

/// Words of four or more letters that occur more than once, most frequent
/// first. Ties keep first-appearance order. At most ten are returned.
pub fn common_keywords(text: &str) -> Vec<String> {
    let Some(re) = word_pattern() else {
        return Vec::new();
    };
    let lowered = text.to_lowercase();

    let mut order: Vec<&str> = Vec::new();
    let mut freq: HashMap<&str, usize> = HashMap::new();
    for m in re.find_iter(&lowered) {
        let word = m.as_str();
        if STOPWORDS.contains(&word) {
            continue;
        }
        let count = freq.entry(word).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }

    let mut ranked: Vec<(&str, usize)> = order
        .into_iter()
        .map(|w| (w, freq.get(w).copied().unwrap_or(0)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .take(MAX_COMMON_KEYWORDS)
        .map(|(w, _)| w.to_string())
        .collect()
}

/// Closing "key insights" paragraph for an information response.
pub fn synthesize(documents: &[Document], max_themes: usize) -> String {
    let mut out = String::new();

    let mut categories: Vec<&str> = Vec::new();
    for doc in documents {
        let c = doc.category.as_str();
        if !categories.contains(&c) {
            categories.push(c);
        }
    }
    if categories.len() > 1 {
        out.push_str(&format!(
            "This query spans multiple domains: {}.\n",
            categories.join(", ")
        ));
    }

    let all_content = documents
        .iter()
        .map(|d| d.content.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let themes = common_keywords(&all_content);
    if !themes.is_empty() {
        let shown: Vec<&str> = themes.iter().take(max_themes).map(String::as_str).collect();
        out.push_str(&format!("Key themes include: {}.\n", shown.join(", ")));
    }

    out.push_str(&format!(
        "Based on {} authoritative sources, the evidence suggests integrated approaches work best.",
        documents.len()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::seed::seed_documents;

    #[test]
    fn test_common_keywords_frequency_order() {
        let words = common_keywords("Tourism tourism tourism, carbon carbon, green once. This this this");
        assert_eq!(words, vec!["tourism", "carbon"]);
    }

    #[test]
    fn test_short_words_and_stopwords_ignored() {
        assert!(common_keywords("eco eco eco with with with").is_empty());
    }

    #[test]
    fn test_ties_keep_first_appearance() {
        let words = common_keywords("beta alpha beta alpha");
        assert_eq!(words, vec!["beta", "alpha"]);
    }

    #[test]
    fn test_keywords_capped_at_ten() {
        let text: String = (b'a'..=b'l')
            .map(|c| {
                let w = (c as char).to_string().repeat(4);
                format!("{w} {w} ")
            })
            .collect();
        assert_eq!(common_keywords(&text).len(), 10);
    }

    #[test]
    fn test_synthesis_lists_domains_and_source_count() {
        let docs = seed_documents();
        let out = synthesize(&docs[..3], 5);
        assert!(out.starts_with("This query spans multiple domains: sustainability, education, marketing.\n"));
        assert!(out.ends_with("Based on 3 authoritative sources, the evidence suggests integrated approaches work best."));
    }

    #[test]
    fn test_single_domain_omits_domain_line() {
        let docs = seed_documents();
        let out = synthesize(&docs[..1], 5);
        assert!(!out.contains("multiple domains"));
        assert!(out.contains("Key themes include: environmental."));
    }
}
