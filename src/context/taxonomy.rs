//! Fixed keyword taxonomies
//!
//! Two tables drive retrieval: the five embedding dimensions used by the
//! vectorizer, and the per-category boost lists used by the retriever.
//! Both are matched against lower-cased text.

use serde::{Deserialize, Serialize};

use crate::types::Category;

/// Number of embedding dimensions.
pub const EMBEDDING_DIMS: usize = 5;

/// Embedding dimensions in vector order: (dimension name, keywords).
pub const EMBEDDING_TAXONOMY: [(&str, &[&str]); EMBEDDING_DIMS] = [
    (
        "sustainability",
        &["sustainable", "environment", "green", "eco", "carbon", "renewable"],
    ),
    (
        "education",
        &["education", "learning", "knowledge", "teaching", "academic", "research"],
    ),
    (
        "technology",
        &["technology", "digital", "ai", "smart", "innovation", "data"],
    ),
    (
        "community",
        &["community", "local", "culture", "heritage", "tradition", "social"],
    ),
    (
        "tourism",
        &["tourism", "travel", "visitor", "destination", "experience", "hospitality"],
    ),
];

/// Boost keywords for a document category. `Other` has none.
pub fn boost_keywords(category: &Category) -> &'static [&'static str] {
    match category {
        Category::Sustainability => &["sustainable", "green", "eco", "environment", "carbon", "climate"],
        Category::Education => &["education", "learning", "teach", "student", "academic", "curriculum"],
        Category::Marketing => &["marketing", "promotion", "campaign", "brand", "advertising"],
        Category::Technology => &["technology", "digital", "ai", "smart", "innovation", "app"],
        Category::Heritage => &["heritage", "culture", "history", "tradition", "monument"],
        Category::Community => &["community", "local", "resident", "stakeholder", "participation"],
        Category::Environment => &["environment", "ecosystem", "biodiversity", "conservation"],
        Category::Experience => &["experience", "visitor", "satisfaction", "service", "quality"],
        Category::Digital => &["digital", "online", "virtual", "augmented", "mobile"],
        Category::Conservation => &["conservation", "protection", "preserve", "wildlife", "habitat"],
        Category::Other(_) => &[],
    }
}

/// How a taxonomy keyword is located in text.
///
/// `Substring` matches anywhere, so "ai" also hits "maintain" and "eco" hits
/// "geocoding". `WordPrefix` requires the keyword to start at a word boundary,
/// so "eco" still matches "eco-certification" and "ecosystem" but "ai" no
/// longer matches "maintain".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordMatching {
    #[default]
    Substring,
    WordPrefix,
}

impl KeywordMatching {
    /// Non-overlapping occurrences of `keyword` in `text`.
    pub fn count(self, text: &str, keyword: &str) -> usize {
        if keyword.is_empty() {
            return 0;
        }
        match self {
            KeywordMatching::Substring => text.matches(keyword).count(),
            KeywordMatching::WordPrefix => text
                .match_indices(keyword)
                .filter(|(idx, _)| starts_word(text, *idx))
                .count(),
        }
    }

    pub fn contains(self, text: &str, keyword: &str) -> bool {
        self.count(text, keyword) > 0
    }

    pub fn as_str(self) -> &'static str {
        match self {
            KeywordMatching::Substring => "substring",
            KeywordMatching::WordPrefix => "word_prefix",
        }
    }
}

fn starts_word(text: &str, idx: usize) -> bool {
    text[..idx]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_counts_inside_words() {
        let m = KeywordMatching::Substring;
        assert_eq!(m.count("maintain the ai", "ai"), 3);
        assert_eq!(m.count("economic eco-tourism", "eco"), 2);
        assert!(m.contains("strategies", "strateg"));
    }

    #[test]
    fn test_substring_is_non_overlapping() {
        assert_eq!(KeywordMatching::Substring.count("aaaa", "aa"), 2);
    }

    #[test]
    fn test_word_prefix_requires_boundary() {
        let m = KeywordMatching::WordPrefix;
        assert_eq!(m.count("maintain the ai", "ai"), 1);
        assert_eq!(m.count("geocoding eco-tourism ecosystem", "eco"), 2);
        assert_eq!(m.count("community-based tourism", "tourism"), 1);
        assert_eq!(m.count("ai", "ai"), 1);
    }

    #[test]
    fn test_empty_keyword_never_matches() {
        assert_eq!(KeywordMatching::Substring.count("text", ""), 0);
        assert_eq!(KeywordMatching::WordPrefix.count("text", ""), 0);
    }

    #[test]
    fn test_every_known_category_has_boost_keywords() {
        for category in Category::KNOWN.iter() {
            assert!(!boost_keywords(category).is_empty(), "{category}");
        }
        assert!(boost_keywords(&Category::Other("wellness".into())).is_empty());
    }

    #[test]
    fn test_matching_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            m: KeywordMatching,
        }
        let w: Wrapper = toml::from_str("m = \"word_prefix\"").unwrap();
        assert_eq!(w.m, KeywordMatching::WordPrefix);
        assert_eq!(KeywordMatching::default().as_str(), "substring");
    }
}
