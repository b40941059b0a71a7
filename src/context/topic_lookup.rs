//! Lightweight topic lookup
//!
//! A fixed 4 x 4 table of short operational tips (sustainability, marketing,
//! operations, economics). Matching is literal substring search on query
//! tokens, with no embeddings and no category boost. Used where a cheap,
//! predictable answer is preferred over the ranked document corpus.

use std::collections::HashSet;

use tracing::debug;

use super::cache::QueryCache;
use crate::composer::NO_INFORMATION;
use crate::config::CacheConfig;

/// Number of topics returned per query.
const MAX_TOPICS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub category: &'static str,
    pub key: &'static str,
    pub content: &'static str,
}

const TOPICS: [Topic; 16] = [
    Topic { category: "sustainability", key: "carbon_neutral", content: "Achieve carbon neutrality through renewable energy, efficient transportation, and verified offset programs." },
    Topic { category: "sustainability", key: "waste_management", content: "Implement circular economy principles with 95%+ waste diversion through recycling and composting." },
    Topic { category: "sustainability", key: "water_conservation", content: "Deploy smart water systems with rainwater harvesting and greywater recycling." },
    Topic { category: "sustainability", key: "biodiversity", content: "Protect ecosystems through visitor quotas, habitat restoration, and wildlife corridors." },
    Topic { category: "marketing", key: "green_marketing", content: "Promote eco-credentials through transparent impact reporting and third-party certifications." },
    Topic { category: "marketing", key: "digital_strategy", content: "Leverage social media, influencer partnerships, and virtual experiences for reach." },
    Topic { category: "marketing", key: "community_marketing", content: "Highlight authentic local experiences and community benefit stories." },
    Topic { category: "marketing", key: "educational_focus", content: "Market learning outcomes and skill development opportunities." },
    Topic { category: "operations", key: "visitor_management", content: "Use dynamic pricing and real-time capacity monitoring to manage flow." },
    Topic { category: "operations", key: "staff_training", content: "Comprehensive sustainability and cultural sensitivity training programs." },
    Topic { category: "operations", key: "technology_integration", content: "IoT sensors, mobile apps, and AI analytics for optimization." },
    Topic { category: "operations", key: "partnership_development", content: "Collaborate with local businesses, NGOs, and government agencies." },
    Topic { category: "economics", key: "revenue_optimization", content: "Premium pricing for sustainable experiences with clear value proposition." },
    Topic { category: "economics", key: "cost_reduction", content: "Energy efficiency, waste reduction, and operational automation." },
    Topic { category: "economics", key: "roi_calculation", content: "Track environmental, social, and economic returns on investment." },
    Topic { category: "economics", key: "funding_sources", content: "Green bonds, impact investments, and government sustainability grants." },
];

impl Topic {
    /// "carbon_neutral" -> "Carbon Neutral"
    pub fn title(&self) -> String {
        self.key
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }

    /// `2 * |query ∩ key words| + |query ∩ content words|`
    fn relevance(&self, query_words: &HashSet<&str>) -> usize {
        let key_words: HashSet<&str> = self.key.split('_').collect();
        let content_lower = self.content.to_lowercase();
        let content_words: HashSet<&str> = content_lower.split_whitespace().collect();
        let key_overlap = query_words.intersection(&key_words).count();
        let content_overlap = query_words.intersection(&content_words).count();
        key_overlap * 2 + content_overlap
    }

    fn matches(&self, tokens: &[&str]) -> bool {
        let content_lower = self.content.to_lowercase();
        tokens
            .iter()
            .any(|t| self.key.contains(t) || content_lower.contains(t))
    }
}

pub struct TopicLookup {
    topics: &'static [Topic],
    cache: QueryCache<String, String>,
}

impl TopicLookup {
    pub fn new(cache_config: &CacheConfig) -> Self {
        Self {
            topics: &TOPICS,
            cache: QueryCache::new("topic_lookup", cache_config),
        }
    }

    pub fn topics(&self) -> &[Topic] {
        self.topics
    }

    /// Top matching topics for `query`, best first.
    pub fn matching_topics(&self, query: &str) -> Vec<&Topic> {
        let lowered = query.to_lowercase();
        let tokens: Vec<&str> = lowered.split_whitespace().collect();
        let query_words: HashSet<&str> = tokens.iter().copied().collect();

        let mut scored: Vec<(usize, &Topic)> = self
            .topics
            .iter()
            .filter(|t| t.matches(&tokens))
            .map(|t| (t.relevance(&query_words), t))
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().take(MAX_TOPICS).map(|(_, t)| t).collect()
    }

    /// Formatted answer for `query`, or the no-information message.
    pub fn query_knowledge(&self, query: &str) -> String {
        let key = query.to_string();
        if let Some(hit) = self.cache.get(&key) {
            return hit;
        }

        let topics = self.matching_topics(query);
        debug!(query = %query, matches = topics.len(), "topic lookup");
        let response = render(query, &topics);
        self.cache.insert(key, response.clone());
        response
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

fn render(query: &str, topics: &[&Topic]) -> String {
    if topics.is_empty() {
        return NO_INFORMATION.to_string();
    }
    let mut out = format!("**Knowledge Base Response for: '{}'**\n\n", query);
    for (i, topic) in topics.iter().enumerate() {
        out.push_str(&format!("**{}. {}** ({})\n", i + 1, topic.title(), topic.category));
        out.push_str(topic.content);
        out.push_str("\n\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup() -> TopicLookup {
        TopicLookup::new(&CacheConfig::default())
    }

    #[test]
    fn test_title_case() {
        assert_eq!(TOPICS[0].title(), "Carbon Neutral");
        assert_eq!(TOPICS[14].title(), "Roi Calculation");
    }

    #[test]
    fn test_sustainability_ranking() {
        let l = lookup();
        let keys: Vec<&str> = l.matching_topics("sustainability").iter().map(|t| t.key).collect();
        assert_eq!(keys, vec!["staff_training", "funding_sources"]);
    }

    #[test]
    fn test_key_overlap_outranks_content() {
        let l = lookup();
        let top = l.matching_topics("carbon offset");
        assert_eq!(top[0].key, "carbon_neutral");
    }

    #[test]
    fn test_no_match_returns_fallback() {
        let l = lookup();
        assert_eq!(l.query_knowledge("xyz123 qqq"), NO_INFORMATION);
    }

    #[test]
    fn test_response_format() {
        let l = lookup();
        let out = l.query_knowledge("biodiversity");
        assert!(out.starts_with("**Knowledge Base Response for: 'biodiversity'**\n\n"));
        assert!(out.contains("**1. Biodiversity** (sustainability)\n"));
    }

    #[test]
    fn test_at_most_three_topics() {
        let l = lookup();
        // "and" appears in many contents
        assert_eq!(l.matching_topics("and").len(), 3);
    }

    #[test]
    fn test_cached_response_is_identical() {
        let l = lookup();
        let first = l.query_knowledge("waste");
        let second = l.query_knowledge("waste");
        assert_eq!(first, second);
    }
}
