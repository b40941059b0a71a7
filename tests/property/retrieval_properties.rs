use ecotour_rag::context::{KeywordMatching, KnowledgeStore, Retriever, Vectorizer};
use ecotour_rag::RagEngine;
use proptest::prelude::*;

const VOCAB: &[&str] = &[
    "sustainable", "eco", "green", "carbon", "education", "learning", "culture", "heritage",
    "marketing", "strategy", "digital", "smart", "ai", "community", "local", "visitor",
    "biodiversity", "wildlife", "economic", "xyz123", "random", "the", "of", "what", "how",
];

fn query() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCAB), 0..8).prop_map(|words| words.join(" "))
}

fn matching() -> impl Strategy<Value = KeywordMatching> {
    prop_oneof![Just(KeywordMatching::Substring), Just(KeywordMatching::WordPrefix)]
}

proptest! {
    #[test]
    fn embeddings_are_unit_or_zero(text in ".{0,200}", m in matching()) {
        let v = Vectorizer::new(m).embed(&text);
        prop_assert!(v.is_zero() || (v.norm() - 1.0).abs() < 1e-9, "norm = {}", v.norm());
    }

    #[test]
    fn cosine_stays_in_bounds(a in ".{0,120}", b in query()) {
        let vz = Vectorizer::default();
        let sim = vz.embed(&a).cosine_similarity(&vz.embed(&b));
        prop_assert!((-1.0..=1.0).contains(&sim), "sim = {}", sim);
    }

    #[test]
    fn top_k_is_bounded_by_corpus(q in query(), k in 0usize..15) {
        let store = KnowledgeStore::initialize(Vectorizer::default());
        let docs = Retriever::default().retrieve(&store, &q, k);
        prop_assert_eq!(docs.len(), k.min(store.len()));
    }

    #[test]
    fn ranking_is_deterministic(q in query(), m in matching()) {
        let store = KnowledgeStore::initialize(Vectorizer::new(m));
        let retriever = Retriever::default();
        let first: Vec<String> = retriever.retrieve(&store, &q, 10).into_iter().map(|d| d.id).collect();
        let second: Vec<String> = retriever.retrieve(&store, &q, 10).into_iter().map(|d| d.id).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn boost_keeps_score_within_half_again(q in query()) {
        let store = KnowledgeStore::initialize(Vectorizer::default());
        for row in Retriever::default().rank(&store, &q) {
            prop_assert!(row.base_similarity >= 0.0);
            prop_assert!(row.similarity >= row.base_similarity - 1e-12);
            prop_assert!(row.similarity <= row.base_similarity * 1.5 + 1e-12);
            prop_assert!((0.0..=0.5).contains(&row.category_boost));
        }
    }

    #[test]
    fn ranked_scores_are_non_increasing(q in query()) {
        let store = KnowledgeStore::initialize(Vectorizer::default());
        let rows = Retriever::default().rank(&store, &q);
        for pair in rows.windows(2) {
            prop_assert!(pair[0].similarity >= pair[1].similarity);
        }
    }

    #[test]
    fn cached_retrieval_matches_uncached(q in query()) {
        let engine = RagEngine::with_defaults();
        let cached: Vec<String> = engine.retrieve(&q, 3).into_iter().map(|d| d.id).collect();
        let again: Vec<String> = engine.retrieve(&q, 3).into_iter().map(|d| d.id).collect();
        let uncached: Vec<String> = engine.retrieve_scored(&q, 3).into_iter().map(|r| r.document.id).collect();
        prop_assert_eq!(&cached, &again);
        prop_assert_eq!(&cached, &uncached);
        prop_assert_eq!(engine.stats().total_documents, 10);
    }
}
