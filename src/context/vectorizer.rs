//! Keyword-frequency embeddings
//!
//! Maps text to a 5-dimensional unit vector by counting taxonomy keyword
//! occurrences per dimension. Deterministic and pure, so one `Vectorizer`
//! can be shared freely across threads.

use serde::Serialize;

use super::taxonomy::{KeywordMatching, EMBEDDING_DIMS, EMBEDDING_TAXONOMY};

/// Fixed-length embedding. Either unit-length or all zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FeatureVector([f64; EMBEDDING_DIMS]);

impl FeatureVector {
    /// Build from raw counts, normalizing to unit length. All-zero stays zero.
    pub fn from_counts(counts: [f64; EMBEDDING_DIMS]) -> Self {
        let norm = counts.iter().map(|c| c * c).sum::<f64>().sqrt();
        if norm > 0.0 {
            FeatureVector(counts.map(|c| c / norm))
        } else {
            FeatureVector([0.0; EMBEDDING_DIMS])
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn norm(&self) -> f64 {
        self.0.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|v| *v == 0.0)
    }

    /// Cosine similarity in `[-1, 1]`; 0 when either side is the zero vector.
    pub fn cosine_similarity(&self, other: &FeatureVector) -> f64 {
        let (a, b) = (self.norm(), other.norm());
        if a == 0.0 || b == 0.0 {
            return 0.0;
        }
        let dot: f64 = self.0.iter().zip(other.0.iter()).map(|(x, y)| x * y).sum();
        (dot / (a * b)).clamp(-1.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Vectorizer {
    matching: KeywordMatching,
}

impl Vectorizer {
    pub fn new(matching: KeywordMatching) -> Self {
        Self { matching }
    }

    pub fn matching(&self) -> KeywordMatching {
        self.matching
    }

    /// Embed `text`. Case-insensitive.
    pub fn embed(&self, text: &str) -> FeatureVector {
        let lowered = text.to_lowercase();
        let mut counts = [0.0; EMBEDDING_DIMS];
        for (slot, (_, keywords)) in counts.iter_mut().zip(EMBEDDING_TAXONOMY.iter()) {
            *slot = keywords
                .iter()
                .map(|kw| self.matching.count(&lowered, kw))
                .sum::<usize>() as f64;
        }
        FeatureVector::from_counts(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedding_is_unit_or_zero() {
        let v = Vectorizer::default();
        let e = v.embed("Green tourism with local community learning");
        assert!((e.norm() - 1.0).abs() < 1e-9);

        let z = v.embed("qwerty zxcvb");
        assert!(z.is_zero());
    }

    #[test]
    fn test_embedding_is_case_insensitive() {
        let v = Vectorizer::default();
        assert_eq!(v.embed("CARBON Tourism"), v.embed("carbon tourism"));
    }

    #[test]
    fn test_embedding_dimensions() {
        let v = Vectorizer::default();
        // "carbon" -> sustainability only
        let e = v.embed("carbon");
        assert_eq!(e.as_slice(), &[1.0, 0.0, 0.0, 0.0, 0.0]);
        // one sustainability hit, one tourism hit
        let e = v.embed("carbon travel");
        let h = 1.0 / 2f64.sqrt();
        assert!((e.as_slice()[0] - h).abs() < 1e-12);
        assert!((e.as_slice()[4] - h).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_zero_vector_is_zero() {
        let v = Vectorizer::default();
        let zero = FeatureVector::default();
        let e = v.embed("tourism");
        assert_eq!(zero.cosine_similarity(&e), 0.0);
        assert_eq!(e.cosine_similarity(&zero), 0.0);
    }

    #[test]
    fn test_cosine_identical_is_one() {
        let v = Vectorizer::default();
        let e = v.embed("smart digital tourism");
        assert!((e.cosine_similarity(&e) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_word_prefix_ignores_embedded_keyword() {
        let substring = Vectorizer::new(KeywordMatching::Substring);
        let prefix = Vectorizer::new(KeywordMatching::WordPrefix);
        // "maintain" contains "ai"
        assert!(!substring.embed("maintain").is_zero());
        assert!(prefix.embed("maintain").is_zero());
    }
}
