//! Knowledge documents and their topical categories

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Inclusive upper bound for a document's stored relevance score.
pub const MAX_RELEVANCE_SCORE: f64 = 10.0;

/// Topical category of a knowledge document.
///
/// The ten named variants form the fixed boost taxonomy. Anything else is kept
/// verbatim in `Other` so the document can still be stored and displayed; such
/// documents never receive a category boost.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Sustainability,
    Education,
    Marketing,
    Heritage,
    Technology,
    Community,
    Environment,
    Experience,
    Digital,
    Conservation,
    Other(String),
}

impl Category {
    /// All categories that belong to the fixed taxonomy.
    pub const KNOWN: [Category; 10] = [
        Category::Sustainability,
        Category::Education,
        Category::Marketing,
        Category::Heritage,
        Category::Technology,
        Category::Community,
        Category::Environment,
        Category::Experience,
        Category::Digital,
        Category::Conservation,
    ];

    /// Lower-case identifier used in storage, stats and rendered output.
    pub fn as_str(&self) -> &str {
        match self {
            Category::Sustainability => "sustainability",
            Category::Education => "education",
            Category::Marketing => "marketing",
            Category::Heritage => "heritage",
            Category::Technology => "technology",
            Category::Community => "community",
            Category::Environment => "environment",
            Category::Experience => "experience",
            Category::Digital => "digital",
            Category::Conservation => "conservation",
            Category::Other(name) => name,
        }
    }

    /// Parse a category name. Unrecognised names become `Other`.
    pub fn parse(name: &str) -> Self {
        let normalized = name.trim().to_lowercase();
        Self::KNOWN
            .iter()
            .find(|c| c.as_str() == normalized)
            .cloned()
            .unwrap_or_else(|| Category::Other(name.trim().to_string()))
    }

    /// Whether this category is part of the fixed taxonomy.
    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Category::parse(&value)
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored knowledge document. Immutable once admitted to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: Category,
    /// Editorial relevance in `[0, 10]`, independent of any query.
    pub relevance_score: f64,
    pub source: String,
    pub last_updated: NaiveDate,
}

/// Caller-supplied fields for a new document.
///
/// Every field defaults to "absent" on deserialization so a request body that
/// omits one is rejected by validation rather than by the JSON layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewDocument {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub relevance_score: Option<f64>,
    #[serde(default)]
    pub source: String,
}

impl NewDocument {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: Category,
        relevance_score: f64,
        source: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category: Some(category),
            relevance_score: Some(relevance_score),
            source: source.into(),
        }
    }

    /// Check that every required field is present and in range.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.title.trim().is_empty() {
            return Err(EngineError::MissingField("title"));
        }
        if self.content.trim().is_empty() {
            return Err(EngineError::MissingField("content"));
        }
        match &self.category {
            None => return Err(EngineError::MissingField("category")),
            Some(c) if c.as_str().is_empty() => return Err(EngineError::MissingField("category")),
            Some(_) => {}
        }
        if self.source.trim().is_empty() {
            return Err(EngineError::MissingField("source"));
        }
        let score = self
            .relevance_score
            .ok_or(EngineError::MissingField("relevance_score"))?;
        if !score.is_finite() || !(0.0..=MAX_RELEVANCE_SCORE).contains(&score) {
            return Err(EngineError::RelevanceOutOfRange(score));
        }
        Ok(())
    }

    /// Validate and stamp the document with its assigned id and date.
    pub(crate) fn into_document(self, id: String, today: NaiveDate) -> Result<Document, EngineError> {
        self.validate()?;
        let NewDocument {
            title,
            content,
            category,
            relevance_score,
            source,
        } = self;
        Ok(Document {
            id,
            title,
            content,
            category: category.ok_or(EngineError::MissingField("category"))?,
            relevance_score: relevance_score.ok_or(EngineError::MissingField("relevance_score"))?,
            source,
            last_updated: today,
        })
    }
}
