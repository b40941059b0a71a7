//! Read-only reference records: regulations and market trends

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Level of government a regulation is issued at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Jurisdiction {
    National,
    Regional,
    International,
}

/// Whether compliance with a regulation is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceLevel {
    Mandatory,
    Voluntary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Regulation {
    pub id: String,
    pub title: String,
    pub content: String,
    pub jurisdiction: Jurisdiction,
    pub compliance_level: ComplianceLevel,
    pub effective_date: NaiveDate,
}

/// Expected market impact of a trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ImpactLevel::Low => "Low",
            ImpactLevel::Medium => "Medium",
            ImpactLevel::High => "High",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Current share of operators using it, `[0, 1]`
    pub adoption_rate: f64,
    /// Projected share, `[0, 1]`
    pub growth_projection: f64,
    pub impact_level: ImpactLevel,
}

/// Trends matching a query plus a rendered market summary.
#[derive(Debug, Clone, Serialize)]
pub struct TrendAnalysis {
    pub trends: Vec<Trend>,
    pub summary: String,
}
