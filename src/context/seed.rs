//! Seed corpus loaded at engine startup
//!
//! Ten curated documents, three regulations and four market trends. No I/O:
//! the records are compiled into the binary.

use chrono::NaiveDate;

use crate::types::{
    Category, ComplianceLevel, Document, ImpactLevel, Jurisdiction, Regulation, Trend,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn document(
    id: &str,
    title: &str,
    content: &str,
    category: Category,
    relevance_score: f64,
    source: &str,
    last_updated: NaiveDate,
) -> Document {
    Document {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        category,
        relevance_score,
        source: source.to_string(),
        last_updated,
    }
}

/// The reference document corpus, in insertion order.
pub fn seed_documents() -> Vec<Document> {
    vec![
        document(
            "doc_001",
            "Sustainable Tourism Development Guidelines",
            "Sustainable tourism development requires careful balance between economic growth, \
             environmental protection, and cultural preservation. Key principles include carrying \
             capacity management, local community involvement, and environmental impact assessment.",
            Category::Sustainability,
            9.2,
            "UNWTO Guidelines",
            date(2024, 1, 15),
        ),
        document(
            "doc_002",
            "Educational Tourism Best Practices",
            "Educational tourism combines learning with travel, offering immersive experiences that \
             enhance knowledge and cultural understanding. Effective programs include hands-on \
             activities, expert guides, and structured learning outcomes.",
            Category::Education,
            8.8,
            "Tourism Education Institute",
            date(2024, 2, 1),
        ),
        document(
            "doc_003",
            "Green Marketing in Tourism Industry",
            "Green marketing in tourism focuses on promoting environmentally responsible travel \
             options. Strategies include eco-certification, carbon footprint transparency, and \
             sustainable accommodation partnerships.",
            Category::Marketing,
            9.0,
            "Green Tourism Council",
            date(2024, 1, 20),
        ),
        document(
            "doc_004",
            "Cultural Heritage Conservation in Tourism",
            "Protecting cultural heritage sites while promoting tourism requires visitor management, \
             conservation funding, and community engagement. Digital documentation and virtual \
             experiences can reduce physical impact.",
            Category::Heritage,
            8.7,
            "UNESCO Heritage Guidelines",
            date(2024, 1, 10),
        ),
        document(
            "doc_005",
            "Smart Tourism Technology Integration",
            "Smart tourism leverages IoT, AI, and big data to enhance visitor experiences and \
             optimize resource management. Applications include crowd monitoring, personalized \
             recommendations, and predictive analytics.",
            Category::Technology,
            8.9,
            "Smart Tourism Research Lab",
            date(2024, 2, 5),
        ),
        document(
            "doc_006",
            "Community-Based Tourism Development",
            "Community-based tourism empowers local communities to control and benefit from tourism \
             development. This approach ensures cultural authenticity, environmental protection, and \
             equitable economic distribution.",
            Category::Community,
            9.1,
            "Community Tourism Network",
            date(2024, 1, 25),
        ),
        document(
            "doc_007",
            "Carbon Neutral Tourism Strategies",
            "Achieving carbon neutrality in tourism requires comprehensive emission reduction and \
             offset programs. Key strategies include renewable energy adoption, efficient \
             transportation, and verified carbon credits.",
            Category::Environment,
            9.3,
            "Climate Action Tourism",
            date(2024, 2, 10),
        ),
        document(
            "doc_008",
            "Visitor Experience Optimization",
            "Optimizing visitor experiences involves understanding visitor motivations, preferences, \
             and behaviors. Data analytics, personalization technologies, and continuous feedback \
             collection are essential tools.",
            Category::Experience,
            8.6,
            "Visitor Experience Research Center",
            date(2024, 1, 30),
        ),
        document(
            "doc_009",
            "Digital Transformation in Tourism",
            "Digital transformation revolutionizes tourism through mobile apps, virtual reality, \
             blockchain verification, and AI-powered services. These technologies enhance \
             efficiency, transparency, and visitor satisfaction.",
            Category::Digital,
            8.8,
            "Digital Tourism Initiative",
            date(2024, 2, 8),
        ),
        document(
            "doc_010",
            "Biodiversity Conservation in Eco-Tourism",
            "Eco-tourism can support biodiversity conservation through education, research funding, \
             and habitat protection. Successful programs balance visitor access with ecosystem \
             preservation.",
            Category::Conservation,
            9.0,
            "Biodiversity Tourism Alliance",
            date(2024, 1, 18),
        ),
    ]
}

pub fn seed_regulations() -> Vec<Regulation> {
    vec![
        Regulation {
            id: "reg_001".to_string(),
            title: "Environmental Impact Assessment Regulation".to_string(),
            content: "Tourism developments must undergo environmental impact assessments to evaluate \
                      potential ecological effects and mitigation measures."
                .to_string(),
            jurisdiction: Jurisdiction::National,
            compliance_level: ComplianceLevel::Mandatory,
            effective_date: date(2024, 1, 1),
        },
        Regulation {
            id: "reg_002".to_string(),
            title: "Cultural Heritage Protection Law".to_string(),
            content: "Tourism activities near cultural heritage sites must comply with protection \
                      standards and visitor management protocols."
                .to_string(),
            jurisdiction: Jurisdiction::Regional,
            compliance_level: ComplianceLevel::Mandatory,
            effective_date: date(2023, 6, 15),
        },
        Regulation {
            id: "reg_003".to_string(),
            title: "Sustainable Tourism Certification Standards".to_string(),
            content: "Tourism operators can obtain sustainability certification by meeting \
                      environmental, social, and economic criteria."
                .to_string(),
            jurisdiction: Jurisdiction::International,
            compliance_level: ComplianceLevel::Voluntary,
            effective_date: date(2024, 3, 1),
        },
    ]
}

pub fn seed_trends() -> Vec<Trend> {
    vec![
        Trend {
            id: "trend_001".to_string(),
            name: "AI-Powered Personalization".to_string(),
            description: "Artificial intelligence enables personalized tourism experiences based on \
                          visitor preferences and behaviors."
                .to_string(),
            adoption_rate: 0.35,
            growth_projection: 0.85,
            impact_level: ImpactLevel::High,
        },
        Trend {
            id: "trend_002".to_string(),
            name: "Virtual and Augmented Reality".to_string(),
            description: "VR/AR technologies create immersive educational experiences and virtual \
                          destination previews."
                .to_string(),
            adoption_rate: 0.28,
            growth_projection: 0.75,
            impact_level: ImpactLevel::Medium,
        },
        Trend {
            id: "trend_003".to_string(),
            name: "Blockchain Verification".to_string(),
            description: "Blockchain technology provides transparent verification of sustainability \
                          claims and certifications."
                .to_string(),
            adoption_rate: 0.15,
            growth_projection: 0.65,
            impact_level: ImpactLevel::Medium,
        },
        Trend {
            id: "trend_004".to_string(),
            name: "Carbon Footprint Tracking".to_string(),
            description: "Real-time carbon footprint tracking helps tourists make environmentally \
                          conscious decisions."
                .to_string(),
            adoption_rate: 0.42,
            growth_projection: 0.90,
            impact_level: ImpactLevel::High,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_counts() {
        assert_eq!(seed_documents().len(), 10);
        assert_eq!(seed_regulations().len(), 3);
        assert_eq!(seed_trends().len(), 4);
    }

    #[test]
    fn test_seed_ids_unique_and_sequential() {
        let docs = seed_documents();
        let ids: HashSet<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids.len(), docs.len());
        for (i, doc) in docs.iter().enumerate() {
            assert_eq!(doc.id, format!("doc_{:03}", i + 1));
        }
    }

    #[test]
    fn test_line_continuations_keep_single_spaces() {
        for doc in seed_documents() {
            assert!(!doc.content.contains("  "), "{} has a double space", doc.id);
        }
    }
}
