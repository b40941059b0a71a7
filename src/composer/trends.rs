//! Market trend summaries

use statrs::statistics::Statistics;

use crate::types::Trend;

/// Trends listed individually in a summary.
const TOP_TRENDS: usize = 3;

pub const NO_TRENDS: &str = "No specific trends found for this query.";

/// Maturity band for an average adoption rate.
pub fn market_maturity(avg_adoption: f64) -> &'static str {
    if avg_adoption < 0.3 {
        "Early"
    } else if avg_adoption < 0.6 {
        "Growing"
    } else {
        "Mature"
    }
}

fn percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

/// Markdown summary of already-sorted trends.
pub fn trend_summary(trends: &[Trend]) -> String {
    if trends.is_empty() {
        return NO_TRENDS.to_string();
    }

    let mut out = format!("Analysis of {} relevant trends:\n\n", trends.len());
    for trend in trends.iter().take(TOP_TRENDS) {
        out.push_str(&format!(
            "• **{}**: Current adoption at {}, projected growth to {}. Impact level: {}.\n",
            trend.name,
            percent(trend.adoption_rate),
            percent(trend.growth_projection),
            trend.impact_level
        ));
    }

    let avg_adoption = trends.iter().map(|t| t.adoption_rate).mean();
    let avg_growth = trends.iter().map(|t| t.growth_projection).mean();

    out.push_str("\n**Overall Market Insights:**\n");
    out.push_str(&format!("• Average current adoption: {}\n", percent(avg_adoption)));
    out.push_str(&format!("• Average projected growth: {}\n", percent(avg_growth)));
    out.push_str(&format!("• Market maturity: {}\n", market_maturity(avg_adoption)));
    out
}
