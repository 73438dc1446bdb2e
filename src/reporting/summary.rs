use super::csv::CSV_ASSET_FALLBACK;
use crate::types::{Impact, Likelihood, RiskAssessment, RiskInput, RiskLevel};

fn level_marker(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "[LOW RISK]",
        RiskLevel::Medium => "[MEDIUM RISK]",
        RiskLevel::High => "[HIGH RISK]",
    }
}

fn describe<T: std::fmt::Display>(score: u8, label: Option<T>) -> String {
    match label {
        Some(label) => format!("{} ({})", score, label),
        None => score.to_string(),
    }
}

/// Terminal rendition of the on-screen risk summary and assessment overview.
pub fn render_summary(input: &RiskInput, assessment: &RiskAssessment) -> String {
    let mut output = String::new();

    output.push_str("Risk Summary\n");
    output.push_str("============\n");
    output.push_str(&format!("Risk Score: {}\n", assessment.score));
    output.push_str(&format!("Risk Level: {}\n\n", level_marker(assessment.level)));

    output.push_str("Assessment Overview\n");
    output.push_str("-------------------\n");
    output.push_str(&format!(
        "- Asset / Process: {}\n",
        input.asset_or(CSV_ASSET_FALLBACK)
    ));
    output.push_str(&format!(
        "- Likelihood Score: {}\n",
        describe(assessment.likelihood, Likelihood::from_score(assessment.likelihood))
    ));
    output.push_str(&format!(
        "- Impact Score: {}\n",
        describe(assessment.impact, Impact::from_score(assessment.impact))
    ));
    output.push_str(&format!(
        "- Overall Risk Classification: {}\n\n",
        assessment.level
    ));

    output.push_str(&format!("{}\n\n", assessment.explanation));
    output.push_str(&format!("Recommended action: {}\n", assessment.recommended_action));

    output
}
