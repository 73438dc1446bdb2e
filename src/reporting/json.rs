use super::csv::CSV_ASSET_FALLBACK;
use crate::error::Result;
use crate::types::{DisplayColor, RiskAssessment, RiskInput, RiskLevel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    pub report_id: String,
    pub generated_at: DateTime<Utc>,
    pub asset: String,
    pub likelihood: u8,
    pub impact: u8,
    pub score: u8,
    pub level: RiskLevel,
    pub color: DisplayColor,
    pub explanation: String,
    pub recommended_action: String,
}

impl JsonReport {
    pub fn new(input: &RiskInput, assessment: &RiskAssessment) -> Self {
        Self {
            report_id: Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            asset: input.asset_or(CSV_ASSET_FALLBACK).to_string(),
            likelihood: assessment.likelihood,
            impact: assessment.impact,
            score: assessment.score,
            level: assessment.level,
            color: assessment.color(),
            explanation: assessment.explanation.clone(),
            recommended_action: assessment.recommended_action.clone(),
        }
    }
}

pub fn to_json(input: &RiskInput, assessment: &RiskAssessment) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::new(input, assessment))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;

    #[test]
    fn test_json_export_fields() {
        let input = RiskInput::new("Web Application", 2, 3);
        let assessment = classify(2, 3).unwrap();
        let json = to_json(&input, &assessment).unwrap();

        let parsed: JsonReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.asset, "Web Application");
        assert_eq!(parsed.score, 6);
        assert_eq!(parsed.level, RiskLevel::Medium);
        assert_eq!(parsed.color, DisplayColor::Orange);
        assert_eq!(parsed.explanation, assessment.explanation);
        assert!(Uuid::parse_str(&parsed.report_id).is_ok());
    }
}
