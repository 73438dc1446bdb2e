//! Likelihood x impact classification.
//!
//! The score is the product of two 1..=5 ratings; the level comes from fixed
//! inclusive thresholds and every piece of explanatory text is keyed on the
//! level alone.

use crate::error::{Result, RiskError};
use crate::types::{RiskAssessment, RiskInput, RiskLevel, MAX_SCORE, MIN_SCORE};
use log::debug;

/// Highest score still classified as Low
pub const LOW_MAX: u8 = 5;
/// Highest score still classified as Medium
pub const MEDIUM_MAX: u8 = 12;

/// Classify a likelihood / impact pair.
///
/// Values outside 1..=5 are rejected rather than clamped.
pub fn classify(likelihood: u8, impact: u8) -> Result<RiskAssessment> {
    check_range("likelihood", likelihood)?;
    check_range("impact", impact)?;

    let score = likelihood * impact;
    let level = level_for_score(score);
    debug!(
        "Classified likelihood={} impact={} as score {} ({})",
        likelihood, impact, score, level
    );

    Ok(RiskAssessment {
        likelihood,
        impact,
        score,
        level,
        explanation: explanation(level).to_string(),
        recommended_action: recommended_action(level).to_string(),
    })
}

pub fn assess(input: &RiskInput) -> Result<RiskAssessment> {
    classify(input.likelihood, input.impact)
}

pub fn level_for_score(score: u8) -> RiskLevel {
    if score <= LOW_MAX {
        RiskLevel::Low
    } else if score <= MEDIUM_MAX {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

pub fn explanation(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => {
            "This risk is unlikely to occur and would cause limited harm if it did. \
             It can be accepted and handled through normal day-to-day controls."
        }
        RiskLevel::Medium => {
            "This risk could realistically occur and would disrupt normal operations. \
             It needs attention and should not be left unmanaged."
        }
        RiskLevel::High => {
            "This risk is likely to occur and could cause serious damage to the \
             organisation, its data or its customers."
        }
    }
}

pub fn recommended_action(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => {
            "Accept and monitor. Record the risk in the register and review it \
             during the next scheduled assessment."
        }
        RiskLevel::Medium => {
            "Mitigate. Assign an owner, put additional controls in place within \
             an agreed timeframe and track progress until the risk is reduced."
        }
        RiskLevel::High => {
            "Act immediately. Escalate to management, apply controls to reduce \
             likelihood or impact as a priority and reassess once they are in place."
        }
    }
}

fn check_range(field: &'static str, value: u8) -> Result<()> {
    if (MIN_SCORE..=MAX_SCORE).contains(&value) {
        Ok(())
    } else {
        Err(RiskError::invalid_input(field, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_is_product_for_whole_domain() {
        for likelihood in 1..=5u8 {
            for impact in 1..=5u8 {
                let assessment = classify(likelihood, impact).unwrap();
                assert_eq!(assessment.score, likelihood * impact);
                assert!((1..=25).contains(&assessment.score));
            }
        }
    }

    #[test]
    fn test_boundary_scores() {
        assert_eq!(classify(1, 5).unwrap().level, RiskLevel::Low); // 5
        assert_eq!(classify(2, 3).unwrap().level, RiskLevel::Medium); // 6
        assert_eq!(classify(4, 3).unwrap().level, RiskLevel::Medium); // 12
        assert_eq!(classify(3, 5).unwrap().level, RiskLevel::High); // 15

        assert_eq!(level_for_score(5), RiskLevel::Low);
        assert_eq!(level_for_score(6), RiskLevel::Medium);
        assert_eq!(level_for_score(12), RiskLevel::Medium);
        assert_eq!(level_for_score(13), RiskLevel::High);
    }

    #[test]
    fn test_extremes() {
        let lowest = classify(1, 1).unwrap();
        assert_eq!((lowest.score, lowest.level), (1, RiskLevel::Low));
        let highest = classify(5, 5).unwrap();
        assert_eq!((highest.score, highest.level), (25, RiskLevel::High));
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(matches!(
            classify(0, 3),
            Err(RiskError::InvalidInput { field: "likelihood", ref value }) if value == "0"
        ));
        assert!(matches!(
            classify(3, 6),
            Err(RiskError::InvalidInput { field: "impact", ref value }) if value == "6"
        ));
        assert!(classify(255, 1).is_err());
    }

    #[test]
    fn test_text_depends_on_level_only() {
        // scores 6 and 12, both Medium
        let a = classify(2, 3).unwrap();
        let b = classify(4, 3).unwrap();
        assert_eq!(a.level, b.level);
        assert_eq!(a.explanation, b.explanation);
        assert_eq!(a.recommended_action, b.recommended_action);
        assert_eq!(a.color(), b.color());
    }

    #[test]
    fn test_repeat_classification_is_identical() {
        let first = classify(3, 4).unwrap();
        let second = classify(3, 4).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_high_wording() {
        assert!(explanation(RiskLevel::High).contains("serious damage"));
        assert!(!explanation(RiskLevel::Medium).contains("serious damage"));
    }

    #[test]
    fn test_assess_uses_input_scores() {
        let input = RiskInput::new("Customer Database", 4, 4);
        let assessment = assess(&input).unwrap();
        assert_eq!(assessment.score, 16);
        assert_eq!(assessment.level, RiskLevel::High);
    }
}
