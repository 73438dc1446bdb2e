use serde::{Deserialize, Serialize};

/// Lowest accepted likelihood / impact score
pub const MIN_SCORE: u8 = 1;
/// Highest accepted likelihood / impact score
pub const MAX_SCORE: u8 = 5;

/// Raw values gathered from the assessment form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskInput {
    pub asset: String,
    pub likelihood: u8,
    pub impact: u8,
}

impl RiskInput {
    pub fn new(asset: impl Into<String>, likelihood: u8, impact: u8) -> Self {
        Self {
            asset: asset.into(),
            likelihood,
            impact,
        }
    }

    /// Trimmed asset name, or `fallback` when nothing meaningful was entered.
    pub fn asset_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        let trimmed = self.asset.trim();
        if trimmed.is_empty() {
            fallback
        } else {
            trimmed
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn color(&self) -> DisplayColor {
        match self {
            RiskLevel::Low => DisplayColor::Green,
            RiskLevel::Medium => DisplayColor::Orange,
            RiskLevel::High => DisplayColor::Red,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(anyhow::anyhow!("Unknown risk level: {}", s)),
        }
    }
}

/// Semantic display colour bound to a risk level. Renderers decide what
/// each colour looks like.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DisplayColor {
    Green,
    Orange,
    Red,
}

impl DisplayColor {
    /// RGB components in the 0.0..=1.0 range.
    pub fn rgb(&self) -> (f32, f32, f32) {
        match self {
            DisplayColor::Green => (0.0, 0.5, 0.0),
            DisplayColor::Orange => (1.0, 0.647, 0.0),
            DisplayColor::Red => (1.0, 0.0, 0.0),
        }
    }
}

impl std::fmt::Display for DisplayColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayColor::Green => write!(f, "green"),
            DisplayColor::Orange => write!(f, "orange"),
            DisplayColor::Red => write!(f, "red"),
        }
    }
}

/// Result of classifying one input. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub likelihood: u8,
    pub impact: u8,
    pub score: u8,
    pub level: RiskLevel,
    pub explanation: String,
    pub recommended_action: String,
}

impl RiskAssessment {
    pub fn color(&self) -> DisplayColor {
        self.level.color()
    }
}
