use crate::error::RiskError;
use serde::{Deserialize, Serialize};

/// Likelihood scale offered by the assessment form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Likelihood {
    Rare = 1,
    Unlikely = 2,
    Possible = 3,
    Likely = 4,
    AlmostCertain = 5,
}

/// Impact scale offered by the assessment form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Impact {
    Negligible = 1,
    Minor = 2,
    Moderate = 3,
    Major = 4,
    Severe = 5,
}

impl Likelihood {
    pub const ALL: [Likelihood; 5] = [
        Likelihood::Rare,
        Likelihood::Unlikely,
        Likelihood::Possible,
        Likelihood::Likely,
        Likelihood::AlmostCertain,
    ];

    pub fn score(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            Likelihood::Rare => "Rare",
            Likelihood::Unlikely => "Unlikely",
            Likelihood::Possible => "Possible",
            Likelihood::Likely => "Likely",
            Likelihood::AlmostCertain => "Almost Certain",
        }
    }

    pub fn from_score(score: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.score() == score)
    }
}

impl Impact {
    pub const ALL: [Impact; 5] = [
        Impact::Negligible,
        Impact::Minor,
        Impact::Moderate,
        Impact::Major,
        Impact::Severe,
    ];

    pub fn score(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            Impact::Negligible => "Negligible",
            Impact::Minor => "Minor",
            Impact::Moderate => "Moderate",
            Impact::Major => "Major",
            Impact::Severe => "Severe",
        }
    }

    pub fn from_score(score: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.score() == score)
    }
}

impl std::fmt::Display for Likelihood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// Labels compare without case, spaces, dashes or underscores so that
// "almost-certain", "Almost Certain" and "ALMOST_CERTAIN" all match.
fn normalize(label: &str) -> String {
    label
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

fn is_numeric(input: &str) -> bool {
    let digits = input
        .strip_prefix('-')
        .or_else(|| input.strip_prefix('+'))
        .unwrap_or(input);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn parse_scale<T: Copy>(
    field: &'static str,
    input: &str,
    all: &[T],
    score: impl Fn(&T) -> u8,
    label: impl Fn(&T) -> &'static str,
) -> Result<T, RiskError> {
    let trimmed = input.trim();
    if is_numeric(trimmed) {
        // numbers too large for i64 are still numbers, just out of range
        let value = trimmed.parse::<i64>().ok();
        return all
            .iter()
            .copied()
            .find(|entry| value == Some(i64::from(score(entry))))
            .ok_or_else(|| RiskError::invalid_input(field, trimmed));
    }

    let wanted = normalize(trimmed);
    all.iter()
        .copied()
        .find(|entry| normalize(label(entry)) == wanted)
        .ok_or_else(|| RiskError::UnknownLabel {
            field,
            label: trimmed.to_string(),
        })
}

impl std::str::FromStr for Likelihood {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_scale("likelihood", s, &Self::ALL, Likelihood::score, Likelihood::label)
    }
}

impl std::str::FromStr for Impact {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_scale("impact", s, &Self::ALL, Impact::score, Impact::label)
    }
}
