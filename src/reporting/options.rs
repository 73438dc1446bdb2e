use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_REPORT_TITLE: &str = "Risk Assessment Report";
pub const DEFAULT_FOOTER_TEXT: &str =
    "Generated by Risk Assessment Calculator - GRC methodology (Likelihood x Impact)";

/// Knobs that distinguish one flavour of the printed report from another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    pub include_methodology_steps: bool,
    pub report_title: String,
    pub footer_text: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            include_methodology_steps: true,
            report_title: DEFAULT_REPORT_TITLE.to_string(),
            footer_text: DEFAULT_FOOTER_TEXT.to_string(),
        }
    }
}

impl ReportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_methodology_steps(mut self, include: bool) -> Self {
        self.include_methodology_steps = include;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.report_title = title.into();
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer_text = footer.into();
        self
    }

    /// Load options from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}
