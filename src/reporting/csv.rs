use crate::error::{Result, RiskError};
use crate::types::{RiskAssessment, RiskInput, RiskLevel};
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};

/// Asset label used in tabular exports when no name was entered
pub const CSV_ASSET_FALLBACK: &str = "Not Specified";

pub const CSV_HEADERS: [&str; 5] = [
    "Asset / Process",
    "Likelihood",
    "Impact",
    "Risk Score",
    "Risk Level",
];

/// One risk register entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRow {
    #[serde(rename = "Asset / Process")]
    pub asset: String,
    #[serde(rename = "Likelihood")]
    pub likelihood: u8,
    #[serde(rename = "Impact")]
    pub impact: u8,
    #[serde(rename = "Risk Score")]
    pub score: u8,
    #[serde(rename = "Risk Level")]
    pub level: RiskLevel,
}

pub fn to_row(input: &RiskInput, assessment: &RiskAssessment) -> RiskRow {
    RiskRow {
        asset: input.asset_or(CSV_ASSET_FALLBACK).to_string(),
        likelihood: assessment.likelihood,
        impact: assessment.impact,
        score: assessment.score,
        level: assessment.level,
    }
}

pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }

    /// Header row followed by one line per entry, comma delimited, no index column.
    pub fn export(&self, rows: &[RiskRow]) -> Result<String> {
        let mut wtr = WriterBuilder::new()
            .has_headers(false)
            .from_writer(vec![]);

        wtr.write_record(CSV_HEADERS)?;
        for row in rows {
            wtr.serialize(row)?;
        }

        let data = wtr
            .into_inner()
            .map_err(|e| RiskError::render(format!("CSV writer error: {}", e)))?;
        String::from_utf8(data)
            .map_err(|e| RiskError::render(format!("UTF-8 conversion error: {}", e)))
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Read entries back from CSV produced by [`CsvExporter`].
pub fn decode_rows(data: &str) -> Result<Vec<RiskRow>> {
    let mut reader = ReaderBuilder::new().from_reader(data.as_bytes());
    let headers = reader.headers()?.clone();
    if headers.iter().ne(CSV_HEADERS.iter().copied()) {
        return Err(RiskError::render(format!(
            "Unexpected CSV header: {:?}",
            headers.iter().collect::<Vec<_>>()
        )));
    }

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}
