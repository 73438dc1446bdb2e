/// Errors raised while classifying a risk or exporting a report
#[derive(Debug, thiserror::Error)]
pub enum RiskError {
    #[error("Invalid {field}: {value} (expected a score between 1 and 5)")]
    InvalidInput { field: &'static str, value: String },

    #[error("Unknown {field} label: {label}")]
    UnknownLabel { field: &'static str, label: String },

    #[error("Report rendering failed: {0}")]
    Render(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RiskError {
    pub fn invalid_input(field: &'static str, value: impl ToString) -> Self {
        RiskError::InvalidInput {
            field,
            value: value.to_string(),
        }
    }

    pub fn render(reason: impl Into<String>) -> Self {
        RiskError::Render(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, RiskError>;
