//! Likelihood x impact risk assessment.
//!
//! [`classifier`] turns two 1..=5 ratings into a [`types::RiskAssessment`];
//! [`reporting`] renders an assessment as a CSV register entry, a JSON
//! record or a paginated A4 PDF; [`output`] writes finished artifacts.

pub mod classifier;
pub mod cli;
pub mod error;
pub mod output;
pub mod reporting;
pub mod types;

pub use classifier::{assess, classify};
pub use error::{Result, RiskError};
pub use reporting::{to_csv, to_document, ReportOptions};
pub use types::{RiskAssessment, RiskInput, RiskLevel};
