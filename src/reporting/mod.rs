pub mod csv;
pub mod document;
pub mod json;
pub mod layout;
pub mod metrics;
pub mod options;
pub mod pdf;
pub mod summary;

pub use self::csv::{decode_rows, to_row, CsvExporter, RiskRow};
pub use self::document::{ReportDocument, Section, SectionKind, TextBlock, TextStyle};
pub use self::json::{to_json, JsonReport};
pub use self::options::ReportOptions;
pub use self::pdf::PdfRenderer;
pub use self::summary::render_summary;

use crate::error::Result;
use crate::types::{RiskAssessment, RiskInput};
use log::info;

/// Build, lay out and serialise the printed report for one assessment.
pub fn to_document(
    input: &RiskInput,
    assessment: &RiskAssessment,
    options: &ReportOptions,
) -> Result<Vec<u8>> {
    let document = ReportDocument::build(input, assessment, options)?;
    let bytes = PdfRenderer::new().render(&document)?;
    info!(
        "Rendered {} report ({} bytes, methodology {})",
        assessment.level,
        bytes.len(),
        if options.include_methodology_steps { "included" } else { "omitted" }
    );
    Ok(bytes)
}

/// CSV text holding the header and the single row for one assessment.
pub fn to_csv(input: &RiskInput, assessment: &RiskAssessment) -> Result<String> {
    CsvExporter::new().export(&[to_row(input, assessment)])
}
