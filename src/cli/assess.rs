use crate::classifier;
use crate::output::{resolve_destination, write_artifact, ExportFormat};
use crate::reporting::{self, ReportOptions};
use crate::types::{Impact, Likelihood, RiskAssessment, RiskInput};
use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Merge the options file (if any) with flags given on the command line.
pub fn build_options(
    options_path: Option<&Path>,
    title: Option<&str>,
    footer: Option<&str>,
    no_methodology: bool,
) -> Result<ReportOptions> {
    let mut options = match options_path {
        Some(path) => ReportOptions::from_json_file(path)
            .with_context(|| format!("Failed to load report options from {}", path.display()))?,
        None => ReportOptions::default(),
    };

    if let Some(title) = title {
        options = options.with_title(title);
    }
    if let Some(footer) = footer {
        options = options.with_footer(footer);
    }
    if no_methodology {
        options = options.with_methodology_steps(false);
    }

    debug!("Report options: {:?}", options);
    Ok(options)
}

pub fn run(
    asset: &str,
    likelihood: Likelihood,
    impact: Impact,
    formats: &[ExportFormat],
    output: &Path,
    options: &ReportOptions,
) -> Result<()> {
    if formats.len() > 1 && !output.is_dir() {
        bail!(
            "Exporting {} formats needs an output directory, got {}",
            formats.len(),
            output.display()
        );
    }

    let input = RiskInput::new(asset, likelihood.score(), impact.score());
    let assessment = classifier::assess(&input)?;
    info!(
        "Assessed '{}': score {} ({})",
        input.asset_or(reporting::csv::CSV_ASSET_FALLBACK),
        assessment.score,
        assessment.level
    );

    println!("{}", reporting::render_summary(&input, &assessment));

    for format in formats {
        let path = export(&input, &assessment, *format, output, options)
            .with_context(|| format!("Failed to export {} report", format))?;
        println!("Saved {} report ({}) to {}", format, format.mime_type(), path.display());
    }

    Ok(())
}

/// Render one format completely in memory, then hand it to the artifact writer.
pub fn export(
    input: &RiskInput,
    assessment: &RiskAssessment,
    format: ExportFormat,
    output: &Path,
    options: &ReportOptions,
) -> Result<PathBuf> {
    let bytes = match format {
        ExportFormat::Csv => reporting::to_csv(input, assessment)?.into_bytes(),
        ExportFormat::Pdf => reporting::to_document(input, assessment, options)?,
        ExportFormat::Json => reporting::to_json(input, assessment)?.into_bytes(),
    };

    let target = resolve_destination(output, format);
    Ok(write_artifact(&target, &bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_build_options_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"report_title": "From File", "include_methodology_steps": true}}"#).unwrap();

        let options =
            build_options(Some(file.path()), Some("From Flag"), None, true).unwrap();
        assert_eq!(options.report_title, "From Flag");
        assert!(!options.include_methodology_steps);
        assert_eq!(options.footer_text, ReportOptions::default().footer_text);
    }

    #[test]
    fn test_build_options_missing_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(build_options(Some(&missing), None, None, false).is_err());
    }

    #[test]
    fn test_run_exports_every_format() {
        let dir = TempDir::new().unwrap();
        run(
            "Customer Database",
            Likelihood::Likely,
            Impact::Severe,
            &[ExportFormat::Csv, ExportFormat::Pdf, ExportFormat::Json],
            dir.path(),
            &ReportOptions::default(),
        )
        .unwrap();

        let csv = std::fs::read_to_string(dir.path().join("risk_assessment_report.csv")).unwrap();
        assert!(csv.contains("Customer Database,4,5,20,High"));
        let pdf = std::fs::read(dir.path().join("risk_assessment_report.pdf")).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
        assert!(dir.path().join("risk_assessment_report.json").exists());
    }

    #[test]
    fn test_run_rejects_many_formats_into_one_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("report.out");
        let result = run(
            "CRM",
            Likelihood::Rare,
            Impact::Minor,
            &[ExportFormat::Csv, ExportFormat::Pdf],
            &target,
            &ReportOptions::default(),
        );
        assert!(result.is_err());
        assert!(!target.exists());
    }
}
