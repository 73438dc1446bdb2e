use crate::error::Result;
use log::{debug, info};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Pdf,
    Json,
}

impl ExportFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "risk_assessment_report.csv",
            ExportFormat::Pdf => "risk_assessment_report.pdf",
            ExportFormat::Json => "risk_assessment_report.json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Pdf => crate::reporting::pdf::PDF_MIME_TYPE,
            ExportFormat::Json => "application/json",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Pdf => write!(f, "pdf"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

/// Where an artifact ends up: inside `destination` under the format's fixed
/// file name when `destination` is a directory, otherwise at `destination`.
pub fn resolve_destination(destination: &Path, format: ExportFormat) -> PathBuf {
    if destination.is_dir() {
        destination.join(format.file_name())
    } else {
        destination.to_path_buf()
    }
}

/// Write `bytes` to `target` through a temporary file in the same directory.
///
/// The temporary file is removed on every failure path; the target is only
/// replaced once all bytes have been flushed.
pub fn write_artifact(target: &Path, bytes: &[u8]) -> Result<PathBuf> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut temp = NamedTempFile::new_in(&dir)?;
    debug!("Staging artifact in {}", temp.path().display());
    temp.write_all(bytes)?;
    temp.as_file().sync_all()?;
    temp.persist(target).map_err(|e| e.error)?;

    info!("Wrote {} bytes to {}", bytes.len(), target.display());
    Ok(target.to_path_buf())
}
