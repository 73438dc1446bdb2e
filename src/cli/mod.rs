pub mod assess;
pub mod scales;

use crate::output::ExportFormat;
use crate::types::{Impact, Likelihood};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "risk-assessor")]
#[command(about = "Likelihood x impact risk assessment with CSV and PDF reports")]
#[command(version)]
pub struct Cli {
    #[arg(short, long)]
    #[arg(help = "Enable verbose logging")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Assess a single asset and optionally export the result")]
    Assess {
        #[arg(short, long, default_value = "")]
        #[arg(help = "Asset or process name (blank means not specified)")]
        asset: String,

        #[arg(short, long)]
        #[arg(help = "Likelihood as 1-5 or label (Rare .. Almost Certain)")]
        likelihood: Likelihood,

        #[arg(short, long)]
        #[arg(help = "Impact as 1-5 or label (Negligible .. Severe)")]
        impact: Impact,

        #[arg(short, long, value_enum)]
        #[arg(help = "Export format; repeat to export several")]
        format: Vec<ExportFormat>,

        #[arg(short, long, default_value = ".")]
        #[arg(help = "Output directory or file path")]
        output: PathBuf,

        #[arg(long)]
        #[arg(help = "JSON file with report options")]
        options: Option<PathBuf>,

        #[arg(long)]
        #[arg(help = "Report title printed at the top of the PDF")]
        title: Option<String>,

        #[arg(long)]
        #[arg(help = "Footer text printed at the end of the PDF")]
        footer: Option<String>,

        #[arg(long)]
        #[arg(help = "Leave the methodology steps out of the PDF")]
        no_methodology: bool,
    },

    #[command(about = "Show the likelihood and impact scales")]
    Scales,
}
