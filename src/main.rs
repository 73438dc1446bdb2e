use anyhow::Result;
use clap::Parser;
use log::info;
use risk_assessor::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    info!("Starting risk assessor");

    match &cli.command {
        Commands::Assess {
            asset,
            likelihood,
            impact,
            format,
            output,
            options,
            title,
            footer,
            no_methodology,
        } => {
            let options = cli::assess::build_options(
                options.as_deref(),
                title.as_deref(),
                footer.as_deref(),
                *no_methodology,
            )?;
            cli::assess::run(asset, *likelihood, *impact, format, output, &options)
        }

        Commands::Scales => cli::scales::run(),
    }
}
