//! VCF Cleaner - Main entry point
//!
//! Cleans a vCard file in place (or into `--output`): duplicate phones and
//! categories are merged, numbers normalized, and contacts without any phone
//! number dropped.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use vcf_cleaner::{clean_with, Config};

#[derive(Debug, Parser)]
#[command(name = "vcf-cleaner", version, about)]
struct Cli {
    /// vCard file to clean
    input: PathBuf,

    /// Write the result here instead of overwriting the input
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// vCard version written on each contact
    #[arg(long)]
    vcard_version: Option<f64>,

    /// Keep unrecognized property lines
    #[arg(long)]
    include_other_info: bool,

    /// Keep declared phone types instead of collapsing them to CELL
    #[arg(long)]
    preserve_phone_type: bool,

    /// Print a JSON run report to stdout
    #[arg(long)]
    report: bool,
}

impl Cli {
    fn apply(&self, config: &mut Config) -> Result<()> {
        if let Some(version) = self.vcard_version {
            Config::validate_version("--vcard-version", version)?;
            config.vcard_version = version;
        }
        config.include_other_info |= self.include_other_info;
        config.preserve_phone_type |= self.preserve_phone_type;
        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    cli.apply(&mut config)?;

    // Logs go to stderr so stdout stays clean for the report
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let output = cli.output.clone().unwrap_or_else(|| cli.input.clone());
    info!(
        "Cleaning {} into {} (version {:.1})",
        cli.input.display(),
        output.display(),
        config.vcard_version
    );

    let report = match clean_with(&cli.input, &output, &config) {
        Ok(report) => report,
        Err(e) => {
            error!("Cleaning failed: {}", e);
            return Err(e.into());
        }
    };

    if cli.report {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
