//! CLI entry point for the derivation structure report

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use keytree_report::{write_report, ReportConfig};

/// Fixed export fixture, matching the recovery phrase the report documents.
const PHRASE: &str =
    "action action action action action action action action action action action action";

#[derive(Parser)]
#[command(name = "keytree-report")]
#[command(about = "Export the full BIP44/49/84/86 derivation structure as text")]
#[command(version)]
struct Cli {
    /// Output file path
    #[arg(short, long, default_value = "full_structure_report.txt")]
    output: PathBuf,

    /// Number of addresses per profile (indices 0..N-1)
    #[arg(short = 'n', long, default_value_t = 10)]
    max_index: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let config = ReportConfig {
        phrase: PHRASE.to_string(),
        passphrase: String::new(),
        account: 0,
        max_index: cli.max_index,
    };

    info!(output = %cli.output.display(), max_index = cli.max_index, "generating report");
    write_report(&config, &cli.output)?;

    println!("Full structure written to {}", cli.output.display());
    Ok(())
}
