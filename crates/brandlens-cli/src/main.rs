mod compute;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "brandlens-cli")]
#[command(about = "Brand visibility reporting from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch keyword data for configured markets and print visibility reports.
    Report {
        /// Market slug from markets.yaml. Reports on every market when omitted.
        #[arg(long)]
        market: Option<String>,
        /// Print the full JSON documents instead of summaries.
        #[arg(long)]
        json: bool,
    },
    /// Compute a report offline from a JSON file of keyword collections.
    Compute {
        /// Path to a JSON file with brandKeywords / rankedKeywords arrays.
        #[arg(long)]
        input: PathBuf,
        /// Print the full JSON document instead of a summary.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Report { market, json } => report::run(market.as_deref(), json).await,
        Commands::Compute { input, json } => compute::run(&input, json),
    }
}
