use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Datelike, Utc};
use clap::{Parser, Subcommand};

mod ingest;
mod models;
mod normalize;
mod rank;
mod report;

use models::RankedInstitution;

#[derive(Parser)]
#[command(name = "institution-rankings")]
#[command(about = "Consolidated institution rankings for network member exports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the top institutions to the console
    Rank {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Write the full ranking as a JSON array
    Export {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, default_value = "rankings_data.json")]
        out: PathBuf,
    },
    /// Generate a markdown report
    Report {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let current_year = Utc::now().year();

    match cli.command {
        Commands::Rank { csv, limit } => {
            let rankings = run_pipeline(&csv, current_year)?;
            print_summary(&rankings, limit);
        }
        Commands::Export { csv, out } => {
            let rankings = run_pipeline(&csv, current_year)?;
            let json = serde_json::to_string_pretty(&rankings)?;
            std::fs::write(&out, json)
                .with_context(|| format!("failed to write rankings to {}", out.display()))?;
            println!("Wrote {} institutions to {}.", rankings.len(), out.display());
            print_summary(&rankings, 10);
        }
        Commands::Report { csv, out } => {
            let rankings = run_pipeline(&csv, current_year)?;
            let report = report::build_report(&csv, &rankings);
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write report to {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}

fn run_pipeline(csv: &Path, current_year: i32) -> anyhow::Result<Vec<RankedInstitution>> {
    let records = ingest::read_members(csv)?;
    Ok(rank::rank_records(&records, current_year))
}

fn print_summary(rankings: &[RankedInstitution], limit: usize) {
    if rankings.is_empty() {
        println!("No institutions survived filtering.");
        return;
    }

    println!("Top {limit} Consolidated Institutions:");
    for (position, ranked) in rankings.iter().take(limit).enumerate() {
        println!(
            "{}. {} - Score: {:.1}% - Members: {} - Circles: {}",
            position + 1,
            ranked.institution,
            ranked.score,
            ranked.members,
            ranked.circles_led
        );
    }
}
