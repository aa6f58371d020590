//! `factcheck` binary: fetch a random fact and print a credibility
//! report, or assess locally supplied text.

use anyhow::Context;
use clap::Parser;
use factcheck_core::{Assessor, DefaultAssessor};
use factcheck_runtime::{FactChecker, HttpFetcher, API_URL};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "factcheck",
    about = "Fetch a random fact and assess its credibility",
    version
)]
struct Cli {
    /// Assess the given text instead of fetching a fact
    #[arg(long)]
    text: Option<String>,

    /// Override the fact source URL
    #[arg(long, default_value = API_URL)]
    url: String,

    /// Print the assessment as JSON (only with --text)
    #[arg(long, requires = "text")]
    json: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("factcheck error: {err}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    init_telemetry()?;

    let cli = Cli::parse();

    if let Some(text) = cli.text {
        let assessment = DefaultAssessor::default().assess(&text);

        if cli.json {
            println!("{}", serde_json::to_string_pretty(&assessment)?);
        } else {
            println!("score: {}", assessment.score);
            println!("opinion: {}", assessment.opinion);
        }

        return Ok(());
    }

    tracing::debug!(url = %cli.url, "fetching a fact");

    let fetcher = HttpFetcher::new().context("cannot build the HTTP fetcher")?;
    let checker = FactChecker::new(fetcher, DefaultAssessor::default()).with_url(cli.url);

    println!("{}", checker.random_fact());

    Ok(())
}

fn init_telemetry() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
