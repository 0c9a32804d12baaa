//! catalogqa is a CLI tool with two independent commands:
//! 1. `scrape` (and its offline twin `extract`) - Extracts course entries from a
//!    catalog page and saves them to a CSV file
//! 2. `ask` - Answers a question about a CSV file using an LLM model

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Builder;
use indicatif::{ProgressBar, ProgressStyle};
use log::{LevelFilter, debug};
use url::Url;

use catalogqa::{
    InferenceConfig,
    ask::{AskContext, ask},
    constants::{CATALOG_URL, DEFAULT_MODEL, OUTPUT_FILE, PREVIEW_ROWS},
    scrape::{extract_file, scrape_catalog},
};

/// A CLI tool to extract a course catalog to CSV and ask an LLM about CSV files
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The command to execute (scrape, extract or ask)
    #[command(subcommand)]
    command: Command,

    #[arg(long, short, action = clap::ArgAction::Count, help = "Output v(v...)erbosity: error (0), warn (1), info (2), debug (3), trace (4)", global = true, default_value_t = 2)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the course catalog page and save its courses to a CSV file
    Scrape {
        /// The catalog page URL
        #[arg(long, short, default_value = CATALOG_URL)]
        url: String,
        /// Path to the CSV file to write, overwritten if it exists
        #[arg(long, short, default_value = OUTPUT_FILE)]
        output: String,
        /// Number of courses to show as a sample
        #[arg(long, short, default_value_t = PREVIEW_ROWS)]
        preview: usize,
    },
    /// Extract courses from a saved copy of the catalog page
    Extract {
        /// Path to the HTML file
        html_file: String,
        /// Path to the CSV file to write, overwritten if it exists
        #[arg(long, short, default_value = OUTPUT_FILE)]
        output: String,
        /// Number of courses to show as a sample
        #[arg(long, short, default_value_t = PREVIEW_ROWS)]
        preview: usize,
    },
    /// Ask a question about the contents of a CSV file using an LLM model
    Ask {
        /// Path to the CSV file
        csv_file: String,
        /// The question to answer
        question: String,
        /// URL of the LLM model to use, e.g. google://gemini-1.5-pro
        #[arg(long, short, default_value = DEFAULT_MODEL)]
        model: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    match cli.command {
        Command::Scrape {
            url,
            output,
            preview,
        } => {
            let url = Url::parse(&url).map_err(|e| anyhow::anyhow!("Invalid catalog url: {}", e))?;
            let report =
                scrape_catalog(&reqwest::Client::new(), &url, Path::new(&output), preview)
                    .await?;
            debug!("{report:?}");
            Ok(())
        }
        Command::Extract {
            html_file,
            output,
            preview,
        } => {
            let report = extract_file(Path::new(&html_file), Path::new(&output), preview)?;
            debug!("{report:?}");
            Ok(())
        }
        Command::Ask {
            csv_file,
            question,
            model,
        } => handle_ask_command(csv_file, question, model).await,
    }
}

async fn handle_ask_command(csv_file: String, question: String, model: String) -> Result<()> {
    if let Err(err) = dotenvy::dotenv() {
        debug!("No .env file loaded: {err}");
    }

    let config = InferenceConfig::from_env(model)?;
    let provider = config.build_provider()?;
    let ctx = AskContext {
        model: provider.as_ref(),
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .context("Invalid spinner template")?
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    spinner.set_message("Processing");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let response = ask(Path::new(&csv_file), &question, &ctx).await;
    spinner.finish_and_clear();

    let response = response.with_context(|| format!("Failed to answer question about {csv_file}"))?;
    println!("Analysis:\n{}", response.answer_text);

    Ok(())
}
