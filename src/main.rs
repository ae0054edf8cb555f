//! Chapter Crawler main entry point
//!
//! This is the command-line interface for the chapter crawler.

use anyhow::Context;
use chapter_crawler::config::{load_config, Config};
use chapter_crawler::crawler::{crawl, Coordinator, CrawlRequest};
use chapter_crawler::output::print_report;
use chapter_crawler::prompt::{prompt_range, prompt_request, prompt_title};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Chapter Crawler: downloads the original text of a web novel chapter by chapter
///
/// Anything not given on the command line (title, start or end chapter) is
/// asked for interactively.
#[derive(Parser, Debug)]
#[command(name = "chapter-crawler")]
#[command(version = "1.0.0")]
#[command(about = "Downloads web novel chapters as text files", long_about = None)]
struct Cli {
    /// Name of the novel (e.g. "Emperor's Domination")
    #[arg(value_name = "TITLE")]
    title: Option<String>,

    /// First chapter to download
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    start: Option<u32>,

    /// Last chapter to download (inclusive)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    end: Option<u32>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Root directory for downloaded novels (overrides the config file)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Pause between requests in milliseconds (overrides the config file)
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show the URLs and files that would be used without downloading anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;
    let request = build_request(&cli)?;

    if cli.dry_run {
        return handle_dry_run(config, &request);
    }

    let report = match crawl(config, &request).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Crawl aborted: {}", e);
            return Err(e.into());
        }
    };

    if !cli.quiet {
        println!();
        print_report(&report);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("chapter_crawler=info,warn"),
            1 => EnvFilter::new("chapter_crawler=debug,info"),
            2 => EnvFilter::new("chapter_crawler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file, if any, and applies command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(output) = &cli.output {
        config.output.root_dir = output.to_string_lossy().into_owned();
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.crawler.request_delay_ms = delay_ms;
    }

    chapter_crawler::config::validate(&config).context("Invalid configuration")?;
    Ok(config)
}

/// Builds the crawl request from arguments, prompting for whatever is missing
fn build_request(cli: &Cli) -> anyhow::Result<CrawlRequest> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    if cli.title.is_none() && cli.start.is_none() && cli.end.is_none() {
        return prompt_request(&mut input, &mut output).context("Failed to read the crawl request");
    }

    let title = match &cli.title {
        Some(title) => title.clone(),
        None => prompt_title(&mut input, &mut output).context("Failed to read the novel title")?,
    };

    let (start, end) = match (cli.start, cli.end) {
        (Some(start), Some(end)) => (start, end),
        _ => prompt_range(&mut input, &mut output).context("Failed to read the chapter range")?,
    };

    CrawlRequest::new(title, start, end).context("Invalid crawl request")
}

/// Handles the --dry-run mode: shows what would be fetched and written
fn handle_dry_run(config: Config, request: &CrawlRequest) -> anyhow::Result<()> {
    let coordinator = Coordinator::new(config)?;
    let config = coordinator.config();

    println!("=== Chapter Crawler Dry Run ===\n");

    println!("Novel Name: {}", request.title());
    println!("Generated Slug: {}", request.slug());
    println!(
        "Chapters: {} through {} ({} total)",
        request.start_chapter(),
        request.end_chapter(),
        request.chapter_count()
    );
    println!("Delay between requests: {}ms", config.crawler.request_delay_ms);
    println!("Request timeout: {}s", config.crawler.timeout_secs);
    println!("User agent: {}", config.user_agent.value);
    println!();

    for chapter in coordinator.plan(request) {
        println!("  {} -> {}", chapter.url, chapter.path.display());
    }

    Ok(())
}
