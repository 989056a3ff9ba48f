// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (tracing, written to stderr)
// 2. Parse settings from flags / environment variables using clap
// 3. Run the fetch -> queue -> sink pipeline
// 4. Print a summary and exit (0 = success, 2 = the run failed)
//
// Rust concepts used:
// - async/await: Because we need to make many network requests concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;       // src/cli.rs - command-line / environment settings
mod fetch;     // src/fetch/ - HTTP GET and enqueue
mod input;     // src/input/ - reading the URL list
mod pipeline;  // src/pipeline/ - queue and orchestration
mod sink;      // src/sink/ - preview printing and href harvesting

use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use pipeline::RunSummary;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;
use std::io::Write;
use tracing::debug;
use tracing_subscriber::EnvFilter;

// A current-thread runtime: every fetch task and the sink take turns on one
// thread, switching whenever one of them waits on the network or a file
#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain: "GET x failed: connection refused"
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

const DEFAULT_LOG_FILTER: &str = "info";

// Logs go to stderr so stdout only carries previews and the summary.
// The level comes from RUST_LOG (e.g. RUST_LOG=debug), default "info".
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let sink = cli.sink();

    debug!(input = %cli.input.display(), sink = ?sink, "starting");

    let urls = input::read_urls(&cli.input).await?;
    let client = fetch::build_client()?;

    let summary = pipeline::run_pipeline(client, urls, sink, cli.queue_capacity).await?;

    write_summary(std::io::stdout().lock(), &summary, cli.json)?;
    Ok(())
}

// Writes the summary either as plain text or JSON
//
// An empty URL list writes nothing unless JSON was asked for.
fn write_summary<W: Write>(mut out: W, summary: &RunSummary, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(summary)?)?;
    } else if summary.urls > 0 {
        writeln!(out)?;
        writeln!(out, "📊 Summary:")?;
        writeln!(out, "   🔗 URLs fetched: {}", summary.urls)?;
        writeln!(out, "   📄 Pages processed: {}", summary.pages)?;
        writeln!(out, "   ✍️  Hrefs written: {}", summary.hrefs)?;
    }
    Ok(())
}
