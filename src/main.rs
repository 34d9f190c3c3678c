//! catcher-sim - Corpus-driven traffic generator for a request catcher
//!
//! Usage:
//!   catcher-sim
//!   catcher-sim --target http://localhost:8080 --bucket my-test
//!   catcher-sim --bucket demo --password secret123 --pace-ms 0
//!   catcher-sim --list

use std::time::Duration;

use clap::Parser;

use catcher_sim::client::{CatcherClient, DEFAULT_TIMEOUT_SECS};
use catcher_sim::core::{BucketHandle, RunSummary};
use catcher_sim::engine::EmitterEngine;
use catcher_sim::scenarios;

#[derive(Parser)]
#[command(name = "catcher-sim")]
#[command(about = "Fire a fixed corpus of HTTP request shapes at a request catcher")]
struct Cli {
    /// Base URL of the request catcher
    #[arg(short, long, default_value = "http://localhost:9090")]
    target: String,

    /// Bucket to create and fill
    #[arg(short, long, default_value = "ui-test-bucket")]
    bucket: String,

    /// Bucket password
    #[arg(short, long, default_value = "test123")]
    password: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Override every scenario's pacing delay in milliseconds (0 disables pacing)
    #[arg(long)]
    pace_ms: Option<u64>,

    /// Print the run summary as JSON instead of the banner
    #[arg(long)]
    json: bool,

    /// Print the catalog and exit without sending anything
    #[arg(short, long)]
    list: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if cli.list {
        run_list();
        return;
    }

    if !cli.json {
        println!("╔════════════════════════════════════════════════════════════╗");
        println!("║           Request Catcher - Traffic Corpus Emitter         ║");
        println!("╠════════════════════════════════════════════════════════════╣");
        println!("║ Target: {:50} ║", cli.target);
        println!("║ Bucket: {:50} ║", cli.bucket);
        println!("╚════════════════════════════════════════════════════════════╝");
        println!();
    }

    let client = match CatcherClient::new(&cli.target, Duration::from_secs(cli.timeout_secs)) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let bucket = BucketHandle::new(cli.bucket, cli.password);
    let mut engine = EmitterEngine::new(client, bucket);
    if let Some(ms) = cli.pace_ms {
        engine = engine.with_pace_override(Duration::from_millis(ms));
    }

    let catalog = scenarios::catalog();
    if !cli.json {
        println!("Emitting {} scenarios...", catalog.len());
        println!();
    }

    match engine.run(&catalog).await {
        Ok(summary) if cli.json => {
            println!("{}", serde_json::to_string_pretty(&summary).unwrap());
        }
        Ok(summary) => print_summary(engine.bucket(), &summary),
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("hint: start the catcher first, then re-run");
            std::process::exit(1);
        }
    }
}

fn run_list() {
    let catalog = scenarios::catalog();

    println!("\n╔════════════════════════════════════════════════════════════╗");
    println!("║                    Scenario Catalog                        ║");
    println!("╚════════════════════════════════════════════════════════════╝");

    for (name, description) in scenarios::list_categories() {
        println!("\n{name} - {description}");
    }

    println!();
    for (i, scenario) in catalog.iter().enumerate() {
        println!("{:3}. {:7} {}", i + 1, scenario.method, scenario.label);
    }
    println!("\n{} scenarios total", catalog.len());
}

fn print_summary(bucket: &BucketHandle, summary: &RunSummary) {
    println!();
    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║                      Run Complete                          ║");
    println!("╠════════════════════════════════════════════════════════════╣");
    println!("║ Scenarios emitted:   {:37} ║", summary.emitted);
    println!("║ Responses received:  {:37} ║", summary.delivered);
    println!("║ Unreadable replies:  {:37} ║", summary.unreadable);
    println!("║ Connection failures: {:37} ║", summary.unreachable);
    println!("║ Elapsed:             {:35.2}s ║", summary.elapsed.as_secs_f64());
    println!("╚════════════════════════════════════════════════════════════╝");
    println!();
    println!("Bucket:   {}", bucket.name);
    println!("Password: {}", bucket.password);
    println!();
    println!("Open the UI to view the captured requests:");
    println!("  {}", summary.viewer_url);
}
