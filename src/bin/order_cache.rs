//! CLI driver: ingest a JSON order file and optionally print per-security
//! matching sizes, mirroring the reference ingest tool's argument modes.

use std::fs;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::error;

use order_cache::{ingest_parallel, parse_records, OrderCacheBuilder};

/// Load a JSON array of orders into an order cache and report matching sizes.
#[derive(Debug, Parser)]
#[command(name = "order-cache", version, about)]
struct Cli {
    /// Path to a JSON file containing an array of order records.
    file: String,

    /// Number of worker threads used to ingest the file.
    #[arg(long, default_value_t = default_workers())]
    workers: usize,

    /// Print the matching size for each distinct security id seen.
    #[arg(long)]
    query: bool,

    /// Echo each parsed order as it would be stored.
    #[arg(long)]
    verbose: bool,
}

fn default_workers() -> usize {
    std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let contents = match fs::read_to_string(&cli.file) {
        Ok(contents) => contents,
        Err(err) => {
            error!(file = %cli.file, %err, "failed to read input file");
            return ExitCode::FAILURE;
        }
    };

    let records = match parse_records(&contents) {
        Ok(records) => records,
        Err(err) => {
            error!(%err, "failed to parse JSON input");
            return ExitCode::FAILURE;
        }
    };

    if cli.verbose {
        for record in &records {
            println!(
                "Order ID: {}, Security ID: {}, Transaction Type: {}, Amount: {}, User: {}, Company: {}",
                record.ord_id, record.sec_id, record.transaction_type, record.amount, record.user, record.company
            );
        }
    }

    let mut security_ids: Vec<String> = records.iter().map(|r| r.sec_id.clone()).collect();
    security_ids.sort();
    security_ids.dedup();

    let cache = Arc::new(OrderCacheBuilder::new().with_initial_capacity(records.len()).build());
    ingest_parallel(&cache, records, cli.workers);

    println!("{}", security_ids.join(" | "));
    println!(
        "=========================================================================================="
    );

    if cli.query {
        let sizes: Vec<String> =
            security_ids.iter().map(|id| cache.get_matching_size_for_security(id).to_string()).collect();
        println!("{}", sizes.join(" | "));
    }

    ExitCode::SUCCESS
}
