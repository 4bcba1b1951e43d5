//! Memo Stores - workload runner
//!
//! Replays the range-sum and Fibonacci workloads against the memo stores and
//! prints a JSON report.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use memo_stores::{tasks, Config};

/// Main entry point for the workload runner.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Run the range query and Fibonacci workloads
/// 4. Print the report as pretty JSON on stdout
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "memo_stores=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_capacity={}, array_size={}, query_count={}, fib_target={}",
        config.cache_capacity, config.array_size, config.query_count, config.fib_target
    );

    let report = tasks::run(&config).context("workload run failed")?;
    let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
    println!("{}", json);

    info!("Run complete");
    Ok(())
}
