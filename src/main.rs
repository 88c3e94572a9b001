//! dnsrank - DoH/DoT resolver latency benchmark
//!
//! Binary entry point for the dnsrank CLI application.

#![warn(clippy::all, warnings)]
#![warn(clippy::pedantic, clippy::nursery)]

use dnsrank::cli::Commands;
use dnsrank::config::ConfigLoader;
use dnsrank::dns::{DohClient, DotClient, ProbeRunner};
use dnsrank::error::Result;
use dnsrank::report;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Set up logging based on verbosity level.
///
/// # Arguments
///
/// * `verbose` - Enable debug-level logging
/// * `quiet` - Enable error-level only logging
fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"))
    } else if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().without_time())
        .init();
}

/// Run the benchmark and write the sorted report.
async fn run_benchmark(
    file: Option<PathBuf>,
    output: PathBuf,
    timeout_secs: u64,
    dot_command: Option<String>,
    domain_overrides: Vec<String>,
) -> Result<()> {
    let servers = ConfigLoader::load_or_default(file.as_deref())?.servers;
    let domains = if domain_overrides.is_empty() {
        ConfigLoader::default_domains()
    } else {
        domain_overrides
    };

    println!(
        "Testing DoH and DoT latency of {} resolvers over {} domains\n",
        servers.len(),
        domains.len()
    );

    let timeout = Duration::from_secs(timeout_secs);
    let doh = DohClient::new(timeout)?;
    let dot = match dot_command {
        Some(command) => DotClient::external(command, timeout),
        None => DotClient::native(timeout)?,
    };

    let reports = ProbeRunner::new(doh, dot).run(&servers, &domains).await?;

    report::write_report(&output, &reports)?;
    println!("Results saved to '{}'", output.display());

    Ok(())
}

/// List the configured resolvers.
fn run_list(file: Option<PathBuf>) -> Result<()> {
    let servers = ConfigLoader::load_or_default(file.as_deref())?.servers;

    println!("Resolvers ({} total):\n", servers.len());
    println!("{:<30} {:<45} {:<20}", "Name", "DoH URL", "DoT host");
    println!("{}", "-".repeat(95));
    for s in &servers {
        println!("{:<30} {:<45} {:<20}", s.name, s.doh_url, s.dot_host);
    }

    Ok(())
}

/// Main entry point for the dnsrank CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = dnsrank::cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("dnsrank starting...");

    match cli.command {
        Some(Commands::Run {
            file,
            output,
            timeout,
            dot_command,
            domains,
        }) => {
            run_benchmark(file, output, timeout, dot_command, domains).await?;
        }

        Some(Commands::List { file }) => {
            run_list(file)?;
        }

        Some(Commands::Export { output }) => {
            let list = ConfigLoader::default_servers();
            let json = serde_json::to_string_pretty(&list)?;
            std::fs::write(&output, json)?;
            println!("Exported to: {}", output.display());
        }

        None => {
            // Default to a full benchmark run
            run_benchmark(
                None,
                PathBuf::from(report::DEFAULT_OUTPUT),
                5,
                None,
                Vec::new(),
            )
            .await?;
        }
    }

    Ok(())
}
