//! Command-line interface (CLI) argument parsing module.
//!
//! This module provides CLI argument parsing using `clap`. It supports
//! running the benchmark, listing the configured resolvers, and
//! exporting the resolver list.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI argument parser using clap derive macro.
///
/// # Example
///
/// ```ignore
/// let cli = Cli::parse();
/// match cli.command {
///     Some(Commands::Run { output, .. }) => { /* ... */ }
///     Some(Commands::List { .. }) => { /* ... */ }
///     None => { /* run with defaults */ }
/// }
/// ```
#[derive(Parser, Debug)]
#[command(
    name = "dnsrank",
    version,
    about = "Benchmark public DNS resolvers over DoH and DoT",
    long_about = "Measures DoH and DoT response latency of public DNS resolvers \
across a list of test domains and writes a report sorted by average latency",
    infer_subcommands = true
)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (only errors)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the dnsrank CLI.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the latency benchmark (default when no command is given).
    ///
    /// Probes every resolver over DoH and DoT for each test domain,
    /// then writes a report sorted by average latency.
    #[command(alias = "r")]
    Run {
        /// Custom resolver list file (JSON format)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Report output path
        #[arg(short, long, default_value = "dns_speed_results.txt")]
        output: PathBuf,

        /// Per-probe timeout in seconds
        #[arg(short, long, default_value = "5")]
        timeout: u64,

        /// Shell out to an external kdig-compatible utility for DoT
        /// instead of the built-in TLS client
        #[arg(long = "dot-command")]
        dot_command: Option<String>,

        /// Override the test domain list (repeatable)
        #[arg(short, long = "domain")]
        domains: Vec<String>,
    },

    /// List the configured resolvers.
    #[command(alias = "l")]
    List {
        /// Custom resolver list file (JSON format)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Export the resolver list as JSON.
    #[command(alias = "e")]
    Export {
        /// Output file path
        #[arg(short, long, default_value = "servers.json")]
        output: PathBuf,
    },
}

/// Parse CLI arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_defaults_to_none() {
        let cli = Cli::parse_from(["dnsrank"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_run_defaults() {
        let cli = Cli::parse_from(["dnsrank", "run"]);
        match cli.command {
            Some(Commands::Run {
                file,
                output,
                timeout,
                dot_command,
                domains,
            }) => {
                assert!(file.is_none());
                assert_eq!(output, PathBuf::from("dns_speed_results.txt"));
                assert_eq!(timeout, 5);
                assert!(dot_command.is_none());
                assert!(domains.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_run_flags() {
        let cli = Cli::parse_from([
            "dnsrank", "run", "--dot-command", "kdig", "--domain", "example.com", "--domain",
            "github.com", "--timeout", "2",
        ]);
        match cli.command {
            Some(Commands::Run {
                timeout,
                dot_command,
                domains,
                ..
            }) => {
                assert_eq!(timeout, 2);
                assert_eq!(dot_command.as_deref(), Some("kdig"));
                assert_eq!(domains, ["example.com", "github.com"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_verbose_quiet_conflict() {
        assert!(Cli::try_parse_from(["dnsrank", "-v", "-q"]).is_err());
    }
}
