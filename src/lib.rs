//! dnsrank - benchmark public DNS resolvers over DoH and DoT.
//!
//! This crate provides both a library API and a CLI tool for:
//! - Measuring DNS-over-HTTPS response latency (wire-format POST)
//! - Measuring DNS-over-TLS response latency (built-in TLS client, or an
//!   external kdig-compatible utility)
//! - Ranking resolvers by average latency and writing a sorted report
//!
//! # Library Usage
//!
//! ```ignore
//! use dnsrank::{ConfigLoader, DohClient, DotClient, ProbeRunner};
//! use std::time::Duration;
//!
//! let servers = ConfigLoader::default_servers();
//! let domains = ConfigLoader::default_domains();
//!
//! let doh = DohClient::new(Duration::from_secs(5))?;
//! let dot = DotClient::native(Duration::from_secs(5))?;
//! let reports = ProbeRunner::new(doh, dot).run(&servers.servers, &domains).await?;
//!
//! dnsrank::report::write_report("dns_speed_results.txt", &reports)?;
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Run the benchmark with the default resolver set
//! dnsrank
//!
//! # Custom output, shorter timeout, external DoT utility
//! dnsrank run --output results.txt --timeout 3 --dot-command kdig
//!
//! # List / export the resolver set
//! dnsrank list
//! dnsrank export --output servers.json
//! ```

pub mod cli;
pub mod config;
pub mod dns;
pub mod error;
pub mod report;

// Re-export commonly used types
pub use cli::{Cli, Commands};
pub use config::ConfigLoader;
pub use dns::types::{ProbeResult, ServerList, ServerReport, ServerSpec};
pub use dns::{DohClient, DohProbe, DotClient, DotProbe, ProbeRunner};
pub use error::{Error, Result};
