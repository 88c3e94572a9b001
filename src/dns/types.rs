//! DNS types and data structures.
//!
//! This module provides the core types used for resolver representation,
//! probe outcomes, and per-server aggregated reports.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default DoT port (RFC 7858).
pub const DEFAULT_DOT_PORT: u16 = 853;

fn default_dot_port() -> u16 {
    DEFAULT_DOT_PORT
}

/// A public DNS resolver under test.
///
/// Holds both transport endpoints for one provider: the DoH URL and the
/// DoT host/port pair. Defined once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerSpec {
    /// Display name (e.g., "Cloudflare DNS", "Google Public DNS")
    pub name: String,
    /// Absolute HTTPS endpoint for DNS-over-HTTPS queries
    pub doh_url: String,
    /// Hostname or literal IP for DNS-over-TLS queries
    pub dot_host: String,
    /// DoT port, conventionally 853
    #[serde(default = "default_dot_port")]
    pub dot_port: u16,
}

impl ServerSpec {
    /// Create a new server spec with the conventional DoT port.
    pub fn new(
        name: impl Into<String>,
        doh_url: impl Into<String>,
        dot_host: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            doh_url: doh_url.into(),
            dot_host: dot_host.into(),
            dot_port: DEFAULT_DOT_PORT,
        }
    }
}

/// Resolver list container, typically loaded from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerList {
    /// List of resolvers
    #[serde(rename = "list")]
    pub servers: Vec<ServerSpec>,
}

impl ServerList {
    /// Create a server list from a vector of specs.
    #[must_use]
    pub fn from_servers(servers: Vec<ServerSpec>) -> Self {
        Self { servers }
    }

    /// Get the number of servers in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.servers.len()
    }

    /// Check if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}

/// Outcome of a single probe for one (server, domain, transport) slot.
///
/// A failed probe carries no duration and is excluded from averaging;
/// failure is never encoded as a zero or negative duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeResult {
    /// The probe completed; round-trip wall-clock time.
    Latency(Duration),
    /// The probe failed (network error, timeout, bad status or exit code).
    Failed,
}

impl ProbeResult {
    /// The measured duration, if the probe succeeded.
    #[must_use]
    pub fn latency(self) -> Option<Duration> {
        match self {
            Self::Latency(d) => Some(d),
            Self::Failed => None,
        }
    }

    /// Check if the probe succeeded.
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Latency(_))
    }
}

/// Aggregated result for one resolver after all its domain probes.
///
/// An average is `Some` iff at least one probe for that transport
/// succeeded. `None` means the resolver is excluded from that
/// transport's ranking entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerReport {
    /// The resolver that was probed
    pub server: ServerSpec,
    /// Mean DoH latency across successful probes, if any succeeded
    pub avg_doh: Option<Duration>,
    /// Mean DoT latency across successful probes, if any succeeded
    pub avg_dot: Option<Duration>,
}

impl ServerReport {
    /// Build a report from the raw probe outcomes of one resolver.
    #[must_use]
    pub fn from_samples(server: ServerSpec, doh: &[ProbeResult], dot: &[ProbeResult]) -> Self {
        Self {
            server,
            avg_doh: average(doh),
            avg_dot: average(dot),
        }
    }
}

/// Arithmetic mean of the successful probe durations, `None` if none
/// succeeded.
#[must_use]
pub fn average(results: &[ProbeResult]) -> Option<Duration> {
    let successes: Vec<Duration> = results.iter().filter_map(|r| r.latency()).collect();
    if successes.is_empty() {
        return None;
    }
    let total: Duration = successes.iter().sum();
    Some(total / successes.len() as u32)
}
