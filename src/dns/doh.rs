//! DNS-over-HTTPS probe transport.
//!
//! Sends the raw wire-format query as an HTTP POST body (RFC 8484) and
//! measures wall-clock time until the response is fully received. The
//! response body is never parsed; this tool measures timing only.

use crate::dns::query::build_query;
use crate::dns::types::ProbeResult;
use crate::error::Result;
use reqwest::header::ACCEPT;
use std::time::{Duration, Instant};

/// Media type for DNS wire-format messages over HTTPS.
const DNS_MESSAGE: &str = "application/dns-message";

/// DoH probe client.
///
/// Wraps a `reqwest::Client` with a per-request timeout. One client is
/// shared across all probes so connection setup costs are the same for
/// every server.
#[derive(Debug, Clone)]
pub struct DohClient {
    client: reqwest::Client,
}

impl DohClient {
    /// Create a new DoH client with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Probe `url` with a query for `domain`, timing the round trip.
    ///
    /// Success requires an HTTP 2xx status and a fully received body.
    /// Every failure (connect, TLS, timeout, non-2xx, truncated body)
    /// collapses to `ProbeResult::Failed` for this one probe.
    pub async fn probe(&self, url: &str, domain: &str) -> ProbeResult {
        let query = match build_query(domain) {
            Ok(q) => q,
            Err(e) => {
                tracing::debug!("DoH query build failed for {domain}: {e}");
                return ProbeResult::Failed;
            }
        };

        let start = Instant::now();
        let response = self
            .client
            .post(url)
            .header(ACCEPT, DNS_MESSAGE)
            .body(query)
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => match resp.bytes().await {
                Ok(_) => ProbeResult::Latency(start.elapsed()),
                Err(e) => {
                    tracing::debug!("DoH body read failed for {url}: {e}");
                    ProbeResult::Failed
                }
            },
            Ok(resp) => {
                tracing::debug!("DoH {url} returned status {}", resp.status());
                ProbeResult::Failed
            }
            Err(e) => {
                tracing::debug!("DoH request to {url} failed: {e}");
                ProbeResult::Failed
            }
        }
    }
}
