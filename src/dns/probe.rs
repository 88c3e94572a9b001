//! Probe orchestration.
//!
//! The runner walks the configured servers and test domains in order,
//! issuing one DoH and one DoT probe per (server, domain) pair and
//! collecting per-server reports. Probes run strictly sequentially; each
//! enforces its own timeout, and a failed probe never stops the run.
//!
//! The two transports sit behind small traits so tests can swap in
//! scripted probes without any network.

use crate::dns::doh::DohClient;
use crate::dns::dot::DotClient;
use crate::dns::types::{ProbeResult, ServerReport, ServerSpec};
use crate::error::Result;
use async_trait::async_trait;

/// One DoH measurement against a server for a single domain.
#[async_trait]
pub trait DohProbe {
    async fn probe(&self, server: &ServerSpec, domain: &str) -> Result<ProbeResult>;
}

/// One DoT measurement against a server for a single domain.
#[async_trait]
pub trait DotProbe {
    async fn probe(&self, server: &ServerSpec, domain: &str) -> Result<ProbeResult>;
}

#[async_trait]
impl DohProbe for DohClient {
    async fn probe(&self, server: &ServerSpec, domain: &str) -> Result<ProbeResult> {
        Ok(Self::probe(self, &server.doh_url, domain).await)
    }
}

#[async_trait]
impl DotProbe for DotClient {
    async fn probe(&self, server: &ServerSpec, domain: &str) -> Result<ProbeResult> {
        Self::probe(self, &server.dot_host, server.dot_port, domain).await
    }
}

/// Sequential servers × domains probe loop.
pub struct ProbeRunner<H, T> {
    doh: H,
    dot: T,
}

impl<H: DohProbe, T: DotProbe> ProbeRunner<H, T> {
    /// Create a runner over the two transports.
    pub fn new(doh: H, dot: T) -> Self {
        Self { doh, dot }
    }

    /// Probe every server against every domain and aggregate per server.
    ///
    /// Prints one progress block per server with its average latency or
    /// an error indicator per transport.
    ///
    /// # Errors
    ///
    /// Only fatal transport errors (missing external DoT binary) abort
    /// the run; probe failures are folded into the reports.
    pub async fn run(&self, servers: &[ServerSpec], domains: &[String]) -> Result<Vec<ServerReport>> {
        let mut reports = Vec::with_capacity(servers.len());

        for server in servers {
            println!("Provider: {}", server.name);
            tracing::debug!("probing {} over {} domains", server.name, domains.len());

            let mut doh_samples = Vec::with_capacity(domains.len());
            let mut dot_samples = Vec::with_capacity(domains.len());

            for domain in domains {
                doh_samples.push(self.doh.probe(server, domain).await?);
                dot_samples.push(self.dot.probe(server, domain).await?);
            }

            let report = ServerReport::from_samples(server.clone(), &doh_samples, &dot_samples);

            match report.avg_doh {
                Some(avg) => println!("  DoH average: {:.3} s", avg.as_secs_f64()),
                None => println!("  DoH: error"),
            }
            match report.avg_dot {
                Some(avg) => println!("  DoT average: {:.3} s", avg.as_secs_f64()),
                None => println!("  DoT: error"),
            }
            println!();

            reports.push(report);
        }

        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Scripted DoH probe: a fixed latency per server name.
    struct ScriptedDoh(Vec<(&'static str, ProbeResult)>);

    #[async_trait]
    impl DohProbe for ScriptedDoh {
        async fn probe(&self, server: &ServerSpec, _domain: &str) -> Result<ProbeResult> {
            Ok(self
                .0
                .iter()
                .find(|(name, _)| *name == server.name)
                .map_or(ProbeResult::Failed, |(_, r)| *r))
        }
    }

    struct ScriptedDot(Vec<(&'static str, ProbeResult)>);

    #[async_trait]
    impl DotProbe for ScriptedDot {
        async fn probe(&self, server: &ServerSpec, _domain: &str) -> Result<ProbeResult> {
            Ok(self
                .0
                .iter()
                .find(|(name, _)| *name == server.name)
                .map_or(ProbeResult::Failed, |(_, r)| *r))
        }
    }

    fn two_servers() -> Vec<ServerSpec> {
        vec![
            ServerSpec::new("A", "https://a.test/dns-query", "a.test"),
            ServerSpec::new("B", "https://b.test/dns-query", "b.test"),
        ]
    }

    #[tokio::test]
    async fn test_mocked_two_server_run() {
        let doh = ScriptedDoh(vec![
            ("A", ProbeResult::Latency(Duration::from_millis(100))),
            ("B", ProbeResult::Latency(Duration::from_millis(50))),
        ]);
        let dot = ScriptedDot(vec![
            ("A", ProbeResult::Failed),
            ("B", ProbeResult::Latency(Duration::from_millis(200))),
        ]);

        let runner = ProbeRunner::new(doh, dot);
        let reports = runner
            .run(&two_servers(), &["example.com".to_string()])
            .await
            .unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].avg_doh, Some(Duration::from_millis(100)));
        assert_eq!(reports[0].avg_dot, None);
        assert_eq!(reports[1].avg_doh, Some(Duration::from_millis(50)));
        assert_eq!(reports[1].avg_dot, Some(Duration::from_millis(200)));
    }

    #[tokio::test]
    async fn test_all_failing_server_does_not_abort() {
        // Neither transport ever succeeds for either server.
        let runner = ProbeRunner::new(ScriptedDoh(vec![]), ScriptedDot(vec![]));
        let reports = runner
            .run(&two_servers(), &["example.com".to_string()])
            .await
            .unwrap();

        // Both servers still produce a report, with absent averages.
        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|r| r.avg_doh.is_none() && r.avg_dot.is_none()));
    }

    #[tokio::test]
    async fn test_average_over_multiple_domains() {
        let doh = ScriptedDoh(vec![("A", ProbeResult::Latency(Duration::from_millis(80)))]);
        let dot = ScriptedDot(vec![]);
        let runner = ProbeRunner::new(doh, dot);

        let domains = vec!["example.com".to_string(), "github.com".to_string()];
        let reports = runner.run(&two_servers()[..1].to_vec(), &domains).await.unwrap();

        assert_eq!(reports[0].avg_doh, Some(Duration::from_millis(80)));
    }
}
