//! DNS-over-TLS probe transport.
//!
//! Two interchangeable implementations of the same timing contract:
//!
//! - **Native** (default): open a TCP connection to `host:port`, perform
//!   a TLS handshake verifying the certificate against `host`, and send
//!   one query with the two-byte length framing TCP DNS uses
//!   (RFC 1035 §4.2.2, RFC 7858).
//! - **External**: spawn a kdig-compatible command-line utility and time
//!   it from launch to exit, exactly like the classic shell-out approach.
//!   Stdout and stderr are discarded; only the exit code matters.
//!
//! Both measure wall-clock time for the full round trip and fold every
//! per-probe failure into `ProbeResult::Failed`.

use crate::dns::query::build_query;
use crate::dns::types::ProbeResult;
use crate::error::{Error, Result};
use rustls::pki_types::ServerName;
use rustls::{ClientConfig, RootCertStore};
use std::io::ErrorKind;
use std::process::Stdio;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::process::Command;
use tokio::time::timeout;
use tokio_rustls::TlsConnector;

/// DoT probe client.
#[derive(Clone)]
pub enum DotClient {
    /// Native rustls client with webpki root verification.
    Native {
        connector: TlsConnector,
        timeout: Duration,
    },
    /// Delegate each probe to an external TLS-capable DNS utility.
    External { command: String, timeout: Duration },
}

impl DotClient {
    /// Create a native DoT client verifying against the webpki roots.
    ///
    /// # Errors
    ///
    /// Currently infallible in practice; kept fallible so root-store
    /// construction failures surface as config errors rather than panics.
    pub fn native(timeout: Duration) -> Result<Self> {
        let mut roots = RootCertStore::empty();
        roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
        let config = ClientConfig::builder()
            .with_root_certificates(roots)
            .with_no_client_auth();
        Ok(Self::Native {
            connector: TlsConnector::from(Arc::new(config)),
            timeout,
        })
    }

    /// Create a client that shells out to `command` for each probe.
    #[must_use]
    pub fn external(command: impl Into<String>, timeout: Duration) -> Self {
        Self::External {
            command: command.into(),
            timeout,
        }
    }

    /// Probe `host:port` with a query for `domain`, timing the round trip.
    ///
    /// # Errors
    ///
    /// Only a missing external binary is an error; it aborts the run with
    /// a clear message. Every other failure is a per-probe
    /// `ProbeResult::Failed`.
    pub async fn probe(&self, host: &str, port: u16, domain: &str) -> Result<ProbeResult> {
        match self {
            Self::Native { connector, timeout } => {
                Ok(probe_native(connector, *timeout, host, port, domain).await)
            }
            Self::External { command, timeout } => {
                probe_external(command, *timeout, host, port, domain).await
            }
        }
    }
}

async fn probe_native(
    connector: &TlsConnector,
    deadline: Duration,
    host: &str,
    port: u16,
    domain: &str,
) -> ProbeResult {
    let query = match build_query(domain) {
        Ok(q) => q,
        Err(e) => {
            tracing::debug!("DoT query build failed for {domain}: {e}");
            return ProbeResult::Failed;
        }
    };

    let start = Instant::now();
    match timeout(deadline, exchange(connector, host, port, &query)).await {
        Ok(Ok(())) => ProbeResult::Latency(start.elapsed()),
        Ok(Err(e)) => {
            tracing::debug!("DoT exchange with {host}:{port} failed: {e}");
            ProbeResult::Failed
        }
        Err(_) => {
            tracing::debug!("DoT probe of {host}:{port} timed out");
            ProbeResult::Failed
        }
    }
}

/// Connect, handshake, send one length-prefixed query, and read the
/// length-prefixed response. The response bytes are discarded unparsed.
async fn exchange(
    connector: &TlsConnector,
    host: &str,
    port: u16,
    query: &[u8],
) -> std::io::Result<()> {
    let tcp = TcpStream::connect((host, port)).await?;
    let server_name = ServerName::try_from(host.to_string())
        .map_err(|e| std::io::Error::new(ErrorKind::InvalidInput, e))?;
    let mut tls = connector.connect(server_name, tcp).await?;

    tls.write_all(&(query.len() as u16).to_be_bytes()).await?;
    tls.write_all(query).await?;
    tls.flush().await?;

    let mut len_buf = [0u8; 2];
    tls.read_exact(&mut len_buf).await?;
    let mut response = vec![0u8; usize::from(u16::from_be_bytes(len_buf))];
    tls.read_exact(&mut response).await?;
    Ok(())
}

/// Argument contract for kdig-compatible utilities: target, port, TLS
/// with CA verification, expected TLS hostname, then the query name.
fn external_args(host: &str, port: u16, domain: &str) -> Vec<String> {
    vec![
        format!("@{host}"),
        "-p".to_string(),
        port.to_string(),
        "+tls-ca".to_string(),
        format!("+tls-host={host}"),
        domain.to_string(),
    ]
}

async fn probe_external(
    command: &str,
    deadline: Duration,
    host: &str,
    port: u16,
    domain: &str,
) -> Result<ProbeResult> {
    let start = Instant::now();
    let spawned = Command::new(command)
        .args(external_args(host, port, domain))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    let mut child = match spawned {
        Ok(child) => child,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::config(format!(
                "DoT utility '{command}' not found on this system"
            )));
        }
        Err(e) => {
            tracing::debug!("failed to launch '{command}': {e}");
            return Ok(ProbeResult::Failed);
        }
    };

    match timeout(deadline, child.wait()).await {
        Ok(Ok(status)) if status.success() => Ok(ProbeResult::Latency(start.elapsed())),
        Ok(Ok(status)) => {
            tracing::debug!("'{command}' for {host}:{port} exited with {status}");
            Ok(ProbeResult::Failed)
        }
        Ok(Err(e)) => {
            tracing::debug!("waiting on '{command}' failed: {e}");
            Ok(ProbeResult::Failed)
        }
        Err(_) => {
            child.kill().await.ok();
            tracing::debug!("'{command}' for {host}:{port} timed out");
            Ok(ProbeResult::Failed)
        }
    }
}
