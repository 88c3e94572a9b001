//! Ranking and report generation.
//!
//! Builds the two per-transport rankings (ascending by average latency,
//! stable on ties, servers without an average excluded) and renders the
//! final text report. The report is written in one shot at the end of
//! the run.

use crate::dns::types::ServerReport;
use crate::error::Result;
use std::fmt::Write as _;
use std::path::Path;
use std::time::Duration;

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "dns_speed_results.txt";

/// DoH-capable servers sorted ascending by average DoH latency.
///
/// Servers with no successful DoH probe are excluded entirely, not
/// placed last. Ties preserve configuration order (stable sort).
#[must_use]
pub fn doh_ranking(reports: &[ServerReport]) -> Vec<(&ServerReport, Duration)> {
    ranking(reports, |r| r.avg_doh)
}

/// DoT-capable servers sorted ascending by average DoT latency.
#[must_use]
pub fn dot_ranking(reports: &[ServerReport]) -> Vec<(&ServerReport, Duration)> {
    ranking(reports, |r| r.avg_dot)
}

fn ranking(
    reports: &[ServerReport],
    avg: impl Fn(&ServerReport) -> Option<Duration>,
) -> Vec<(&ServerReport, Duration)> {
    let mut ranked: Vec<_> = reports.iter().filter_map(|r| avg(r).map(|a| (r, a))).collect();
    ranked.sort_by_key(|(_, a)| *a);
    ranked
}

/// Render the full report text.
///
/// Layout: header, DoH ranking, DoT ranking, then the bare DoH URLs and
/// DoT hosts in ranked order. The DoT lines always print port 853,
/// matching the historical output format regardless of the configured
/// port.
#[must_use]
pub fn render(reports: &[ServerReport]) -> String {
    let doh = doh_ranking(reports);
    let dot = dot_ranking(reports);

    let mut out = String::new();
    out.push_str("=== DNS server report (average time over the test domain list) ===\n\n");

    out.push_str("DoH (DNS-over-HTTPS) - sorted by speed:\n");
    for (report, avg) in &doh {
        let _ = writeln!(
            out,
            "DoH {} {:.3}s {}",
            report.server.doh_url,
            avg.as_secs_f64(),
            report.server.name
        );
    }
    out.push('\n');

    out.push_str("DoT (DNS-over-TLS) - sorted by speed:\n");
    for (report, avg) in &dot {
        let _ = writeln!(
            out,
            "DoT {}:853 {:.3}s {}",
            report.server.dot_host,
            avg.as_secs_f64(),
            report.server.name
        );
    }
    out.push('\n');

    out.push_str("=== DoH addresses sorted by speed ===\n");
    for (report, _) in &doh {
        out.push_str(&report.server.doh_url);
        out.push('\n');
    }
    out.push('\n');

    out.push_str("=== DoT addresses sorted by speed ===\n");
    for (report, _) in &dot {
        out.push_str(&report.server.dot_host);
        out.push('\n');
    }

    out
}

/// Write the rendered report to `path` in one shot.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written; this is
/// one of the few fatal conditions in the program.
pub fn write_report(path: impl AsRef<Path>, reports: &[ServerReport]) -> Result<()> {
    std::fs::write(path.as_ref(), render(reports))?;
    Ok(())
}
