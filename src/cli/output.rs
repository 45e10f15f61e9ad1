//! Output formatting helpers for CLI commands

use crate::inspect::{HealthReport, HealthState};
use crate::peers::{NetworkStatusReport, PeerState};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use std::fmt::Write;

/// Format duration in a human-readable way
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

/// Format a byte count with binary units
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

/// Format a health report as pretty text
pub fn format_health_pretty(report: &HealthReport) -> String {
    let mut output = String::new();

    let status = match report.status {
        HealthState::Healthy => "Healthy".green(),
        HealthState::Error => "Error".red(),
    };

    let _ = writeln!(output, "Status: {}", status);
    let _ = writeln!(output, "Project: {}", report.project_name);
    let _ = writeln!(output, "Version: {}", report.version);
    let _ = writeln!(output, "Files: {} top-level entries", report.file_count);
    let _ = writeln!(
        output,
        "Uptime: {}",
        format_duration(report.uptime_seconds as u64)
    );
    let _ = writeln!(
        output,
        "Memory: {} resident, {} virtual",
        format_bytes(report.memory_stats.rss_bytes),
        format_bytes(report.memory_stats.virtual_bytes)
    );
    let _ = writeln!(output, "Runtime: {}", report.runtime_version);

    output
}

/// Format a network report as a table
pub fn format_network_table(report: &NetworkStatusReport) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Peer", "Status", "Version", "Detail"]);

    for peer in report.iter() {
        let status = match peer.state {
            PeerState::Online => "online".green().to_string(),
            PeerState::Offline => "offline".red().to_string(),
        };
        let version = peer
            .field("version")
            .and_then(|v| v.as_str())
            .unwrap_or("-");
        let detail = match (&peer.error, &peer.remote_status) {
            (Some(error), _) => error.clone(),
            (None, Some(remote)) => remote
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| remote.to_string()),
            (None, None) => String::new(),
        };

        table.add_row(vec![
            Cell::new(&peer.peer_name),
            Cell::new(status),
            Cell::new(version),
            Cell::new(detail),
        ]);
    }

    format!(
        "{}\n{}/{} peers online",
        table,
        report.online_count(),
        report.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::peers::{PeerError, PeerStatus};
    use serde_json::json;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(30), "30s");
        assert_eq!(format_duration(90), "1m 30s");
        assert_eq!(format_duration(3661), "1h 1m 1s");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KiB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.0 MiB");
    }

    #[test]
    fn test_network_table_lists_every_peer() {
        let payload = json!({"status": "healthy", "version": "2.0"});
        let report = NetworkStatusReport::new(vec![
            PeerStatus::online("kamina", payload.as_object().unwrap().clone()),
            PeerStatus::offline("blockchain", &PeerError::HealthCheckFailed(503)),
        ]);

        let table = format_network_table(&report);
        assert!(table.contains("kamina"));
        assert!(table.contains("blockchain"));
        assert!(table.contains("2.0"));
        assert!(table.contains("health check failed"));
        assert!(table.contains("1/2 peers online"));
    }
}
