//! Downtime — extraction of labeled downtime-statistics rows.
//!
//! Independent of section tracking: any trimmed line starting with one of
//! the four fixed metric labels is a candidate, wherever it appears. Rows
//! are accepted as-is in encounter order and never deduplicated.

use super::MULTI_SPACE;
use crate::scan::model::{DowntimeStat, LogReport};
use crate::scan::MIN_ROW_PARTS;

/// The fixed metric labels a statistics row can start with.
pub const METRIC_LABELS: [&str; 4] = [
    "Number Of outages",
    "Total downtime",
    "Downtime per day",
    "Downtime per outage",
];

/// Scan the whole input for labeled metric rows and append them in order.
pub fn stats_pass(content: &str, source_file: &str, report: &mut LogReport) {
    for raw in content.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(stat) = from_line(line, source_file) {
            report.downtime_stats.push(stat);
        }
    }
}

/// Parse one labeled metric row, semicolon-delimited or wide-space
/// delimited. An unrecognized shape under a known label is skipped, and only
/// that row.
pub fn from_line(line: &str, source_file: &str) -> Option<DowntimeStat> {
    if !METRIC_LABELS.iter().any(|label| line.starts_with(label)) {
        return None;
    }

    let parts: Vec<&str> = if line.contains(';') {
        line.split(';').map(str::trim).collect()
    } else {
        MULTI_SPACE.split(line).map(str::trim).collect()
    };

    if parts.len() < MIN_ROW_PARTS {
        return None;
    }

    Some(DowntimeStat {
        source_file: source_file.to_owned(),
        metric: parts[0].to_owned(),
        node_upgrade: parts[1].to_owned(),
        node_manual: parts[2].to_owned(),
        node_spontaneous: parts[3].to_owned(),
        all_node_restarts: parts[4].to_owned(),
        partial_outages: parts[5].to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semicolon_row() {
        let stat = from_line("Total downtime;10;2;1;13;0", "n.log").unwrap();
        assert_eq!(stat.metric, "Total downtime");
        assert_eq!(stat.node_upgrade, "10");
        assert_eq!(stat.node_manual, "2");
        assert_eq!(stat.node_spontaneous, "1");
        assert_eq!(stat.all_node_restarts, "13");
        assert_eq!(stat.partial_outages, "0");
    }

    #[test]
    fn test_wide_space_row() {
        let stat =
            from_line("Number Of outages    4   1   2   7   0", "n.log").unwrap();
        assert_eq!(stat.metric, "Number Of outages");
        assert_eq!(stat.node_upgrade, "4");
        assert_eq!(stat.partial_outages, "0");
    }

    #[test]
    fn test_unlabeled_line_ignored() {
        assert!(from_line("Mean time between outages;1;2;3;4;5", "n").is_none());
    }

    #[test]
    fn test_narrow_labeled_row_skipped() {
        assert!(from_line("Total downtime;10;2", "n").is_none());
        assert!(from_line("Total downtime", "n").is_none());
    }

    #[test]
    fn test_stats_pass_preserves_order_and_repeats() {
        let content = "Total downtime;10;2;1;13;0\n\
                       prose in between\n\
                       Number Of outages;4;1;2;7;0\n\
                       Total downtime;10;2;1;13;0\n";
        let mut report = LogReport::default();
        stats_pass(content, "n.log", &mut report);
        let metrics: Vec<&str> = report
            .downtime_stats
            .iter()
            .map(|s| s.metric.as_str())
            .collect();
        // Statistics rows are never deduplicated.
        assert_eq!(
            metrics,
            vec!["Total downtime", "Number Of outages", "Total downtime"]
        );
    }
}
