//! Rescan — section-agnostic safety-net passes.
//!
//! Section boundaries are inferred from heuristic text markers, so a
//! truncated or reordered export can leave well-shaped rows outside any
//! tracked section. These passes re-find such rows independently and push
//! them through the same dedup gate as the primary pass, which makes a
//! double discovery harmless.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::classify::{DATE, SEPARATOR, TIME};
use super::dedup::{DedupGate, EventBucket};
use super::formats::{alarm, restart};
use super::model::LogReport;
use super::MIN_ROW_PARTS;

/// Bounded capture of the labeled restart-events table: from the fixed
/// column header up to the uptime marker or end of input.
static RESTART_TABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)=+\s*Timestamp \(UTC\)\s+RestartType/Reason\s+SwVersion\s+SwRelease\s+RCS Downtime\s+Appl\. Downtime\s+TN Downtime\s+RATs Downtime\s*=+(.*?)(?:Node uptime since last restart:|\z)",
    )
    .expect("static regex")
});

/// Locate the labeled restart-events table block, if present, and extract
/// its rows. Supports the combined-stamp, separate-date, and legacy
/// parenthesized-reason row shapes.
pub fn restart_table_pass(
    content: &str,
    source_file: &str,
    gate: &mut DedupGate,
    report: &mut LogReport,
) {
    let Some(block) = RESTART_TABLE
        .captures(content)
        .and_then(|caps| caps.get(1))
    else {
        return;
    };

    debug!(len = block.as_str().len(), "restart-events table block located");

    for raw in block.as_str().lines() {
        let line = raw.trim();
        if line.is_empty() || SEPARATOR.is_match(line) {
            continue;
        }

        // A semicolon row failing both delimited shapes may still be a
        // legacy row with a stray semicolon in its comment column.
        let record = if line.contains(';') {
            let parts: Vec<&str> = line.split(';').map(str::trim).collect();
            restart::from_combined_stamp(&parts, source_file)
                .or_else(|| restart::from_delimited(&parts, source_file))
                .or_else(|| restart::from_legacy_table_row(line, source_file))
        } else {
            restart::from_legacy_table_row(line, source_file)
        };

        if let Some(record) = record {
            if gate.admit_restart(&record.natural_key()) {
                report.restart_events.push(record);
            }
        }
    }
}

/// Capture any well-shaped semicolon row anywhere in the input, classifying
/// it by its type token since no section context is available: `AL`/`EV`
/// rows land in the alarm/event buckets, anything else is a restart event.
pub fn global_pass(
    content: &str,
    source_file: &str,
    gate: &mut DedupGate,
    report: &mut LogReport,
) {
    for raw in content.lines() {
        let line = raw.trim();
        if line.is_empty() || !line.contains(';') || SEPARATOR.is_match(line) {
            continue;
        }

        let parts: Vec<&str> = line.split(';').map(str::trim).collect();
        if parts.len() < MIN_ROW_PARTS || !DATE.is_match(parts[0]) || !TIME.is_match(parts[1]) {
            continue;
        }

        let token = alarm::strip_whitespace(parts[2]);
        match token.as_str() {
            "AL" | "EV" => {
                let bucket = if token == "AL" {
                    EventBucket::Alarm
                } else {
                    EventBucket::Event
                };
                if let Some(record) = alarm::from_delimited(&parts, source_file) {
                    if gate.admit_event(bucket, &record.natural_key()) {
                        report.event_list_mut(bucket).push(record);
                    }
                }
            }
            _ => {
                if let Some(record) = restart::from_delimited(&parts, source_file) {
                    if gate.admit_restart(&record.natural_key()) {
                        report.restart_events.push(record);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE_HEADER: &str = "\
=====================================================================\n\
Timestamp (UTC)  RestartType/Reason  SwVersion  SwRelease  RCS Downtime  Appl. Downtime  TN Downtime  RATs Downtime\n\
=====================================================================\n";

    fn run_table(content: &str) -> LogReport {
        let mut report = LogReport::default();
        let mut gate = DedupGate::new();
        restart_table_pass(content, "n.log", &mut gate, &mut report);
        report
    }

    #[test]
    fn test_table_combined_stamp_rows() {
        let content = format!(
            "{TABLE_HEADER}2024-02-01 03:00:00;Restart (Upgrade);R44A;21.Q4;2m10s\n\
             Node uptime since last restart: 4 days\n"
        );
        let report = run_table(&content);
        assert_eq!(report.restart_events.len(), 1);
        let ev = &report.restart_events[0];
        assert_eq!(ev.date_iso, "2024-02-01");
        assert_eq!(ev.time, "03:00:00");
        assert_eq!(ev.type_reason, "Restart (Upgrade)");
    }

    #[test]
    fn test_table_separate_date_rows() {
        let content = format!(
            "{TABLE_HEADER}2024-02-01;03:00:00;Restart (Manual);1;ops;45s\n"
        );
        let report = run_table(&content);
        assert_eq!(report.restart_events.len(), 1);
        assert_eq!(report.restart_events[0].duration, "45s");
    }

    #[test]
    fn test_table_legacy_rows() {
        let content = format!(
            "{TABLE_HEADER}2024-02-01 03:00:00 Restart (Spontaneous)  17  watchdog  90s\n"
        );
        let report = run_table(&content);
        assert_eq!(report.restart_events.len(), 1);
        assert_eq!(report.restart_events[0].type_reason, "Restart (Spontaneous)");
    }

    #[test]
    fn test_table_legacy_row_with_semicolon_in_comment() {
        let content = format!(
            "{TABLE_HEADER}2024-02-01 03:00:00 Restart (Spontaneous)  17  watchdog; fired  90s\n"
        );
        let report = run_table(&content);
        assert_eq!(report.restart_events.len(), 1);
        let ev = &report.restart_events[0];
        assert_eq!(ev.type_reason, "Restart (Spontaneous)");
        assert_eq!(ev.comment, "watchdog; fired");
        assert_eq!(ev.duration, "90s");
    }

    #[test]
    fn test_table_bounded_by_uptime_marker() {
        let content = format!(
            "{TABLE_HEADER}2024-02-01;03:00:00;Restart (Manual);1;ops;45s\n\
             Node uptime since last restart: 4 days\n\
             2024-02-02;03:00:00;Restart (Manual);1;ops;45s\n"
        );
        let mut report = LogReport::default();
        let mut gate = DedupGate::new();
        restart_table_pass(&content, "n.log", &mut gate, &mut report);
        // Only the row inside the block; the trailing row is out of bounds.
        assert_eq!(report.restart_events.len(), 1);
        assert_eq!(report.restart_events[0].date_iso, "2024-02-01");
    }

    #[test]
    fn test_no_table_header_no_rows() {
        let report = run_table("2024-02-01 03:00:00;Restart (Upgrade);R44A;21.Q4;2m10s\n");
        assert!(report.restart_events.is_empty());
    }

    fn run_global(content: &str) -> LogReport {
        let mut report = LogReport::default();
        let mut gate = DedupGate::new();
        global_pass(content, "n.log", &mut gate, &mut report);
        report
    }

    #[test]
    fn test_global_classifies_by_type_token() {
        let content = "2024-01-05;14:32:01;AL;m;NodeA;Link down;\n\
                       2024-01-05;14:32:02;EV;w;NodeA;Cell up;\n\
                       2024-01-05;14:32:03;Restart (Manual);1;ops;45s\n";
        let report = run_global(content);
        assert_eq!(report.alarm_events.len(), 1);
        assert_eq!(report.event_log_events.len(), 1);
        assert_eq!(report.restart_events.len(), 1);
    }

    #[test]
    fn test_global_strips_token_whitespace() {
        let report = run_global("2024-01-05;14:32:01;A L;m;NodeA;Link down;\n");
        assert_eq!(report.alarm_events.len(), 1);
        assert_eq!(report.alarm_events[0].alarm_type, "AL");
    }

    #[test]
    fn test_global_skips_malformed_rows() {
        let content = "2024-01-05;14:32:01;AL;m\n\
                       not-a-date;14:32:01;AL;m;a;b\n\
                       ======;======;======;==;==;==\n";
        let report = run_global(content);
        assert!(report.alarm_events.is_empty());
        assert!(report.restart_events.is_empty());
    }

    #[test]
    fn test_global_respects_shared_gate() {
        let mut report = LogReport::default();
        let mut gate = DedupGate::new();
        let content = "2024-01-05;14:32:01;AL;m;NodeA;Link down;\n";
        global_pass(content, "n.log", &mut gate, &mut report);
        global_pass(content, "n.log", &mut gate, &mut report);
        assert_eq!(report.alarm_events.len(), 1);
    }
}
