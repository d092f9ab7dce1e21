//! Summary — aggregate views over one parsed report.
//!
//! Chart-ready tallies: per-category counts, top titles and reasons,
//! severity distribution, and restart downtime totals per reason. Ties are
//! broken by label so the output is deterministic.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::duration::parse_duration_secs;
use super::model::LogReport;

/// Label placed on blank grouping keys.
const NO_DATA: &str = "N/D";

/// Parallel label/value arrays, largest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopCounts {
    pub labels: Vec<String>,
    pub data: Vec<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub alarm_count: usize,
    pub event_count: usize,
    pub restart_count: usize,
    pub downtime_stat_count: usize,
    pub alarm_top_titles: TopCounts,
    pub event_top_titles: TopCounts,
    /// Alarm severity distribution, upper-cased, not truncated.
    pub alarm_severity: TopCounts,
    pub restart_top_reasons: TopCounts,
    pub restart_top_sources: TopCounts,
    /// Total restart downtime seconds per type/reason.
    pub restart_downtime_by_reason: TopCounts,
}

/// Aggregate one report. `top_n` bounds every list except the severity
/// distribution, which is always complete.
pub fn summarize(report: &LogReport, top_n: usize) -> ReportSummary {
    let severities = report
        .alarm_events
        .iter()
        .map(|r| r.severity.trim().to_uppercase());

    let mut downtime: HashMap<String, u64> = HashMap::new();
    for ev in &report.restart_events {
        let reason = non_blank(ev.type_reason.trim());
        let total = downtime.entry(reason).or_insert(0);
        *total = total.saturating_add(parse_duration_secs(&ev.duration));
    }

    ReportSummary {
        alarm_count: report.alarm_events.len(),
        event_count: report.event_log_events.len(),
        restart_count: report.restart_events.len(),
        downtime_stat_count: report.downtime_stats.len(),
        alarm_top_titles: top_counts(
            report.alarm_events.iter().map(|r| r.title.clone()),
            top_n,
        ),
        event_top_titles: top_counts(
            report.event_log_events.iter().map(|r| r.title.clone()),
            top_n,
        ),
        alarm_severity: top_counts(severities, usize::MAX),
        restart_top_reasons: top_counts(
            report.restart_events.iter().map(|r| r.type_reason.clone()),
            top_n,
        ),
        restart_top_sources: top_counts(
            report.restart_events.iter().map(|r| r.source_file.clone()),
            top_n,
        ),
        restart_downtime_by_reason: ranked(downtime, top_n),
    }
}

fn top_counts(keys: impl Iterator<Item = String>, top_n: usize) -> TopCounts {
    let mut counter: HashMap<String, u64> = HashMap::new();
    for key in keys {
        *counter.entry(non_blank(key.trim())).or_insert(0) += 1;
    }
    ranked(counter, top_n)
}

fn ranked(counter: HashMap<String, u64>, top_n: usize) -> TopCounts {
    let mut pairs: Vec<(String, u64)> = counter.into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    pairs.truncate(top_n);

    TopCounts {
        labels: pairs.iter().map(|(label, _)| label.clone()).collect(),
        data: pairs.iter().map(|(_, count)| *count).collect(),
    }
}

fn non_blank(key: &str) -> String {
    if key.is_empty() {
        NO_DATA.to_owned()
    } else {
        key.to_owned()
    }
}
