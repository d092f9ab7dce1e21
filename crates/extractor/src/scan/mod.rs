/// Log scanning and record extraction module
///
/// Turns raw node-log dumps (alarm logs, event logs, restart/downtime
/// reports) into normalized record bundles, tolerating the three export
/// format generations found in the field.
///
/// # Architecture
///
/// - `section.rs`: section state machine driven by command-echo markers
/// - `classify.rs`: per-line signature classification
/// - `formats/`: per-category record extractors
/// - `dedup.rs`: per-invocation identity sets
/// - `rescan.rs`: section-agnostic safety-net passes
/// - `duration.rs`: duration-string normalization
/// - `summary.rs`: per-report aggregates
///
/// # Guarantees
///
/// - One invocation is a pure function of (content, source file)
/// - Unrecognized lines are skipped, never an error
/// - A record is emitted at most once no matter how many passes see it
pub mod classify;
pub mod dedup;
pub mod duration;
pub mod formats;
pub mod model;
pub mod rescan;
pub mod section;
pub mod summary;

use tracing::debug;

use self::classify::LineClass;
use self::dedup::{DedupGate, EventBucket};
use self::model::LogReport;
use self::section::{Section, SectionTracker};

// Minimum delimited-row width shared by every semicolon grammar.
pub const MIN_ROW_PARTS: usize = 6;

/// Parse one log dump into a normalized report.
///
/// Runs the sectioned primary pass, the downtime-statistics pass, the
/// labeled restart-table pass, and the global rescan, in that order, all
/// feeding one [`DedupGate`] so overlapping passes cannot double-count.
pub fn parse_report(content: &str, source_file: &str) -> LogReport {
    let mut report = LogReport::default();
    let mut gate = DedupGate::new();
    let mut tracker = SectionTracker::new();

    for raw in content.lines() {
        let line = raw.trim();

        match classify::classify(line, tracker.current()) {
            LineClass::Enter(section) => tracker.enter(section),
            LineClass::Exit => tracker.exit(),
            LineClass::Skip | LineClass::Prose => {}
            LineClass::Delimited(parts) => {
                dispatch_delimited(&parts, line, tracker.current(), source_file, &mut gate, &mut report);
            }
            LineClass::Legacy(row) => {
                if let Some(bucket) = event_bucket(tracker.current()) {
                    let record = formats::alarm::from_legacy(&row, source_file);
                    if gate.admit_event(bucket, &record.natural_key()) {
                        report.event_list_mut(bucket).push(record);
                    }
                }
            }
        }
    }

    formats::downtime::stats_pass(content, source_file, &mut report);
    rescan::restart_table_pass(content, source_file, &mut gate, &mut report);
    rescan::global_pass(content, source_file, &mut gate, &mut report);

    debug!(
        alarms = report.alarm_events.len(),
        events = report.event_log_events.len(),
        restarts = report.restart_events.len(),
        stats = report.downtime_stats.len(),
        "parse complete"
    );

    report
}

/// Route a semicolon-delimited row through the extractor matching the open
/// section. A row the section grammar rejects falls back to the legacy
/// grammar, which the delimited one takes precedence over.
fn dispatch_delimited(
    parts: &[&str],
    line: &str,
    section: Option<Section>,
    source_file: &str,
    gate: &mut DedupGate,
    report: &mut LogReport,
) {
    match section {
        Some(Section::Alarm) | Some(Section::Event) => {
            let bucket = event_bucket(section).unwrap_or(EventBucket::Alarm);
            if let Some(record) = formats::alarm::from_delimited(parts, source_file) {
                if gate.admit_event(bucket, &record.natural_key()) {
                    report.event_list_mut(bucket).push(record);
                }
            } else if let Some(row) = classify::legacy_row(line) {
                let record = formats::alarm::from_legacy(&row, source_file);
                if gate.admit_event(bucket, &record.natural_key()) {
                    report.event_list_mut(bucket).push(record);
                }
            }
        }
        Some(Section::RestartEvents) => {
            if let Some(record) = formats::restart::from_delimited(parts, source_file) {
                if gate.admit_restart(&record.natural_key()) {
                    report.restart_events.push(record);
                }
            }
        }
        None => {}
    }
}

fn event_bucket(section: Option<Section>) -> Option<EventBucket> {
    match section {
        Some(Section::Alarm) => Some(EventBucket::Alarm),
        Some(Section::Event) => Some(EventBucket::Event),
        _ => None,
    }
}
