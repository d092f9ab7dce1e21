//! Restart — extraction of node-restart event rows.
//!
//! Three row shapes survive in the wild: a semicolon row with separate date
//! and time fields, a semicolon row whose first field is a combined
//! `DATE TIME` stamp, and a legacy shape with a parenthesized reason
//! followed by wide-space-separated columns. There is no legacy equivalent
//! in the alarm/event space-delimited grammar; the asymmetry is intentional.

use std::sync::LazyLock;

use regex::Regex;

use super::MULTI_SPACE;
use crate::scan::classify::{COMBINED_STAMP, DATE, TIME};
use crate::scan::model::RestartRecord;
use crate::scan::MIN_ROW_PARTS;

/// Legacy row after the stamp: a reason running up to the first `)`,
/// then the remaining columns.
static LEGACY_REASON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^)]+\))\s*(.*)$").expect("static regex"));

static LEGACY_STAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2})\s+(\d{2}:\d{2}:\d{2})\s+(.+)$").expect("static regex")
});

/// Semicolon row with separate date and time fields:
/// `YYYY-MM-DD;HH:MM:SS;Type/Reason;Value;Comment;Duration`.
pub fn from_delimited(parts: &[&str], source_file: &str) -> Option<RestartRecord> {
    if parts.len() < MIN_ROW_PARTS || !DATE.is_match(parts[0]) || !TIME.is_match(parts[1]) {
        return None;
    }

    Some(RestartRecord {
        source_file: source_file.to_owned(),
        date_iso: parts[0].to_owned(),
        time: parts[1].to_owned(),
        type_reason: part(parts, 2),
        value: part(parts, 3),
        comment: part(parts, 4),
        duration: part(parts, 5),
    })
}

/// Semicolon row whose first field is a combined `YYYY-MM-DD HH:MM:SS`
/// stamp; the remaining fields shift left by one.
pub fn from_combined_stamp(parts: &[&str], source_file: &str) -> Option<RestartRecord> {
    if parts.is_empty() || !COMBINED_STAMP.is_match(parts[0]) {
        return None;
    }

    let mut stamp = parts[0].split_whitespace();
    let date_iso = stamp.next().unwrap_or_default();
    let time = stamp.next().unwrap_or_default();

    Some(RestartRecord {
        source_file: source_file.to_owned(),
        date_iso: date_iso.to_owned(),
        time: time.to_owned(),
        type_reason: part(parts, 1),
        value: part(parts, 2),
        comment: part(parts, 3),
        duration: part(parts, 4),
    })
}

/// Legacy table row: `DATE TIME Reason (Detail)  value  comment  duration`.
/// The reason runs through the first closing parenthesis; the rest splits on
/// runs of two or more spaces.
pub fn from_legacy_table_row(line: &str, source_file: &str) -> Option<RestartRecord> {
    let stamp = LEGACY_STAMP.captures(line)?;
    let rest = stamp.get(3).map_or("", |m| m.as_str());
    let reason = LEGACY_REASON.captures(rest)?;

    let type_reason = reason.get(1).map_or("", |m| m.as_str());
    let remaining = reason.get(2).map_or("", |m| m.as_str()).trim();
    let fields: Vec<&str> = MULTI_SPACE.split(remaining).collect();

    Some(RestartRecord {
        source_file: source_file.to_owned(),
        date_iso: stamp.get(1).map_or("", |m| m.as_str()).to_owned(),
        time: stamp.get(2).map_or("", |m| m.as_str()).to_owned(),
        type_reason: type_reason.to_owned(),
        value: part(&fields, 0),
        comment: part(&fields, 1),
        duration: part(&fields, 2),
    })
}

fn part(parts: &[&str], idx: usize) -> String {
    parts.get(idx).copied().unwrap_or_default().to_owned()
}
