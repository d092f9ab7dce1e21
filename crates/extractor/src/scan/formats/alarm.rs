//! Alarm — extraction of alarm-log and event-log rows.
//!
//! Both categories share one record shape and one extraction rule; the
//! caller picks the destination bucket from the open section (or, for the
//! rescan, from the type token itself).

use std::sync::LazyLock;

use regex::Regex;

use crate::scan::classify::{LegacyRow, DATE, TIME};
use crate::scan::model::AlarmRecord;
use crate::scan::MIN_ROW_PARTS;

/// Trailing `SUPPRESSED` marker, any case, with surrounding whitespace.
static SUPPRESSED_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*SUPPRESSED\s*$").expect("static regex"));

static INNER_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

/// Build a record from a trimmed semicolon row:
/// `YYYY-MM-DD;HH:MM:SS;TYPE;SEV;OBJECT;TITLE;DETAIL`.
///
/// Returns `None` when the row is too narrow or the first two fields are
/// not a date and a time; the caller may still try the legacy grammar.
pub fn from_delimited(parts: &[&str], source_file: &str) -> Option<AlarmRecord> {
    if parts.len() < MIN_ROW_PARTS || !DATE.is_match(parts[0]) || !TIME.is_match(parts[1]) {
        return None;
    }

    Some(AlarmRecord {
        source_file: source_file.to_owned(),
        date_iso: parts[0].to_owned(),
        time: parts[1].to_owned(),
        alarm_type: strip_whitespace(parts.get(2).copied().unwrap_or_default()),
        severity: parts.get(3).copied().unwrap_or_default().to_owned(),
        object: parts.get(4).copied().unwrap_or_default().to_owned(),
        title: parts.get(5).copied().unwrap_or_default().to_owned(),
        detail: strip_suppressed(parts.get(6).copied().unwrap_or_default()),
    })
}

/// Build a record from a captured legacy row. The legacy export carried no
/// object or detail columns, so those fields stay empty.
pub fn from_legacy(row: &LegacyRow<'_>, source_file: &str) -> AlarmRecord {
    AlarmRecord {
        source_file: source_file.to_owned(),
        date_iso: row.date_iso.to_owned(),
        time: row.time.to_owned(),
        alarm_type: row.token.to_owned(),
        severity: row.severity.to_owned(),
        object: String::new(),
        title: row.title.trim().to_owned(),
        detail: String::new(),
    }
}

/// Remove all internal whitespace from a type token.
pub fn strip_whitespace(token: &str) -> String {
    INNER_WHITESPACE.replace_all(token, "").into_owned()
}

/// Drop a trailing case-insensitive `SUPPRESSED` marker and trim.
pub fn strip_suppressed(detail: &str) -> String {
    SUPPRESSED_SUFFIX.replace(detail, "").trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimited_row_maps_columns() {
        let parts = vec!["2024-01-05", "14:32:01", "AL", "m", "NodeA", "Link down", "detail"];
        let rec = from_delimited(&parts, "n.log").unwrap();
        assert_eq!(rec.alarm_type, "AL");
        assert_eq!(rec.severity, "m");
        assert_eq!(rec.object, "NodeA");
        assert_eq!(rec.title, "Link down");
        assert_eq!(rec.detail, "detail");
    }

    #[test]
    fn test_missing_detail_column_is_empty() {
        let parts = vec!["2024-01-05", "14:32:01", "AL", "m", "NodeA", "Link down"];
        let rec = from_delimited(&parts, "n.log").unwrap();
        assert_eq!(rec.detail, "");
    }

    #[test]
    fn test_rejects_narrow_rows() {
        let parts = vec!["2024-01-05", "14:32:01", "AL", "m", "NodeA"];
        assert!(from_delimited(&parts, "n.log").is_none());
    }

    #[test]
    fn test_rejects_non_date_prefix() {
        let parts = vec!["today", "14:32:01", "AL", "m", "a", "b"];
        assert!(from_delimited(&parts, "n.log").is_none());
        let parts = vec!["2024-01-05", "noon", "AL", "m", "a", "b"];
        assert!(from_delimited(&parts, "n.log").is_none());
    }

    #[test]
    fn test_type_whitespace_stripped() {
        let parts = vec!["2024-01-05", "14:32:01", "A L", "m", "a", "b"];
        let rec = from_delimited(&parts, "n.log").unwrap();
        assert_eq!(rec.alarm_type, "AL");
    }

    #[test]
    fn test_suppressed_stripped_any_case() {
        assert_eq!(strip_suppressed("flapping port SUPPRESSED"), "flapping port");
        assert_eq!(strip_suppressed("flapping port Suppressed "), "flapping port");
        assert_eq!(strip_suppressed("suppressed"), "");
        assert_eq!(strip_suppressed("not suppressed here"), "not suppressed here");
    }

    #[test]
    fn test_legacy_row_leaves_optional_fields_empty() {
        let row = LegacyRow {
            date_iso: "2024-01-05",
            time: "14:32:01",
            token: "EV",
            severity: "*",
            title: "Board restarted ",
        };
        let rec = from_legacy(&row, "n.log");
        assert_eq!(rec.title, "Board restarted");
        assert_eq!(rec.object, "");
        assert_eq!(rec.detail, "");
    }
}
