//! Model — normalized record shapes and the per-parse result bundle.
//!
//! Field values are never null: an absent optional column is stored as an
//! empty string so every record serializes with its full shape. A record's
//! category is fixed at creation; the bundle keeps records in the order they
//! were accepted.

use serde::{Deserialize, Serialize};

use super::dedup::EventBucket;

/// Separator for natural keys. Never occurs in exported columns.
pub const KEY_SEPARATOR: &str = "|";

/// One alarm-log or event-log entry. The two categories share this shape;
/// only the destination list in [`LogReport`] differs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlarmRecord {
    pub source_file: String,
    pub date_iso: String,
    pub time: String,
    /// Alarm-code token (`AL`, `EV`, ...), internal whitespace stripped.
    #[serde(rename = "type")]
    pub alarm_type: String,
    pub severity: String,
    pub object: String,
    pub title: String,
    /// Free text; a trailing case-insensitive `SUPPRESSED` marker is removed.
    pub detail: String,
}

impl AlarmRecord {
    /// Ordered concatenation of every field, used for dedup identity.
    pub fn natural_key(&self) -> String {
        [
            self.source_file.as_str(),
            self.date_iso.as_str(),
            self.time.as_str(),
            self.alarm_type.as_str(),
            self.severity.as_str(),
            self.object.as_str(),
            self.title.as_str(),
            self.detail.as_str(),
        ]
        .join(KEY_SEPARATOR)
    }
}

/// One node-restart event row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestartRecord {
    pub source_file: String,
    pub date_iso: String,
    pub time: String,
    pub type_reason: String,
    pub value: String,
    pub comment: String,
    pub duration: String,
}

impl RestartRecord {
    pub fn natural_key(&self) -> String {
        [
            self.source_file.as_str(),
            self.date_iso.as_str(),
            self.time.as_str(),
            self.type_reason.as_str(),
            self.value.as_str(),
            self.comment.as_str(),
            self.duration.as_str(),
        ]
        .join(KEY_SEPARATOR)
    }
}

/// One labeled downtime-statistics row. Never deduplicated; every labeled
/// metric line is accepted as encountered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DowntimeStat {
    pub source_file: String,
    /// Row label, e.g. `Number Of outages`.
    pub metric: String,
    pub node_upgrade: String,
    pub node_manual: String,
    pub node_spontaneous: String,
    pub all_node_restarts: String,
    pub partial_outages: String,
}

/// The normalized result bundle for one parse invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogReport {
    pub alarm_events: Vec<AlarmRecord>,
    pub event_log_events: Vec<AlarmRecord>,
    pub downtime_stats: Vec<DowntimeStat>,
    pub restart_events: Vec<RestartRecord>,
}

impl LogReport {
    /// The destination list for an alarm/event record.
    pub fn event_list_mut(&mut self, bucket: EventBucket) -> &mut Vec<AlarmRecord> {
        match bucket {
            EventBucket::Alarm => &mut self.alarm_events,
            EventBucket::Event => &mut self.event_log_events,
        }
    }
}
