//! Dedup — per-invocation identity sets.
//!
//! One set per deduplicated category. The same gate instance serves every
//! pass of one parse, so a record discovered both by the sectioned pass and
//! by a rescan yields exactly one output entry. Downtime statistics have no
//! set here on purpose: that category is never deduplicated.

use ahash::AHashSet;

/// Which of the two identically-shaped event categories a record lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventBucket {
    Alarm,
    Event,
}

#[derive(Debug, Default)]
pub struct DedupGate {
    alarms: AHashSet<String>,
    events: AHashSet<String>,
    restarts: AHashSet<String>,
}

impl DedupGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit an alarm/event natural key. Returns `false` for a repeat;
    /// repeats are dropped silently, never reported as errors.
    pub fn admit_event(&mut self, bucket: EventBucket, key: &str) -> bool {
        let set = match bucket {
            EventBucket::Alarm => &mut self.alarms,
            EventBucket::Event => &mut self.events,
        };
        set.insert(key.to_owned())
    }

    /// Admit a restart-event natural key.
    pub fn admit_restart(&mut self, key: &str) -> bool {
        self.restarts.insert(key.to_owned())
    }
}
