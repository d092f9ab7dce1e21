//! Section — the state machine tracking which log section is open.
//!
//! Sections are opened by command-echo lines (`lga -m 30`, `lge -m 30d`,
//! `lgd -m 30`, with or without the cached-command suffix) and closed by a
//! node prompt or by the same command family with a different window
//! modifier. There is no terminal state; the tracker lives for one parse.

/// The logical section a data line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Alarm log listing (`lga` / `lgac`).
    Alarm,
    /// Event log listing (`lge` / `lgec`).
    Event,
    /// Restart/downtime event listing (`lgd` / `lgdc`).
    RestartEvents,
}

#[derive(Debug, Default)]
pub struct SectionTracker {
    current: Option<Section>,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Section> {
        self.current
    }

    pub fn enter(&mut self, section: Section) {
        self.current = Some(section);
    }

    pub fn exit(&mut self) {
        self.current = None;
    }
}
