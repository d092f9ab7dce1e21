//! Classify — per-line signature classification.
//!
//! Every trimmed input line resolves to exactly one [`LineClass`] variant,
//! consumed by a single dispatch step in [`super::parse_report`]. Marker
//! signatures are tested before anything else, and the entry signatures
//! before the exit ones, so a `lga -m 30` echo opens the alarm section even
//! though the generic command-echo exit signature also matches it.

use std::sync::LazyLock;

use regex::Regex;

use super::section::Section;

// ── Line signatures ──────────────────────────────────────────────

static ENTER_ALARM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:lga|lgac)\s+-m\s+30d?").expect("static regex"));

static ENTER_EVENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:lge|lgec)\s+-m\s+30d?").expect("static regex"));

static ENTER_RESTART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:lgd|lgdc)\s+-m\s+30d?").expect("static regex"));

/// Node prompt, e.g. `RBS01>`.
static PROMPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}\w+>").expect("static regex"));

/// Any log-listing command echo, regardless of window modifier.
static COMMAND_ECHO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:lga|lgac|lge|lgec|lgd|lgdc)\s+-m\s+\d+").expect("static regex")
});

/// Decorative separator line (`=====`).
pub(crate) static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^=+$").expect("static regex"));

static TIMESTAMP_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Timestamp").expect("static regex"));

static DATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").expect("static regex"));

/// Full-field date, `YYYY-MM-DD`.
pub(crate) static DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static regex"));

/// Full-field time, `HH:MM:SS`.
pub(crate) static TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}:\d{2}$").expect("static regex"));

/// Combined `YYYY-MM-DD HH:MM:SS` stamp used by one restart-table row shape.
pub(crate) static COMBINED_STAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}\s+\d{2}:\d{2}:\d{2}$").expect("static regex"));

/// Legacy space-delimited alarm/event row.
static LEGACY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2})\s+(\d{2}:\d{2}:\d{2})\s+(AL|EV)\s+([*mMw])\s+(.+)$")
        .expect("static regex")
});

// ── Classification result ────────────────────────────────────────

/// Captured fields of a legacy space-delimited row.
#[derive(Debug, PartialEq, Eq)]
pub struct LegacyRow<'a> {
    pub date_iso: &'a str,
    pub time: &'a str,
    pub token: &'a str,
    pub severity: &'a str,
    pub title: &'a str,
}

/// What one trimmed line means to the primary pass.
#[derive(Debug, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Command echo opening a section.
    Enter(Section),
    /// Prompt or foreign command echo closing the open section.
    Exit,
    /// Blank, decorative, column-header, or out-of-section line.
    Skip,
    /// Semicolon-delimited row, parts trimmed.
    Delimited(Vec<&'a str>),
    /// Legacy space-delimited alarm/event row.
    Legacy(LegacyRow<'a>),
    /// In-section line matching no grammar; tolerated silently.
    Prose,
}

/// Classify one trimmed line given the currently open section.
pub fn classify<'a>(line: &'a str, section: Option<Section>) -> LineClass<'a> {
    if ENTER_ALARM.is_match(line) {
        return LineClass::Enter(Section::Alarm);
    }
    if ENTER_EVENT.is_match(line) {
        return LineClass::Enter(Section::Event);
    }
    if ENTER_RESTART.is_match(line) {
        return LineClass::Enter(Section::RestartEvents);
    }
    if PROMPT.is_match(line) || COMMAND_ECHO.is_match(line) {
        return LineClass::Exit;
    }

    let Some(section) = section else {
        return LineClass::Skip;
    };

    if line.is_empty()
        || SEPARATOR.is_match(line)
        || (TIMESTAMP_HEADER.is_match(line) && !DATE_PREFIX.is_match(line))
    {
        return LineClass::Skip;
    }

    if line.contains(';') {
        return LineClass::Delimited(line.split(';').map(str::trim).collect());
    }

    if matches!(section, Section::Alarm | Section::Event) {
        if let Some(row) = legacy_row(line) {
            return LineClass::Legacy(row);
        }
    }

    LineClass::Prose
}

/// Attempt the legacy space-delimited grammar on its own. Used by the
/// dispatch step when a semicolon row fails its section grammar.
pub fn legacy_row(line: &str) -> Option<LegacyRow<'_>> {
    LEGACY.captures(line).map(|caps| LegacyRow {
        date_iso: caps.get(1).map_or("", |m| m.as_str()),
        time: caps.get(2).map_or("", |m| m.as_str()),
        token: caps.get(3).map_or("", |m| m.as_str()),
        severity: caps.get(4).map_or("", |m| m.as_str()),
        title: caps.get(5).map_or("", |m| m.as_str()),
    })
}
