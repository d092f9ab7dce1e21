//! Duration — normalization of restart-duration strings to seconds.
//!
//! The duration column drifted as much as the row formats did. Accepted
//! shapes: `HH:MM:SS`, bare seconds (`123s`), unit combinations (`20m29s`,
//! `1h 2m 3s`), and mixed forms like `1229s (20m29s)` where the explicit
//! leading seconds win to avoid counting the parenthesized echo twice.
//! Anything unparseable normalizes to 0.

use std::sync::LazyLock;

use regex::Regex;

static CLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2}):(\d{2})$").expect("static regex"));

static LEADING_SECONDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s*s\b").expect("static regex"));

static HOURS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*h").expect("static regex"));

static MINUTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*m").expect("static regex"));

static SECONDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*s").expect("static regex"));

/// Interpret a duration string as whole seconds. Totals saturate at
/// `u64::MAX` rather than wrapping.
pub fn parse_duration_secs(raw: &str) -> u64 {
    let raw = raw.trim().to_lowercase();
    if raw.is_empty() {
        return 0;
    }

    if let Some(caps) = CLOCK.captures(&raw) {
        return unit(&caps, 1)
            .saturating_mul(3600)
            .saturating_add(unit(&caps, 2).saturating_mul(60))
            .saturating_add(unit(&caps, 3));
    }

    // Explicit leading seconds win over any parenthesized restatement.
    if let Some(caps) = LEADING_SECONDS.captures(&raw) {
        return unit(&caps, 1);
    }

    let mut total: u64 = 0;
    if let Some(caps) = HOURS.captures(&raw) {
        total = total.saturating_add(unit(&caps, 1).saturating_mul(3600));
    }
    if let Some(caps) = MINUTES.captures(&raw) {
        total = total.saturating_add(unit(&caps, 1).saturating_mul(60));
    }
    if let Some(caps) = SECONDS.captures(&raw) {
        total = total.saturating_add(unit(&caps, 1));
    }
    total
}

fn unit(caps: &regex::Captures<'_>, idx: usize) -> u64 {
    caps.get(idx)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}
