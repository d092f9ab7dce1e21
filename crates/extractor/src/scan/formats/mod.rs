//! Formats — per-category record extractors.

pub mod alarm;
pub mod downtime;
pub mod restart;

use std::sync::LazyLock;

use regex::Regex;

/// Column separator of the legacy fixed-width shapes: a run of two or more
/// whitespace characters.
pub(crate) static MULTI_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("static regex"));
