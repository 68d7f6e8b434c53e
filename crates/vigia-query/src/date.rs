//! Date extraction.
//!
//! Patterns are tried in order and the first hit wins. Day and month values
//! are not range-checked: `99/99/2025` yields `2025-99-99`.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static DAY_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([0-9]{2})[/-]([0-9]{2})[/-]([0-9]{4})\b").expect("day-first pattern is valid")
});

static ISO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[0-9]{4}-[0-9]{2}-[0-9]{2}\b").expect("iso pattern is valid")
});

static DAY_FIRST_LOOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([0-9]{1,2})[/-]([0-9]{1,2})[/-]([0-9]{4})\b")
        .expect("loose day-first pattern is valid")
});

/// Extract a `YYYY-MM-DD` date from `text`, if one is written in it.
///
/// 1. `DD/MM/YYYY` or `DD-MM-YYYY`, reordered.
/// 2. `YYYY-MM-DD`, verbatim.
/// 3. `D/M/YYYY` with single-digit day or month, zero-padded.
#[must_use]
pub fn extract_date(text: &str) -> Option<String> {
    if let Some(caps) = DAY_FIRST.captures(text) {
        return Some(format!("{}-{}-{}", &caps[3], &caps[2], &caps[1]));
    }

    if let Some(m) = ISO.find(text) {
        return Some(m.as_str().to_string());
    }

    DAY_FIRST_LOOSE
        .captures(text)
        .map(|caps| format!("{}-{:0>2}-{:0>2}", &caps[3], &caps[2], &caps[1]))
}

/// Like [`extract_date`], falling back to `today`.
#[must_use]
pub fn extract_date_or(text: &str, today: NaiveDate) -> String {
    extract_date(text).unwrap_or_else(|| today.format("%Y-%m-%d").to_string())
}
