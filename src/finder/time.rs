//! Modification time windows
//!
//! A `-mmin` argument is a signed magnitude: `-N` selects files modified
//! within the last N minutes, `+N` files modified more than N minutes ago,
//! and a bare `N` files modified exactly N whole minutes ago.

use std::fmt;
use std::time::SystemTime;

const NANOS_PER_MINUTE: u128 = 60_000_000_000;

/// How the threshold of a `TimeFilter` is compared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeMode {
    /// Modified exactly `threshold` minutes ago
    Exact,
    /// Modified no more than `|threshold|` minutes ago
    WithinLast,
    /// Modified more than `threshold` minutes ago
    OlderThan,
}

/// A parsed `-mmin` argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeFilter {
    pub threshold: i64,
    pub mode: TimeMode,
}

impl TimeFilter {
    /// Parse a signed-magnitude argument. Never fails: unparsable input
    /// becomes a zero threshold.
    pub fn parse(arg: &str) -> Self {
        let mode = match arg.chars().next() {
            Some('-') => TimeMode::WithinLast,
            Some('+') => TimeMode::OlderThan,
            _ => TimeMode::Exact,
        };
        Self {
            threshold: parse_long(arg),
            mode,
        }
    }

    /// Whether a file modified `minutes_ago` whole minutes ago falls in the window.
    ///
    /// A zero threshold outside exact mode never matches.
    pub fn matches(&self, minutes_ago: i64) -> bool {
        match self.mode {
            TimeMode::Exact => minutes_ago == self.threshold,
            TimeMode::WithinLast => {
                self.threshold < 0 && minutes_ago.saturating_add(self.threshold) <= 0
            }
            TimeMode::OlderThan => self.threshold > 0 && minutes_ago > self.threshold,
        }
    }

    /// The one-line description printed before a non-exact search
    pub fn banner(&self) -> Option<String> {
        let minutes = self.threshold.unsigned_abs();
        match self.mode {
            TimeMode::Exact => None,
            TimeMode::WithinLast => Some(format!(
                "The files below have been modified in the last {} minutes.",
                minutes
            )),
            TimeMode::OlderThan => Some(format!(
                "The files below have been modified before {} minutes.",
                minutes
            )),
        }
    }
}

impl fmt::Display for TimeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            TimeMode::Exact => write!(f, "modified exactly {} minutes ago", self.threshold),
            TimeMode::WithinLast => write!(f, "modified within the last {} minutes", self.threshold.unsigned_abs()),
            TimeMode::OlderThan => write!(f, "modified more than {} minutes ago", self.threshold),
        }
    }
}

/// Whole minutes elapsed from `modified` to `now`, rounded toward negative
/// infinity. Future timestamps give negative values.
pub fn minutes_between(now: SystemTime, modified: SystemTime) -> i64 {
    match now.duration_since(modified) {
        Ok(elapsed) => clamp(elapsed.as_nanos() / NANOS_PER_MINUTE),
        Err(ahead) => {
            let ahead = ahead.duration().as_nanos();
            -clamp(ahead.div_ceil(NANOS_PER_MINUTE))
        }
    }
}

fn clamp(minutes: u128) -> i64 {
    i64::try_from(minutes).unwrap_or(i64::MAX)
}

/// Base-10 integer prefix of `s`: leading whitespace, an optional sign and
/// the longest run of digits. Anything else is ignored, no digits yields 0
/// and overflow saturates.
pub fn parse_long(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(digit - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value
}
