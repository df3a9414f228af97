//! File filtering functionality
//!
//! This module provides filters for matching files by exact name,
//! modification time window or inode number. A filter that needs metadata
//! stats the entry itself; a failed stat is simply a non-match.

use std::ffi::OsString;
use std::fs::{self, Metadata};
use std::time::SystemTime;
use log::trace;

use crate::errors::{FindError, FindResult};
use super::time::{self, TimeFilter};
use super::walker::Entry;

/// What a filter found out about a matching entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match {
    /// Name matched
    Name,
    /// Modification window matched, with the computed age in minutes
    Modified { minutes: i64 },
    /// Inode matched
    Inode { number: u64 },
}

/// Trait for file filters
pub trait FileFilter {
    /// Evaluate the entry, returning match details when it matches
    fn evaluate(&self, entry: &Entry<'_>) -> Option<Match>;

    /// Get the filter description
    fn description(&self) -> String;
}

/// Filter for an exact, case-sensitive file name
pub struct NameFilter {
    target: OsString,
}

impl NameFilter {
    pub fn new(target: impl Into<OsString>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

impl FileFilter for NameFilter {
    fn evaluate(&self, entry: &Entry<'_>) -> Option<Match> {
        (entry.name() == self.target.as_os_str()).then_some(Match::Name)
    }

    fn description(&self) -> String {
        format!("name is '{}'", self.target.to_string_lossy())
    }
}

/// Filter for files modified inside a minute window
pub struct MTimeFilter {
    window: TimeFilter,
    reference_time: Option<SystemTime>,
}

impl MTimeFilter {
    /// Create a filter; `reference_time` pins "now", `None` reads the clock per file
    pub fn new(window: TimeFilter, reference_time: Option<SystemTime>) -> Self {
        Self {
            window,
            reference_time,
        }
    }

    fn minutes_ago(&self, entry: &Entry<'_>) -> FindResult<i64> {
        let modified = stat(entry)?
            .modified()
            .map_err(|source| FindError::StatUnavailable {
                path: entry.path().to_path_buf(),
                source,
            })?;
        let now = self.reference_time.unwrap_or_else(SystemTime::now);
        Ok(time::minutes_between(now, modified))
    }
}

impl FileFilter for MTimeFilter {
    fn evaluate(&self, entry: &Entry<'_>) -> Option<Match> {
        let minutes = match self.minutes_ago(entry) {
            Ok(minutes) => minutes,
            Err(err) => {
                trace!("no match: {}", err);
                return None;
            }
        };
        self.window
            .matches(minutes)
            .then_some(Match::Modified { minutes })
    }

    fn description(&self) -> String {
        self.window.to_string()
    }
}

/// Filter for a specific inode number
pub struct InodeFilter {
    requested: i64,
    target: Option<u64>,
}

impl InodeFilter {
    /// Negative numbers are accepted but never match
    pub fn new(requested: i64) -> Self {
        Self {
            requested,
            target: u64::try_from(requested).ok(),
        }
    }
}

impl FileFilter for InodeFilter {
    fn evaluate(&self, entry: &Entry<'_>) -> Option<Match> {
        let target = self.target?;
        let number = match stat(entry).and_then(|meta| inode_of(entry, &meta)) {
            Ok(number) => number,
            Err(err) => {
                trace!("no match: {}", err);
                return None;
            }
        };
        (number == target).then_some(Match::Inode { number })
    }

    fn description(&self) -> String {
        format!("inode is {}", self.requested)
    }
}

/// Metadata of the entry, following symlinks
fn stat(entry: &Entry<'_>) -> FindResult<Metadata> {
    fs::metadata(entry.path()).map_err(|source| FindError::StatUnavailable {
        path: entry.path().to_path_buf(),
        source,
    })
}

#[cfg(unix)]
fn inode_of(_entry: &Entry<'_>, meta: &Metadata) -> FindResult<u64> {
    use std::os::unix::fs::MetadataExt;
    Ok(meta.ino())
}

#[cfg(not(unix))]
fn inode_of(entry: &Entry<'_>, _meta: &Metadata) -> FindResult<u64> {
    Err(FindError::StatUnavailable {
        path: entry.path().to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::Unsupported, "inode numbers unavailable"),
    })
}
