//! Options for file finding
//!
//! This module provides options for configuring the file finding process.

use std::time::SystemTime;

/// Default upper bound on simultaneously open directory handles
pub const DEFAULT_MAX_OPEN: usize = 10;

/// Options for configuring the file finding process
#[derive(Debug, Clone)]
pub struct FindOptions {
    /// Fixed "now" used when computing modification age.
    /// `None` reads the wall clock for every file.
    pub reference_time: Option<SystemTime>,

    /// Maximum number of directory handles held open at once
    pub max_open: usize,
}

impl FindOptions {
    /// Create a new FindOptions with default values
    pub fn new() -> Self {
        Self {
            reference_time: None,
            max_open: DEFAULT_MAX_OPEN,
        }
    }

    /// Pin the clock used by `-mmin` evaluation
    pub fn with_reference_time(mut self, reference_time: Option<SystemTime>) -> Self {
        self.reference_time = reference_time;
        self
    }

    /// Set the maximum number of open directory handles (at least 1)
    pub fn with_max_open(mut self, max_open: usize) -> Self {
        self.max_open = max_open.max(1);
        self
    }
}

impl Default for FindOptions {
    fn default() -> Self {
        Self::new()
    }
}
