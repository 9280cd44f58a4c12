//! Destination file naming
//!
//! Files are named after their like count. Collisions within one run get a
//! suffix chosen by [`NamingStrategy`].

use crate::primitives::NamingStrategy;
use chrono::{DateTime, Local, NaiveDate, TimeZone, Timelike};
use std::collections::HashSet;
use std::fmt;

/// Extension given to every uploaded file
pub const FILE_EXTENSION: &str = "jpg";

/// Wall-clock moment captured once when a run starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunTimestamp {
    date: NaiveDate,
    hour: u32,
    minute: u32,
    second: u32,
}

impl RunTimestamp {
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }

    pub fn from_datetime<Tz: TimeZone>(moment: &DateTime<Tz>) -> Self {
        Self {
            date: moment.date_naive(),
            hour: moment.hour(),
            minute: moment.minute(),
            second: moment.second(),
        }
    }
}

/// `<yyyy-mm-dd>_<h>_<m>_<s>`, time fields unpadded
impl fmt::Display for RunTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}_{}_{}",
            self.date.format("%Y-%m-%d"),
            self.hour,
            self.minute,
            self.second
        )
    }
}

/// Names already handed out during the current run
#[derive(Debug, Clone)]
pub struct NameRegistry {
    used: HashSet<String>,
    strategy: NamingStrategy,
    timestamp: RunTimestamp,
}

impl NameRegistry {
    pub fn new(strategy: NamingStrategy, timestamp: RunTimestamp) -> Self {
        Self {
            used: HashSet::new(),
            strategy,
            timestamp,
        }
    }

    /// Derive the file stem for a photo and register it.
    ///
    /// With [`NamingStrategy::Literal`] every collision reuses the same
    /// timestamp suffix, so a third photo with the same like count gets the
    /// same stem as the second.
    pub fn assign(&mut self, like_count: u64) -> String {
        let base = like_count.to_string();

        let name = if !self.used.contains(&base) {
            base
        } else {
            match self.strategy {
                NamingStrategy::Literal => format!("{}_{}", base, self.timestamp),
                NamingStrategy::Counter => (1u64..)
                    .map(|n| format!("{}_{}", base, n))
                    .find(|candidate| !self.used.contains(candidate))
                    .unwrap_or(base),
            }
        };

        self.used.insert(name.clone());
        name
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}

/// Stem plus extension
pub fn file_name(stem: &str) -> String {
    format!("{}.{}", stem, FILE_EXTENSION)
}

#[cfg(test)]
mod tests {
    include!("naming.test.rs");
}
