use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contiguous occupancy interval on the UTC time axis.
///
/// Construction does not validate ordering; ingestion rejects inverted
/// intervals before they reach this type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeInterval {
    /// Create a new interval.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Strict intersection test: `self.start < other.end && other.start < self.end`.
    ///
    /// Equal-boundary touching (one interval ending exactly when the other
    /// begins) does not count as overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Interval length in fractional minutes.
    pub fn duration_minutes(&self) -> f64 {
        (self.end - self.start).num_seconds() as f64 / 60.0
    }

    /// Distance between two interval starts, in fractional hours.
    pub fn start_distance_hours(&self, other: &TimeInterval) -> f64 {
        (other.start - self.start).num_seconds().abs() as f64 / 3600.0
    }
}
