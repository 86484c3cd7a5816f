//! Date range value object.
//!
//! The single temporal primitive all conflict logic is built on. Ranges are
//! whole-day and inclusive on both ends: a range's start is anchored to the
//! beginning of its day and its end to the end of its day, so time zones and
//! times of day never enter the comparison.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive range of whole days.
///
/// A missing start makes the range inapplicable: it overlaps nothing, not
/// even itself. A missing end makes the range single-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DateRange {
    /// First day of the range (inclusive). `None` = inapplicable.
    pub start: Option<NaiveDate>,
    /// Last day of the range (inclusive). `None` = same as `start`.
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Creates a multi-day range.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Creates a single-day range.
    pub fn single(day: NaiveDate) -> Self {
        Self {
            start: Some(day),
            end: None,
        }
    }

    /// Whether the range has a start date at all.
    pub fn is_applicable(&self) -> bool {
        self.start.is_some()
    }

    /// Last day of the range, defaulting to the start for single-day ranges.
    pub fn effective_end(&self) -> Option<NaiveDate> {
        self.end.or(self.start)
    }

    /// Number of whole days covered, counting both endpoints.
    ///
    /// Never less than 1 for an applicable range; `None` if inapplicable.
    pub fn day_count(&self) -> Option<i64> {
        let start = self.start?;
        let end = self.effective_end()?;
        Some(((end - start).num_days() + 1).max(1))
    }

    /// Whether two ranges share at least one day.
    ///
    /// Symmetric and reflexive. Overlap against an inapplicable range is
    /// always `false`.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        let (Some(start_a), Some(start_b)) = (self.start, other.start) else {
            return false;
        };
        let end_a = self.effective_end().unwrap_or(start_a);
        let end_b = other.effective_end().unwrap_or(start_b);
        start_a <= end_b && end_a >= start_b
    }

    /// Whether a single day falls inside the range.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.overlaps(&DateRange::single(day))
    }

    /// Rejects ranges whose end precedes their start.
    pub fn validate(&self, entity: &'static str, id: &str) -> EngineResult<()> {
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if end < start {
                return Err(EngineError::InvalidRange {
                    entity,
                    id: id.to_string(),
                    start,
                    end,
                });
            }
        }
        Ok(())
    }
}
