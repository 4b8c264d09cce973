use chrono::{Days, NaiveDate};

use crate::types::errors::DateRangeError;

const DEFAULT_START: NaiveDate = NaiveDate::from_ymd_opt(2020, 1, 1).expect("2020-01-01 is a valid date");
const DEFAULT_END: NaiveDate = NaiveDate::from_ymd_opt(2023, 12, 31).expect("2023-12-31 is a valid date");

/// An inclusive span of calendar days that value dates are drawn from.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::StartAfterEnd { start, end })
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days after `start` that still fall inside the range.
    pub fn span_days(&self) -> u64 {
        (self.end - self.start).num_days().unsigned_abs()
    }

    /// Returns the day `offset` days after `start`, saturating at `end`.
    pub fn day_at(&self, offset: u64) -> NaiveDate {
        self.start.checked_add_days(Days::new(offset))
            .filter(|date| *date <= self.end)
            .unwrap_or(self.end)
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            end: DEFAULT_END
        }
    }
}
