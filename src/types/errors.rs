use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DateRangeError {
    #[error("Date range error: start [{start}] is after end [{end}]")]
    StartAfterEnd {
        start: NaiveDate,
        end: NaiveDate
    }
}
