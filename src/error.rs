use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoonError {
    #[error("year {year} outside supported range {min}..={max}")]
    OutOfRange { year: i32, min: i32, max: i32 },

    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("unknown timezone identifier `{0}`")]
    UnknownTimezone(String),

    #[error("local midnight of {0} cannot be resolved")]
    NoLocalMidnight(NaiveDate),

    #[error("timestamp {0} is not representable")]
    TimestampOutOfRange(i64),
}
