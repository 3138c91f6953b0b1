//! Duration Calculator: elapsed minutes between two wall-clock times on the
//! same calendar date.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveTime};

/// Elapsed whole minutes from `start` to `end`, both combined with `date`.
///
/// Fails with `InvalidRange` when `end <= start` (zero duration included):
/// such submissions are rejected and never stored. Seconds are rounded
/// half-up, so the result is always strictly positive on success. With HH:MM
/// input the sub-minute part is always zero, but the rule is fixed so point
/// totals stay deterministic if finer input ever arrives.
pub fn minutes_between(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> AppResult<i64> {
    let start_dt = date.and_time(start);
    let end_dt = date.and_time(end);

    if end_dt <= start_dt {
        return Err(AppError::InvalidRange);
    }

    let secs = (end_dt - start_dt).num_seconds();
    Ok((secs + 30) / 60)
}
