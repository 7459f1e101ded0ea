//! Calendar arithmetic for recurrence steps and pet age.

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeDelta, Utc};

use crate::error::{Result, ScheduleError};
use crate::schema::{CareScheduleRule, RecurrenceUnit};

/// First due date of `rule` for a pet born at `date_of_birth`, or the next one
/// after `last_event_date` when the pet already had this care.
///
/// Without history the base is the birth date advanced by the rule's start
/// age in months; the current time plays no part.
pub fn calculate_next_due_date(
    rule: &CareScheduleRule,
    date_of_birth: DateTime<Utc>,
    last_event_date: Option<DateTime<Utc>>,
) -> Result<DateTime<Utc>> {
    let base = match last_event_date {
        Some(last) => last,
        None => add_months(date_of_birth, i64::from(rule.start_age_months()))?,
    };
    add_interval(base, rule.recurrence.interval, rule.recurrence.unit)
}

/// Advance `base` by `interval` calendar units.
pub fn add_interval(
    base: DateTime<Utc>,
    interval: u32,
    unit: RecurrenceUnit,
) -> Result<DateTime<Utc>> {
    let interval = i64::from(interval);
    match unit {
        RecurrenceUnit::Days => add_days(base, interval),
        RecurrenceUnit::Weeks => add_days(base, interval * 7),
        RecurrenceUnit::Months => add_months(base, interval),
        RecurrenceUnit::Years => add_months(base, interval * 12),
    }
}

fn add_days(base: DateTime<Utc>, days: i64) -> Result<DateTime<Utc>> {
    TimeDelta::try_days(days)
        .and_then(|delta| base.checked_add_signed(delta))
        .ok_or_else(|| out_of_range(base, days, "days"))
}

/// Month arithmetic without end-of-month clamping: a day-of-month past the
/// end of the target month rolls into the next one (Jan 31 + 1 month is
/// Mar 3, or Mar 2 in a leap year).
pub(crate) fn add_months(base: DateTime<Utc>, months: i64) -> Result<DateTime<Utc>> {
    let naive = base.naive_utc();
    let date = naive.date();

    let total = i64::from(date.year()) * 12 + i64::from(date.month0()) + months;
    let year = i32::try_from(total.div_euclid(12)).map_err(|_| out_of_range(base, months, "months"))?;
    let month = total.rem_euclid(12) as u32 + 1;

    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.checked_add_days(Days::new(u64::from(date.day0()))))
        .map(|rolled| rolled.and_time(naive.time()).and_utc())
        .ok_or_else(|| out_of_range(base, months, "months"))
}

/// Whole months between birth and `now`; a month only counts once its
/// day-of-month has been reached. Negative for birth dates in the future.
pub fn age_in_months(date_of_birth: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let mut months = i64::from(now.year() - date_of_birth.year()) * 12
        + i64::from(now.month())
        - i64::from(date_of_birth.month());
    if now.day() < date_of_birth.day() {
        months -= 1;
    }
    months
}

fn out_of_range(base: DateTime<Utc>, amount: i64, unit: &str) -> ScheduleError {
    ScheduleError::DateOutOfRange(format!("{} + {} {}", base.to_rfc3339(), amount, unit))
}
