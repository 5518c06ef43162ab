//! Day-granularity date arithmetic.
//!
//! ## Summary
//! Helpers over `chrono::NaiveDate` used by the grid builder, the classifier
//! and the navigation guard. Arithmetic that would leave chrono's supported
//! range returns the input date unchanged instead of failing; callers treat
//! an unexpected no-change as a benign fallback.

pub mod compare;

use chrono::{
    DateTime, Datelike, Days, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
};

/// A value that can be truncated to a calendar day.
pub trait DayGranular {
    /// Returns the calendar day this value falls on, dropping any time of day.
    fn date_only(&self) -> NaiveDate;
}

impl DayGranular for NaiveDate {
    fn date_only(&self) -> NaiveDate {
        *self
    }
}

impl DayGranular for NaiveDateTime {
    fn date_only(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> DayGranular for DateTime<Tz> {
    /// Truncates in the value's own time zone, not in UTC.
    fn date_only(&self) -> NaiveDate {
        self.date_naive()
    }
}

/// Truncates a date or date-time to day granularity.
#[must_use]
pub fn date_only<D: DayGranular>(value: &D) -> NaiveDate {
    value.date_only()
}

/// Today's date according to the local clock.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// ## Summary
/// Modulus (not remainder) of `value` by `divisor`.
///
/// The result is always in `0..divisor`, so `modulo(-1, 7) == 6` where the
/// `%` operator would give `-1`.
///
/// ## Panics
/// Panics if `divisor` is zero.
#[must_use]
pub const fn modulo(value: i64, divisor: i64) -> i64 {
    value.rem_euclid(divisor)
}

fn or_unchanged(result: Option<NaiveDate>, date: NaiveDate, operation: &'static str) -> NaiveDate {
    result.unwrap_or_else(|| {
        tracing::warn!(%date, operation, "Date arithmetic out of range; keeping input date");
        date
    })
}

/// Adds `count` days to `date`. Negative counts move backward.
#[must_use]
pub fn add_days(date: NaiveDate, count: i64) -> NaiveDate {
    let days = Days::new(count.unsigned_abs());
    let result = if count >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    };
    or_unchanged(result, date, "add_days")
}

/// ## Summary
/// Adds `count` months to `date`. Negative counts move backward.
///
/// The day of month is clamped to the target month's length, so
/// `2022-01-31` plus one month is `2022-02-28`.
#[must_use]
pub fn add_months(date: NaiveDate, count: i32) -> NaiveDate {
    let months = Months::new(count.unsigned_abs());
    let result = if count >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    };
    or_unchanged(result, date, "add_months")
}

/// Adds `count` years to `date`, clamping Feb 29 to Feb 28 in common years.
#[must_use]
pub fn add_years(date: NaiveDate, count: i32) -> NaiveDate {
    match count.checked_mul(12) {
        Some(months) => add_months(date, months),
        None => or_unchanged(None, date, "add_years"),
    }
}

#[must_use]
pub fn previous_day(date: NaiveDate) -> NaiveDate {
    add_days(date, -1)
}

#[must_use]
pub fn next_day(date: NaiveDate) -> NaiveDate {
    add_days(date, 1)
}

/// First calendar day of `date`'s month.
#[must_use]
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    or_unchanged(date.with_day(1), date, "start_of_month")
}

/// Last calendar day of `date`'s month.
#[must_use]
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    let last = (28..=31).rev().find_map(|day| date.with_day(day));
    or_unchanged(last, date, "end_of_month")
}

/// Number of days in `date`'s month (28 through 31).
#[must_use]
pub fn days_in_month(date: NaiveDate) -> u32 {
    end_of_month(date).day()
}

/// Zero-based weekday of `date`, counted from Sunday (`0 = Sunday`, `6 = Saturday`).
#[must_use]
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// ## Summary
/// Normalises a possibly negative or oversized first-weekday offset into
/// `0..7`, so `-1` means Saturday and `8` means Monday.
#[must_use]
pub const fn normalize_weekday(first_weekday: i32) -> u32 {
    first_weekday.rem_euclid(7).unsigned_abs()
}

/// Attaches a time of day to `date`.
#[must_use]
pub fn date_with_time(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    date.and_time(time)
}

/// Attaches the local clock's current time of day to `date`.
#[must_use]
pub fn date_with_current_time(date: NaiveDate) -> NaiveDateTime {
    date_with_time(date, Local::now().time())
}

/// Day of month as displayed in a cell ("17").
#[must_use]
pub fn day_label(date: NaiveDate) -> String {
    date.day().to_string()
}

/// Numeric month without padding ("6").
#[must_use]
pub fn month_label(date: NaiveDate) -> String {
    date.month().to_string()
}

#[must_use]
pub fn year_label(date: NaiveDate) -> String {
    date.year().to_string()
}
