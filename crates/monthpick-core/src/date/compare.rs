//! Relative date checks ("is this date in next month?").
//!
//! ## Summary
//! Every check takes the reference day explicitly instead of reading the
//! clock, so results are reproducible. Pass [`super::today`] for the usual
//! "relative to now" behaviour.

use chrono::{Datelike, NaiveDate};

use super::{add_days, add_months, add_years, modulo, weekday_index};

/// First day of the week containing `date`, for weeks starting on `first_weekday`.
#[must_use]
pub fn start_of_week(date: NaiveDate, first_weekday: i32) -> NaiveDate {
    let offset = modulo(i64::from(weekday_index(date)) - i64::from(first_weekday), 7);
    add_days(date, -offset)
}

#[must_use]
pub fn is_same_day(date: NaiveDate, other: NaiveDate) -> bool {
    date == other
}

#[must_use]
pub fn is_same_week(date: NaiveDate, other: NaiveDate, first_weekday: i32) -> bool {
    start_of_week(date, first_weekday) == start_of_week(other, first_weekday)
}

#[must_use]
pub fn is_same_month(date: NaiveDate, other: NaiveDate) -> bool {
    date.year() == other.year() && date.month() == other.month()
}

#[must_use]
pub fn is_same_year(date: NaiveDate, other: NaiveDate) -> bool {
    date.year() == other.year()
}

#[must_use]
pub fn is_yesterday(date: NaiveDate, today: NaiveDate) -> bool {
    date == add_days(today, -1)
}

#[must_use]
pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

#[must_use]
pub fn is_tomorrow(date: NaiveDate, today: NaiveDate) -> bool {
    date == add_days(today, 1)
}

#[must_use]
pub fn is_last_week(date: NaiveDate, today: NaiveDate, first_weekday: i32) -> bool {
    is_same_week(date, add_days(today, -7), first_weekday)
}

#[must_use]
pub fn is_this_week(date: NaiveDate, today: NaiveDate, first_weekday: i32) -> bool {
    is_same_week(date, today, first_weekday)
}

#[must_use]
pub fn is_next_week(date: NaiveDate, today: NaiveDate, first_weekday: i32) -> bool {
    is_same_week(date, add_days(today, 7), first_weekday)
}

#[must_use]
pub fn is_last_month(date: NaiveDate, today: NaiveDate) -> bool {
    is_same_month(date, add_months(today, -1))
}

#[must_use]
pub fn is_this_month(date: NaiveDate, today: NaiveDate) -> bool {
    is_same_month(date, today)
}

#[must_use]
pub fn is_next_month(date: NaiveDate, today: NaiveDate) -> bool {
    is_same_month(date, add_months(today, 1))
}

#[must_use]
pub fn is_last_year(date: NaiveDate, today: NaiveDate) -> bool {
    is_same_year(date, add_years(today, -1))
}

#[must_use]
pub fn is_this_year(date: NaiveDate, today: NaiveDate) -> bool {
    is_same_year(date, today)
}

#[must_use]
pub fn is_next_year(date: NaiveDate, today: NaiveDate) -> bool {
    is_same_year(date, add_years(today, 1))
}
