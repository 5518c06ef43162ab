//! Elapsed-time phrases such as "3 hours ago".
//!
//! ## Summary
//! The largest whole calendar unit between two instants is reported, so
//! 38 days is "1 month ago" and 15 days is "2 weeks ago". Phrases are
//! English; there is no locale lookup for them.

use chrono::{Datelike, Months, NaiveDateTime};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;

fn month_index(value: NaiveDateTime) -> i64 {
    i64::from(value.year()) * 12 + i64::from(value.month0())
}

/// Whole calendar months from `earlier` to `later`; `earlier <= later`.
fn whole_months(earlier: NaiveDateTime, later: NaiveDateTime) -> i64 {
    let months = month_index(later) - month_index(earlier);
    if months <= 0 {
        return 0;
    }

    let reached = u32::try_from(months)
        .ok()
        .and_then(|count| earlier.checked_add_months(Months::new(count)));
    match reached {
        Some(reached) if reached <= later => months,
        _ => months - 1,
    }
}

fn phrase(count: i64, unit: &str, is_future: bool) -> String {
    let plural = if count == 1 { "" } else { "s" };
    if is_future {
        format!("in {count} {unit}{plural}")
    } else {
        format!("{count} {unit}{plural} ago")
    }
}

/// ## Summary
/// Describes how long ago `value` was as seen from `relative_to`.
///
/// A `value` after `relative_to` is described as a future offset
/// ("in 2 days").
#[must_use]
pub fn time_elapsed(value: NaiveDateTime, relative_to: NaiveDateTime) -> String {
    let is_future = value > relative_to;
    let (earlier, later) = if is_future {
        (relative_to, value)
    } else {
        (value, relative_to)
    };

    let months = whole_months(earlier, later);
    if months >= 12 {
        return phrase(months / 12, "year", is_future);
    }
    if months > 0 {
        return phrase(months, "month", is_future);
    }

    let seconds = (later - earlier).num_seconds();
    let (count, unit) = [
        (SECONDS_PER_WEEK, "week"),
        (SECONDS_PER_DAY, "day"),
        (SECONDS_PER_HOUR, "hour"),
        (SECONDS_PER_MINUTE, "minute"),
    ]
    .into_iter()
    .find(|(size, _)| seconds >= *size)
    .map_or((seconds, "second"), |(size, unit)| (seconds / size, unit));

    phrase(count, unit, is_future)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    fn start() -> NaiveDateTime {
        at(2022, 6, 30, 13, 18, 0)
    }

    #[test]
    fn seconds_and_minutes() {
        assert_eq!(time_elapsed(start(), at(2022, 6, 30, 13, 18, 53)), "53 seconds ago");
        assert_eq!(time_elapsed(start(), at(2022, 6, 30, 13, 32, 53)), "14 minutes ago");
        assert_eq!(time_elapsed(start(), at(2022, 6, 30, 13, 19, 0)), "1 minute ago");
        assert_eq!(time_elapsed(start(), start()), "0 seconds ago");
    }

    #[test]
    fn hours_days_and_weeks() {
        assert_eq!(time_elapsed(start(), at(2022, 6, 30, 16, 32, 53)), "3 hours ago");
        assert_eq!(time_elapsed(start(), at(2022, 7, 2, 16, 32, 53)), "2 days ago");
        assert_eq!(time_elapsed(start(), at(2022, 7, 15, 16, 32, 53)), "2 weeks ago");
    }

    #[test]
    fn calendar_months_and_years() {
        assert_eq!(time_elapsed(start(), at(2022, 8, 7, 16, 32, 53)), "1 month ago");
        assert_eq!(time_elapsed(start(), at(2022, 7, 30, 13, 18, 0)), "1 month ago");
        assert_eq!(time_elapsed(start(), at(2022, 7, 30, 13, 17, 59)), "4 weeks ago");
        assert_eq!(
            time_elapsed(at(2019, 6, 30, 13, 18, 0), at(2022, 8, 7, 16, 32, 53)),
            "3 years ago"
        );
    }

    #[test]
    fn future_values() {
        assert_eq!(time_elapsed(at(2022, 7, 2, 16, 32, 53), start()), "in 2 days");
        assert_eq!(time_elapsed(at(2023, 7, 1, 0, 0, 0), start()), "in 1 year");
    }
}
