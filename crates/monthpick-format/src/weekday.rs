//! Localised weekday header labels.

use chrono::{Days, NaiveDate, NaiveTime, TimeZone, Utc};
use monthpick_core::constants::DAYS_PER_WEEK;
use monthpick_core::date::normalize_weekday;

use crate::locale::parse_locale;

/// Returned in place of weekday names when a locale cannot be resolved.
pub const PLACEHOLDER_WEEKDAY_SYMBOLS: [&str; DAYS_PER_WEEK] = ["🚨", "E", "R", "R", "O", "R", "!"];

const REFERENCE_SUNDAY: NaiveDate = match NaiveDate::from_ymd_opt(2023, 1, 1) {
    Some(date) => date,
    None => panic!("2023-01-01 is a valid date"),
};

/// ## Summary
/// Abbreviated weekday names for `locale`, Sunday first.
///
/// An unknown locale produces [`PLACEHOLDER_WEEKDAY_SYMBOLS`] so the header
/// is visibly wrong without failing the render.
#[must_use]
pub fn weekday_symbols(locale: &str) -> [String; DAYS_PER_WEEK] {
    let Ok(resolved) = parse_locale(locale) else {
        tracing::warn!(locale, "No weekday names for locale, using placeholders");
        return PLACEHOLDER_WEEKDAY_SYMBOLS.map(str::to_string);
    };

    let mut offset = 0;
    [(); DAYS_PER_WEEK].map(|()| {
        let date = REFERENCE_SUNDAY + Days::new(offset);
        offset += 1;
        Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
            .format_localized("%a", resolved)
            .to_string()
    })
}

/// Weekday names for `locale` starting at `first_weekday` (0 = Sunday, wrapped modulo 7).
#[must_use]
pub fn ordered_weekday_symbols(locale: &str, first_weekday: i32) -> [String; DAYS_PER_WEEK] {
    let mut symbols = weekday_symbols(locale);
    symbols.rotate_left(normalize_weekday(first_weekday) as usize);
    symbols
}
