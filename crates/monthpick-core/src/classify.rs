//! Day state classification.

use crate::constraints::PickerConstraints;
use crate::day::CalendarDay;
use crate::grid::MonthGrid;

/// ## Summary
/// Returns a copy of `day` with `is_booked`, `is_enabled` and `is_selected`
/// derived from `constraints`.
///
/// A booked day is always disabled, whatever the range says. Otherwise the
/// day is enabled when it lies within the inclusive minimum/maximum range.
/// The outside-month, today and note fields are left untouched.
#[must_use]
pub fn classify(day: &CalendarDay, constraints: &PickerConstraints) -> CalendarDay {
    let date = day.date();
    let is_booked = constraints.is_booked(date);
    let is_enabled = !is_booked && constraints.is_in_range(date);

    let mut classified = day.clone();
    classified.is_booked = is_booked;
    classified.is_enabled = is_enabled;
    classified.is_selected = constraints.selected_date() == Some(date);
    classified
}

/// Classifies every cell of `grid`.
#[must_use]
pub fn classify_grid(grid: &MonthGrid, constraints: &PickerConstraints) -> MonthGrid {
    grid.map(|day| classify(day, constraints))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::build_month_grid_at;
    use chrono::NaiveDate;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn day(date: NaiveDate) -> CalendarDay {
        CalendarDay::new(&date, false, ymd(1999, 1, 1))
    }

    fn june() -> PickerConstraints {
        PickerConstraints::new()
            .with_minimum_date(ymd(2022, 6, 1))
            .with_maximum_date(ymd(2022, 6, 30))
    }

    #[test]
    fn range_check() {
        let constraints = june();

        assert!(!classify(&day(ymd(2022, 5, 31)), &constraints).is_enabled);
        assert!(classify(&day(ymd(2022, 6, 15)), &constraints).is_enabled);
        assert!(!classify(&day(ymd(2022, 7, 1)), &constraints).is_enabled);
    }

    #[test]
    fn booked_day_is_never_selectable() {
        for date in [ymd(2022, 5, 20), ymd(2022, 6, 15), ymd(2022, 7, 20)] {
            let constraints = june().with_booked_dates([date]);
            let classified = classify(&day(date), &constraints);

            assert!(classified.is_booked);
            assert!(!classified.is_enabled);
            assert!(!classified.is_selectable());
        }
    }

    #[test]
    fn selection_matches_by_day() {
        let constraints = june().with_selected_date(ymd(2022, 6, 15));

        assert!(classify(&day(ymd(2022, 6, 15)), &constraints).is_selected);
        assert!(!classify(&day(ymd(2022, 6, 16)), &constraints).is_selected);
    }

    #[test]
    fn stale_flags_are_overwritten() {
        let stale = day(ymd(2022, 6, 15))
            .with_booked(true)
            .with_enabled(false)
            .with_selected(true);
        let classified = classify(&stale, &june());

        assert!(!classified.is_booked);
        assert!(classified.is_enabled);
        assert!(!classified.is_selected);
    }

    #[test]
    fn grid_fields_are_preserved() {
        let source = CalendarDay::new(&ymd(2022, 5, 31), true, ymd(2022, 5, 31)).with_note("memo");
        let classified = classify(&source, &june());

        assert!(classified.is_outside_current_month());
        assert!(classified.is_today());
        assert_eq!(classified.note(), Some("memo"));
        assert_eq!(classified.date(), source.date());
    }

    #[test]
    fn classify_is_idempotent() {
        let constraints = june()
            .with_booked_dates([ymd(2022, 6, 10)])
            .with_selected_date(ymd(2022, 6, 12));
        let grid = build_month_grid_at(&ymd(2022, 6, 1), 0, ymd(2022, 6, 12));

        let once = classify_grid(&grid, &constraints);
        let twice = classify_grid(&once, &constraints);
        assert_eq!(once, twice);

        for cell in &once {
            assert_eq!(classify(cell, &constraints), classify(cell, &constraints));
        }
    }

    #[test]
    fn classify_grid_touches_every_cell() {
        let constraints = june();
        let grid = classify_grid(&build_month_grid_at(&ymd(2022, 6, 1), 0, ymd(1999, 1, 1)), &constraints);

        assert!(grid.leading().iter().all(|d| !d.is_enabled));
        assert!(grid.current_month().iter().all(|d| d.is_enabled));
        assert!(grid.trailing().iter().all(|d| !d.is_enabled));
    }
}
