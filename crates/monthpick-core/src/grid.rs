//! Month grid construction.
//!
//! ## Summary
//! A month is always rendered as six weeks of seven days: the trailing days of
//! the previous month, every day of the anchor month, then leading days of the
//! next month until 42 cells are filled.

use chrono::NaiveDate;

use crate::constants::{DAYS_PER_WEEK, GRID_CELL_COUNT};
use crate::date::{
    self, DayGranular, days_in_month, end_of_month, next_day, normalize_weekday, start_of_month,
    weekday_index,
};
use crate::day::CalendarDay;

/// The 42 day cells of one month, in chronological order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month_start: NaiveDate,
    leading_count: usize,
    current_count: usize,
    days: [CalendarDay; GRID_CELL_COUNT],
}

impl MonthGrid {
    /// First day of the anchor month.
    #[must_use]
    pub const fn month_start(&self) -> NaiveDate {
        self.month_start
    }

    #[must_use]
    pub const fn days(&self) -> &[CalendarDay; GRID_CELL_COUNT] {
        &self.days
    }

    /// Cells belonging to the previous month.
    #[must_use]
    pub fn leading(&self) -> &[CalendarDay] {
        &self.days[..self.leading_count]
    }

    /// Cells belonging to the anchor month.
    #[must_use]
    pub fn current_month(&self) -> &[CalendarDay] {
        &self.days[self.leading_count..self.leading_count + self.current_count]
    }

    /// Cells belonging to the next month.
    #[must_use]
    pub fn trailing(&self) -> &[CalendarDay] {
        &self.days[self.leading_count + self.current_count..]
    }

    #[must_use]
    pub const fn first(&self) -> &CalendarDay {
        &self.days[0]
    }

    #[must_use]
    pub const fn last(&self) -> &CalendarDay {
        &self.days[GRID_CELL_COUNT - 1]
    }

    /// The grid as six rows of seven days.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks_exact(DAYS_PER_WEEK)
    }

    /// Looks up the cell for `date`, if the grid shows it.
    #[must_use]
    pub fn find(&self, date: NaiveDate) -> Option<&CalendarDay> {
        self.days.iter().find(|day| day.date() == date)
    }

    /// ## Summary
    /// Returns a new grid with every cell passed through `f`.
    ///
    /// `f` must keep each cell's date; the segment boundaries are carried over
    /// unchanged.
    #[must_use]
    pub fn map(&self, mut f: impl FnMut(&CalendarDay) -> CalendarDay) -> Self {
        let mut cells = self.days.iter();
        let days = std::array::from_fn(|_| {
            // Both arrays have GRID_CELL_COUNT elements
            cells.next().map(&mut f).unwrap_or_else(|| self.last().clone())
        });
        Self {
            month_start: self.month_start,
            leading_count: self.leading_count,
            current_count: self.current_count,
            days,
        }
    }
}

impl<'a> IntoIterator for &'a MonthGrid {
    type Item = &'a CalendarDay;
    type IntoIter = std::slice::Iter<'a, CalendarDay>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

/// ## Summary
/// Number of previous-month days shown before the first of `anchor`'s month.
///
/// Always in `1..=7`: a month that already starts on `first_weekday` gets a
/// full leading week instead of none.
#[must_use]
pub fn leading_day_count(anchor: NaiveDate, first_weekday: i32) -> u32 {
    let start_weekday = weekday_index(start_of_month(anchor));
    let offset = (start_weekday + 7 - normalize_weekday(first_weekday)) % 7;
    if offset == 0 { 7 } else { offset }
}

/// Number of next-month days needed to fill the grid to 42 cells.
#[must_use]
pub fn trailing_day_count(anchor: NaiveDate, first_weekday: i32) -> usize {
    let used = leading_day_count(anchor, first_weekday) + days_in_month(anchor);
    GRID_CELL_COUNT.saturating_sub(used as usize)
}

/// ## Summary
/// The previous month's days shown at the start of the grid, oldest first.
///
/// Every returned day is flagged outside the current month.
#[must_use]
pub fn previous_month_days(
    anchor: NaiveDate,
    first_weekday: i32,
    today: NaiveDate,
) -> Vec<CalendarDay> {
    let start = start_of_month(anchor);
    let count = leading_day_count(anchor, first_weekday);

    let mut days = Vec::with_capacity(count as usize);
    let mut cursor = start;
    for _ in 0..count {
        cursor = date::previous_day(cursor);
        days.push(CalendarDay::new(&cursor, true, today));
    }
    days.reverse();
    days
}

/// Every day of `anchor`'s month, flagged inside the current month.
#[must_use]
pub fn current_month_days(anchor: NaiveDate, today: NaiveDate) -> Vec<CalendarDay> {
    let count = days_in_month(anchor);

    let mut days = Vec::with_capacity(count as usize);
    let mut cursor = start_of_month(anchor);
    for _ in 0..count {
        days.push(CalendarDay::new(&cursor, false, today));
        cursor = next_day(cursor);
    }
    days
}

/// The next month's days that complete the grid, flagged outside the current month.
#[must_use]
pub fn next_month_days(anchor: NaiveDate, first_weekday: i32, today: NaiveDate) -> Vec<CalendarDay> {
    let count = trailing_day_count(anchor, first_weekday);

    let mut days = Vec::with_capacity(count);
    let mut cursor = end_of_month(anchor);
    for _ in 0..count {
        cursor = next_day(cursor);
        days.push(CalendarDay::new(&cursor, true, today));
    }
    days
}

/// Builds the grid for `anchor`'s month, using the local clock for "today".
#[must_use]
pub fn build_month_grid<D: DayGranular>(anchor: &D, first_weekday: i32) -> MonthGrid {
    build_month_grid_at(anchor, first_weekday, date::today())
}

/// ## Summary
/// Builds the 42-cell grid for `anchor`'s month.
///
/// Only the year and month of `anchor` matter. `first_weekday` is a zero-based
/// offset from Sunday and may be negative or larger than 6; it is reduced
/// modulo 7. `today` decides which cell carries `is_today`.
#[must_use]
pub fn build_month_grid_at<D: DayGranular>(
    anchor: &D,
    first_weekday: i32,
    today: NaiveDate,
) -> MonthGrid {
    let month_start = start_of_month(anchor.date_only());

    let mut cells = previous_month_days(month_start, first_weekday, today);
    let leading_count = cells.len();
    cells.extend(current_month_days(month_start, today));
    let current_count = cells.len() - leading_count;
    cells.extend(next_month_days(month_start, first_weekday, today));

    let days = fill_grid(cells, month_start, today);

    tracing::trace!(
        %month_start,
        first_weekday,
        leading_count,
        current_count,
        "Built month grid"
    );

    MonthGrid {
        month_start,
        leading_count,
        current_count,
        days,
    }
}

/// Converts the concatenated segments into the fixed grid. Segments of the
/// wrong total length are truncated, or padded with the days that follow.
fn fill_grid(
    cells: Vec<CalendarDay>,
    month_start: NaiveDate,
    today: NaiveDate,
) -> [CalendarDay; GRID_CELL_COUNT] {
    match <[CalendarDay; GRID_CELL_COUNT]>::try_from(cells) {
        Ok(days) => days,
        Err(cells) => {
            tracing::warn!(len = cells.len(), %month_start, "Month grid segments do not fill the grid");
            let mut cursor = cells.last().map_or(month_start, CalendarDay::date);
            let mut cells = cells.into_iter();
            std::array::from_fn(|_| {
                cells.next().unwrap_or_else(|| {
                    cursor = next_day(cursor);
                    CalendarDay::new(&cursor, true, today)
                })
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn not_today() -> NaiveDate {
        ymd(1999, 1, 1)
    }

    fn outside(date: NaiveDate) -> CalendarDay {
        CalendarDay::new(&date, true, not_today())
    }

    #[test]
    fn june_2022_previous_month_days() {
        assert_eq!(
            previous_month_days(ymd(2022, 6, 17), 0, not_today()),
            vec![
                outside(ymd(2022, 5, 29)),
                outside(ymd(2022, 5, 30)),
                outside(ymd(2022, 5, 31)),
            ]
        );
    }

    #[test]
    fn april_2022_next_month_days() {
        let expected: Vec<_> = (1..=7).map(|d| outside(ymd(2022, 5, d))).collect();
        assert_eq!(next_month_days(ymd(2022, 4, 17), 0, not_today()), expected);
    }

    #[test]
    fn current_month_day_counts() {
        assert_eq!(current_month_days(ymd(2022, 6, 17), not_today()).len(), 30);
        assert_eq!(current_month_days(ymd(2022, 7, 17), not_today()).len(), 31);
        assert_eq!(current_month_days(ymd(2023, 1, 1), not_today()).len(), 31);
        assert_eq!(current_month_days(ymd(2024, 2, 1), not_today()).len(), 29);
    }

    #[test_log::test]
    fn june_2022_full_grid() {
        let grid = build_month_grid_at(&ymd(2022, 6, 17), 0, not_today());

        assert_eq!(grid.days().len(), 42);
        assert_eq!(grid.first(), &outside(ymd(2022, 5, 29)));
        assert_eq!(grid.last(), &outside(ymd(2022, 7, 9)));
        assert_eq!(grid.current_month().len(), 30);
        assert_eq!(grid.leading().len(), 3);
        assert_eq!(grid.trailing().len(), 9);
        assert_eq!(grid.month_start(), ymd(2022, 6, 1));
    }

    #[test]
    fn april_2022_trailing_segment() {
        let grid = build_month_grid_at(&ymd(2022, 4, 17), 0, not_today());
        let trailing = grid.trailing();

        assert_eq!(trailing.len(), 7);
        assert_eq!(trailing[0].date(), ymd(2022, 5, 1));
        assert_eq!(trailing[6].date(), ymd(2022, 5, 7));
    }

    #[test]
    fn week_starting_monday_begins_on_monday() {
        let grid = build_month_grid_at(&ymd(2022, 7, 17), 1, not_today());
        assert_eq!(weekday_index(grid.first().date()), 1);
    }

    #[test]
    fn every_row_starts_on_the_first_weekday() {
        for first_weekday in -8..=8 {
            let grid = build_month_grid_at(&ymd(2022, 9, 10), first_weekday, not_today());
            for week in grid.weeks() {
                assert_eq!(
                    weekday_index(week[0].date()),
                    normalize_weekday(first_weekday),
                    "first_weekday = {first_weekday}"
                );
            }
        }
    }

    #[test]
    fn aligned_month_gets_a_full_leading_week() {
        // 2023-01-01 is a Sunday, 2022-08-01 a Monday
        let sunday_start = build_month_grid_at(&ymd(2023, 1, 15), 0, not_today());
        assert_eq!(sunday_start.leading().len(), 7);
        assert_eq!(sunday_start.first().date(), ymd(2022, 12, 25));

        let monday_start = build_month_grid_at(&ymd(2022, 8, 15), 1, not_today());
        assert_eq!(monday_start.leading().len(), 7);
        assert_eq!(monday_start.trailing().len(), 4);
    }

    #[test]
    fn grids_are_contiguous_and_cover_the_month() {
        for year in [2021, 2022, 2023, 2024] {
            for month in 1..=12 {
                for first_weekday in 0..7 {
                    let anchor = ymd(year, month, 15);
                    let grid = build_month_grid_at(&anchor, first_weekday, not_today());

                    assert_eq!(grid.days().len(), 42);
                    for pair in grid.days().windows(2) {
                        assert_eq!(next_day(pair[0].date()), pair[1].date());
                    }

                    let inside: Vec<_> = grid
                        .days()
                        .iter()
                        .filter(|day| !day.is_outside_current_month())
                        .collect();
                    assert_eq!(inside.len(), days_in_month(anchor) as usize);
                    assert_eq!(inside[0].date(), start_of_month(anchor));
                    assert_eq!(inside[inside.len() - 1].date(), end_of_month(anchor));
                    assert_eq!(inside, grid.current_month().iter().collect::<Vec<_>>());

                    assert!(grid.leading().iter().all(CalendarDay::is_outside_current_month));
                    assert!(grid.trailing().iter().all(CalendarDay::is_outside_current_month));
                }
            }
        }
    }

    #[test]
    fn segments_concatenate_to_the_grid() {
        let anchor = ymd(2024, 2, 29);
        let today = ymd(2024, 2, 10);
        let mut joined = previous_month_days(anchor, 2, today);
        joined.extend(current_month_days(anchor, today));
        joined.extend(next_month_days(anchor, 2, today));

        let grid = build_month_grid_at(&anchor, 2, today);
        assert_eq!(joined.as_slice(), grid.days().as_slice());
        assert_eq!(
            grid.leading(),
            previous_month_days(anchor, 2, today).as_slice()
        );
        assert_eq!(grid.current_month(), current_month_days(anchor, today).as_slice());
        assert_eq!(grid.trailing(), next_month_days(anchor, 2, today).as_slice());
    }

    #[test_log::test]
    fn fill_grid_pads_short_and_truncates_long_input() {
        let start = ymd(2022, 6, 1);

        let padded = fill_grid(current_month_days(start, not_today()), start, not_today());
        assert_eq!(padded[29].date(), ymd(2022, 6, 30));
        assert_eq!(padded[30], outside(ymd(2022, 7, 1)));
        assert_eq!(padded[41].date(), ymd(2022, 7, 12));

        let mut long = current_month_days(start, not_today());
        long.extend(current_month_days(ymd(2022, 7, 1), not_today()));
        let truncated = fill_grid(long, start, not_today());
        assert_eq!(truncated[0].date(), start);
        assert_eq!(truncated[41].date(), ymd(2022, 7, 12));
    }

    #[test]
    fn today_is_flagged_once() {
        let today = ymd(2022, 6, 21);
        let grid = build_month_grid_at(&today, 0, today);
        let flagged: Vec<_> = grid.days().iter().filter(|d| d.is_today()).collect();

        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].date(), today);
        assert_eq!(grid.find(today).map(CalendarDay::is_today), Some(true));
    }

    #[test]
    fn anchor_time_component_is_ignored() {
        let anchor = ymd(2022, 6, 30).and_hms_opt(23, 0, 0).unwrap();
        let grid = build_month_grid_at(&anchor, 0, not_today());
        assert_eq!(grid.month_start(), ymd(2022, 6, 1));
        assert_eq!(grid.current_month()[0].date().day(), 1);
    }

    #[test]
    fn map_keeps_segments() {
        let grid = build_month_grid_at(&ymd(2022, 6, 1), 0, not_today());
        let mapped = grid.map(|day| day.clone().with_enabled(false));

        assert_eq!(mapped.leading().len(), grid.leading().len());
        assert!(mapped.days().iter().all(|day| !day.is_enabled));
        assert_eq!(mapped.first().date(), grid.first().date());
    }
}
