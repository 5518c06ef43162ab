//! The per-cell value of a month grid.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::{self, DayGranular};

/// Information about a single day cell in a month grid.
///
/// The grid builder sets `date`, `is_outside_current_month` and `is_today`.
/// The classifier layers `is_selected`, `is_enabled` and `is_booked` on top.
/// Equality is structural over every field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[expect(clippy::struct_excessive_bools, reason = "each flag is set by a different stage")]
pub struct CalendarDay {
    date: NaiveDate,
    is_outside_current_month: bool,
    is_today: bool,
    note: Option<String>,
    pub is_selected: bool,
    pub is_enabled: bool,
    pub is_booked: bool,
}

impl CalendarDay {
    /// ## Summary
    /// Creates an enabled, unselected, unbooked day.
    ///
    /// Any time component of `date` is dropped. `today` decides `is_today`.
    #[must_use]
    pub fn new<D: DayGranular>(date: &D, is_outside_current_month: bool, today: NaiveDate) -> Self {
        let date = date.date_only();
        Self {
            date,
            is_outside_current_month,
            is_today: date == today,
            note: None,
            is_selected: false,
            is_enabled: true,
            is_booked: false,
        }
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    #[must_use]
    pub fn with_selected(mut self, is_selected: bool) -> Self {
        self.is_selected = is_selected;
        self
    }

    #[must_use]
    pub fn with_enabled(mut self, is_enabled: bool) -> Self {
        self.is_enabled = is_enabled;
        self
    }

    #[must_use]
    pub fn with_booked(mut self, is_booked: bool) -> Self {
        self.is_booked = is_booked;
        self
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Whether the day belongs to the previous or next month rather than the
    /// grid's anchor month.
    #[must_use]
    pub const fn is_outside_current_month(&self) -> bool {
        self.is_outside_current_month
    }

    #[must_use]
    pub const fn is_today(&self) -> bool {
        self.is_today
    }

    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Returns `true` if the day can be picked: enabled and not booked.
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        self.is_enabled && !self.is_booked
    }

    /// Day-of-month text for the cell ("17").
    #[must_use]
    pub fn label(&self) -> String {
        date::day_label(self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn new_day_defaults() {
        let day = CalendarDay::new(&ymd(2022, 6, 8), false, ymd(2022, 6, 21));

        assert_eq!(day.date(), ymd(2022, 6, 8));
        assert_eq!(day.label(), "8");
        assert!(!day.is_today());
        assert!(!day.is_outside_current_month());
        assert!(!day.is_selected);
        assert!(day.is_enabled);
        assert!(!day.is_booked);
        assert!(day.is_selectable());
        assert_eq!(day.note(), None);
    }

    #[test]
    fn time_component_is_dropped() {
        let dt = ymd(2022, 6, 21).and_hms_opt(18, 30, 0).unwrap();
        let day = CalendarDay::new(&dt, true, ymd(2022, 6, 21));

        assert_eq!(day.date(), ymd(2022, 6, 21));
        assert!(day.is_today());
        assert!(day.is_outside_current_month());
    }

    #[test]
    fn selectable_requires_enabled_and_unbooked() {
        let today = ymd(2022, 6, 1);
        let base = CalendarDay::new(&ymd(2022, 6, 8), false, today);

        assert!(!base.clone().with_enabled(false).is_selectable());
        assert!(!base.clone().with_booked(true).is_selectable());
        assert!(base.with_selected(true).is_selectable());
    }

    #[test]
    fn equality_covers_every_field() {
        let today = ymd(2022, 6, 1);
        let day = CalendarDay::new(&ymd(2022, 6, 8), false, today);

        assert_eq!(day, day.clone());
        assert_ne!(day, day.clone().with_note("dentist"));
        assert_ne!(day, day.clone().with_selected(true));
        assert_ne!(day, CalendarDay::new(&ymd(2022, 6, 8), true, today));
    }

    #[test]
    fn serializes_with_iso_date() {
        let day = CalendarDay::new(&ymd(2022, 6, 8), false, ymd(2022, 6, 1)).with_note("x");
        let json = serde_json::to_value(&day).unwrap();

        assert_eq!(json["date"], "2022-06-08");
        assert_eq!(json["note"], "x");

        let back: CalendarDay = serde_json::from_value(json).unwrap();
        assert_eq!(back, day);
    }
}
