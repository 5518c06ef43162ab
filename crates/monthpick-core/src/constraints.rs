//! Host-supplied limits on which days can be picked.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::date::DayGranular;

/// Selection constraints supplied by the host application.
///
/// `None` bounds are unbounded. Both bounds are inclusive. Setters keep the
/// current selection consistent: a selection that a new bound or booking
/// would exclude is cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickerConstraints {
    minimum_date: Option<NaiveDate>,
    maximum_date: Option<NaiveDate>,
    booked_dates: HashSet<NaiveDate>,
    selected_date: Option<NaiveDate>,
    first_weekday: i32,
    allow_precede_minimum_date: bool,
}

impl PickerConstraints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_minimum_date(mut self, date: NaiveDate) -> Self {
        self.set_minimum_date(Some(date));
        self
    }

    #[must_use]
    pub fn with_maximum_date(mut self, date: NaiveDate) -> Self {
        self.set_maximum_date(Some(date));
        self
    }

    #[must_use]
    pub fn with_booked_dates<I, D>(mut self, dates: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: DayGranular,
    {
        self.set_booked_dates(dates);
        self
    }

    #[must_use]
    pub fn with_selected_date(mut self, date: NaiveDate) -> Self {
        self.selected_date = Some(date);
        self
    }

    #[must_use]
    pub fn with_first_weekday(mut self, first_weekday: i32) -> Self {
        self.first_weekday = first_weekday;
        self
    }

    #[must_use]
    pub fn with_allow_precede_minimum_date(mut self, allow: bool) -> Self {
        self.allow_precede_minimum_date = allow;
        self
    }

    #[must_use]
    pub const fn minimum_date(&self) -> Option<NaiveDate> {
        self.minimum_date
    }

    #[must_use]
    pub const fn maximum_date(&self) -> Option<NaiveDate> {
        self.maximum_date
    }

    #[must_use]
    pub const fn booked_dates(&self) -> &HashSet<NaiveDate> {
        &self.booked_dates
    }

    #[must_use]
    pub const fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    /// Zero-based week start offset from Sunday, as configured (not normalised).
    #[must_use]
    pub const fn first_weekday(&self) -> i32 {
        self.first_weekday
    }

    #[must_use]
    pub const fn allow_precede_minimum_date(&self) -> bool {
        self.allow_precede_minimum_date
    }

    /// ## Summary
    /// Sets the minimum selectable date.
    ///
    /// Returns `true` if the current selection fell before the new minimum and
    /// was cleared.
    pub fn set_minimum_date(&mut self, date: Option<NaiveDate>) -> bool {
        self.minimum_date = date;
        self.clear_selection_if(|selected, constraints| constraints.is_before_minimum(selected))
    }

    /// ## Summary
    /// Sets the maximum selectable date.
    ///
    /// Returns `true` if the current selection fell after the new maximum and
    /// was cleared.
    pub fn set_maximum_date(&mut self, date: Option<NaiveDate>) -> bool {
        self.maximum_date = date;
        self.clear_selection_if(|selected, constraints| constraints.is_after_maximum(selected))
    }

    /// ## Summary
    /// Replaces the booked dates, truncating each to day granularity.
    ///
    /// Returns `true` if the current selection became booked and was cleared.
    pub fn set_booked_dates<I, D>(&mut self, dates: I) -> bool
    where
        I: IntoIterator<Item = D>,
        D: DayGranular,
    {
        self.booked_dates = dates.into_iter().map(|date| date.date_only()).collect();
        self.clear_selection_if(|selected, constraints| constraints.is_booked(selected))
    }

    /// Sets the selection without validating it; see [`Self::is_selectable`].
    pub fn set_selected_date(&mut self, date: Option<NaiveDate>) {
        self.selected_date = date;
    }

    pub fn set_first_weekday(&mut self, first_weekday: i32) {
        self.first_weekday = first_weekday;
    }

    pub fn set_allow_precede_minimum_date(&mut self, allow: bool) {
        self.allow_precede_minimum_date = allow;
    }

    #[must_use]
    pub fn is_booked(&self, date: NaiveDate) -> bool {
        self.booked_dates.contains(&date)
    }

    #[must_use]
    pub fn is_before_minimum(&self, date: NaiveDate) -> bool {
        self.minimum_date.is_some_and(|minimum| date < minimum)
    }

    #[must_use]
    pub fn is_after_maximum(&self, date: NaiveDate) -> bool {
        self.maximum_date.is_some_and(|maximum| date > maximum)
    }

    /// Whether `date` lies within the inclusive minimum/maximum range.
    #[must_use]
    pub fn is_in_range(&self, date: NaiveDate) -> bool {
        !self.is_before_minimum(date) && !self.is_after_maximum(date)
    }

    /// Whether `date` could be picked: in range and not booked.
    #[must_use]
    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        !self.is_booked(date) && self.is_in_range(date)
    }

    fn clear_selection_if(&mut self, excluded: impl Fn(NaiveDate, &Self) -> bool) -> bool {
        match self.selected_date {
            Some(selected) if excluded(selected, self) => {
                tracing::debug!(%selected, "Clearing selection excluded by new constraints");
                self.selected_date = None;
                true
            }
            _ => false,
        }
    }
}
