//! State shared by both rendering surfaces.
//!
//! ## Summary
//! [`PickerState`] owns the visible month, the constraints and the settings.
//! Every mutation returns the [`PickerEvent`]s it caused so each surface can
//! forward them however it reports changes. No event is produced when a
//! value does not change.

use chrono::NaiveDate;
use monthpick_core::config::PickerSettings;
use monthpick_core::date::{DayGranular, start_of_month};
use monthpick_core::{NavigationDirection, PickerConstraints, can_navigate, navigate};
use monthpick_format::FormatterCache;

use crate::error::ViewResult;
use crate::snapshot::{MonthSnapshot, render_month};

/// A change the host should be told about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    DateSelected(Option<NaiveDate>),
    MonthChanged(NaiveDate),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerState {
    month: NaiveDate,
    constraints: PickerConstraints,
    settings: PickerSettings,
}

impl PickerState {
    /// ## Summary
    /// Creates state showing the month of `anchor`.
    ///
    /// ## Errors
    /// Returns `ViewError::Settings` if `settings` fail validation.
    pub fn new(settings: PickerSettings, anchor: NaiveDate) -> ViewResult<Self> {
        settings.validate()?;
        Ok(Self {
            month: start_of_month(anchor),
            constraints: settings.constraints(),
            settings,
        })
    }

    /// First day of the visible month.
    #[must_use]
    pub const fn month(&self) -> NaiveDate {
        self.month
    }

    #[must_use]
    pub const fn constraints(&self) -> &PickerConstraints {
        &self.constraints
    }

    #[must_use]
    pub const fn settings(&self) -> &PickerSettings {
        &self.settings
    }

    #[must_use]
    pub const fn selected_date(&self) -> Option<NaiveDate> {
        self.constraints.selected_date()
    }

    /// ## Summary
    /// Selects `date` if the constraints allow it.
    ///
    /// Dates that are booked or out of range are ignored, as is re-selecting
    /// the current selection.
    pub fn select(&mut self, date: NaiveDate) -> Option<PickerEvent> {
        if !self.constraints.is_selectable(date) {
            tracing::debug!(%date, "Ignoring selection of unselectable date");
            return None;
        }
        if self.constraints.selected_date() == Some(date) {
            return None;
        }

        self.constraints.set_selected_date(Some(date));
        tracing::debug!(%date, "Date selected");
        Some(PickerEvent::DateSelected(Some(date)))
    }

    pub fn clear_selection(&mut self) -> Option<PickerEvent> {
        self.constraints.selected_date()?;
        self.constraints.set_selected_date(None);
        Some(PickerEvent::DateSelected(None))
    }

    #[must_use]
    pub fn can_navigate(&self, direction: NavigationDirection) -> bool {
        can_navigate(direction, self.month, &self.constraints)
    }

    /// Moves the visible month one step, unless the constraints refuse.
    pub fn navigate(&mut self, direction: NavigationDirection) -> Option<PickerEvent> {
        let next = navigate(direction, self.month, &self.constraints);
        if next == self.month {
            return None;
        }

        self.month = next;
        Some(PickerEvent::MonthChanged(next))
    }

    /// ## Summary
    /// Shows the month containing `date` without consulting the navigation guard.
    pub fn show_month(&mut self, date: NaiveDate) -> Option<PickerEvent> {
        let month = start_of_month(date);
        if month == self.month {
            return None;
        }

        self.month = month;
        Some(PickerEvent::MonthChanged(month))
    }

    pub fn set_minimum_date(&mut self, date: Option<NaiveDate>) -> Option<PickerEvent> {
        self.constraints
            .set_minimum_date(date)
            .then_some(PickerEvent::DateSelected(None))
    }

    pub fn set_maximum_date(&mut self, date: Option<NaiveDate>) -> Option<PickerEvent> {
        self.constraints
            .set_maximum_date(date)
            .then_some(PickerEvent::DateSelected(None))
    }

    pub fn set_booked_dates<I, D>(&mut self, dates: I) -> Option<PickerEvent>
    where
        I: IntoIterator<Item = D>,
        D: DayGranular,
    {
        self.constraints
            .set_booked_dates(dates)
            .then_some(PickerEvent::DateSelected(None))
    }

    pub fn set_first_weekday(&mut self, first_weekday: i32) {
        self.constraints.set_first_weekday(first_weekday);
        self.settings.first_weekday = Some(first_weekday);
    }

    pub fn set_allow_precede_minimum_date(&mut self, allow: bool) {
        self.constraints.set_allow_precede_minimum_date(allow);
        self.settings.allow_precede_minimum_date = allow;
    }

    /// ## Summary
    /// Renders the visible month as of `today`.
    ///
    /// ## Errors
    /// Returns an error if the header template or locale cannot be used.
    pub fn render(&self, cache: &mut FormatterCache, today: NaiveDate) -> ViewResult<MonthSnapshot> {
        render_month(self.month, &self.constraints, &self.settings, cache, today)
    }
}
