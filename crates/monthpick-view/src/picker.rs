//! Retained picker control.

use chrono::NaiveDate;
use monthpick_core::NavigationDirection;
use monthpick_core::config::PickerSettings;
use monthpick_core::date::{DayGranular, today};
use monthpick_format::FormatterCache;

use crate::delegate::CalendarPickerDelegate;
use crate::error::ViewResult;
use crate::snapshot::MonthSnapshot;
use crate::state::{PickerEvent, PickerState};

/// ## Summary
/// A long-lived picker that owns its state and formatter cache and reports
/// changes to a [`CalendarPickerDelegate`].
///
/// The host calls the mutating methods in response to input and redraws
/// from [`Self::snapshot`].
pub struct CalendarPicker {
    state: PickerState,
    formatters: FormatterCache,
    delegate: Option<Box<dyn CalendarPickerDelegate>>,
}

impl CalendarPicker {
    /// ## Summary
    /// Creates a picker showing the current month.
    ///
    /// ## Errors
    /// Returns `ViewError::Settings` if `settings` fail validation.
    pub fn new(settings: PickerSettings) -> ViewResult<Self> {
        Self::with_anchor(settings, today())
    }

    /// ## Summary
    /// Creates a picker showing the month of `anchor`.
    ///
    /// ## Errors
    /// Returns `ViewError::Settings` if `settings` fail validation.
    pub fn with_anchor(settings: PickerSettings, anchor: NaiveDate) -> ViewResult<Self> {
        Ok(Self {
            state: PickerState::new(settings, anchor)?,
            formatters: FormatterCache::new(),
            delegate: None,
        })
    }

    pub fn set_delegate(&mut self, delegate: Box<dyn CalendarPickerDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn take_delegate(&mut self) -> Option<Box<dyn CalendarPickerDelegate>> {
        self.delegate.take()
    }

    #[must_use]
    pub const fn state(&self) -> &PickerState {
        &self.state
    }

    #[must_use]
    pub const fn month(&self) -> NaiveDate {
        self.state.month()
    }

    #[must_use]
    pub const fn selected_date(&self) -> Option<NaiveDate> {
        self.state.selected_date()
    }

    /// Selects `date` if it is selectable and notifies the delegate.
    pub fn select(&mut self, date: NaiveDate) {
        let event = self.state.select(date);
        self.notify(event);
    }

    pub fn clear_selection(&mut self) {
        let event = self.state.clear_selection();
        self.notify(event);
    }

    pub fn show_next_month(&mut self) {
        let event = self.state.navigate(NavigationDirection::Forward);
        self.notify(event);
    }

    pub fn show_previous_month(&mut self) {
        let event = self.state.navigate(NavigationDirection::Backward);
        self.notify(event);
    }

    /// Navigates for a completed horizontal drag of `dx` points.
    pub fn handle_swipe(&mut self, dx: f64) {
        let event = self.state.navigate(NavigationDirection::from_swipe(dx));
        self.notify(event);
    }

    /// Jumps to the month containing `date`, ignoring the navigation guard.
    pub fn show_month(&mut self, date: NaiveDate) {
        let event = self.state.show_month(date);
        self.notify(event);
    }

    pub fn set_minimum_date(&mut self, date: Option<NaiveDate>) {
        let event = self.state.set_minimum_date(date);
        self.notify(event);
    }

    pub fn set_maximum_date(&mut self, date: Option<NaiveDate>) {
        let event = self.state.set_maximum_date(date);
        self.notify(event);
    }

    pub fn set_booked_dates<I, D>(&mut self, dates: I)
    where
        I: IntoIterator<Item = D>,
        D: DayGranular,
    {
        let event = self.state.set_booked_dates(dates);
        self.notify(event);
    }

    pub fn set_first_weekday(&mut self, first_weekday: i32) {
        self.state.set_first_weekday(first_weekday);
    }

    pub fn set_allow_precede_minimum_date(&mut self, allow: bool) {
        self.state.set_allow_precede_minimum_date(allow);
    }

    /// ## Summary
    /// Renders the visible month.
    ///
    /// ## Errors
    /// Returns an error if the header template or locale cannot be used.
    pub fn snapshot(&mut self) -> ViewResult<MonthSnapshot> {
        self.snapshot_at(today())
    }

    /// ## Summary
    /// Renders the visible month with `today` highlighted.
    ///
    /// ## Errors
    /// Returns an error if the header template or locale cannot be used.
    pub fn snapshot_at(&mut self, today: NaiveDate) -> ViewResult<MonthSnapshot> {
        self.state.render(&mut self.formatters, today)
    }

    /// Number of formatters compiled so far.
    #[must_use]
    pub fn cached_formatters(&self) -> usize {
        self.formatters.len()
    }

    fn notify(&mut self, event: Option<PickerEvent>) {
        let (Some(event), Some(delegate)) = (event, self.delegate.as_mut()) else {
            return;
        };
        match event {
            PickerEvent::DateSelected(date) => delegate.did_select_date(date),
            PickerEvent::MonthChanged(month) => delegate.did_change_month(month),
        }
    }
}

impl std::fmt::Debug for CalendarPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarPicker")
            .field("state", &self.state)
            .field("formatters", &self.formatters.len())
            .field("has_delegate", &self.delegate.is_some())
            .finish()
    }
}
