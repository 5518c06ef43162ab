//! Declarative picker view.
//!
//! ## Summary
//! A [`CalendarView`] is described with builder methods, fed [`ViewEvent`]s
//! from the host's input handling, and rendered with a borrowed
//! [`FormatterCache`]. Changes are reported to the `on_date_selected` and
//! `on_month_changed` closures.

use chrono::NaiveDate;
use monthpick_core::NavigationDirection;
use monthpick_core::config::PickerSettings;
use monthpick_core::date::{DayGranular, today};
use monthpick_format::FormatterCache;

use crate::error::ViewResult;
use crate::snapshot::{MonthSnapshot, is_tappable};
use crate::state::{PickerEvent, PickerState};

type DateSelectedHandler = Box<dyn FnMut(Option<NaiveDate>)>;
type MonthChangedHandler = Box<dyn FnMut(NaiveDate)>;

/// Input the host forwards to a [`CalendarView`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewEvent {
    TapDay(NaiveDate),
    /// A completed horizontal drag; positive `dx` is rightwards.
    Swipe { dx: f64 },
    NextMonth,
    PreviousMonth,
}

pub struct CalendarView {
    state: PickerState,
    on_date_selected: Option<DateSelectedHandler>,
    on_month_changed: Option<MonthChangedHandler>,
}

impl CalendarView {
    /// ## Summary
    /// Creates a view of the current month.
    ///
    /// ## Errors
    /// Returns `ViewError::Settings` if `settings` fail validation.
    pub fn new(settings: PickerSettings) -> ViewResult<Self> {
        Self::showing(settings, today())
    }

    /// ## Summary
    /// Creates a view of the month containing `anchor`.
    ///
    /// ## Errors
    /// Returns `ViewError::Settings` if `settings` fail validation.
    pub fn showing(settings: PickerSettings, anchor: NaiveDate) -> ViewResult<Self> {
        Ok(Self {
            state: PickerState::new(settings, anchor)?,
            on_date_selected: None,
            on_month_changed: None,
        })
    }

    #[must_use]
    pub fn minimum_date(mut self, date: NaiveDate) -> Self {
        self.state.set_minimum_date(Some(date));
        self
    }

    #[must_use]
    pub fn maximum_date(mut self, date: NaiveDate) -> Self {
        self.state.set_maximum_date(Some(date));
        self
    }

    #[must_use]
    pub fn booked_dates<I, D>(mut self, dates: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: DayGranular,
    {
        self.state.set_booked_dates(dates);
        self
    }

    /// Initial selection; ignored if the date is not selectable.
    #[must_use]
    pub fn selected_date(mut self, date: NaiveDate) -> Self {
        self.state.select(date);
        self
    }

    #[must_use]
    pub fn first_weekday(mut self, first_weekday: i32) -> Self {
        self.state.set_first_weekday(first_weekday);
        self
    }

    #[must_use]
    pub fn allow_precede_minimum_date(mut self, allow: bool) -> Self {
        self.state.set_allow_precede_minimum_date(allow);
        self
    }

    #[must_use]
    pub fn on_date_selected(mut self, handler: impl FnMut(Option<NaiveDate>) + 'static) -> Self {
        self.on_date_selected = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn on_month_changed(mut self, handler: impl FnMut(NaiveDate) + 'static) -> Self {
        self.on_month_changed = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub const fn state(&self) -> &PickerState {
        &self.state
    }

    /// ## Summary
    /// Applies one input event and reports any resulting change.
    ///
    /// Taps on booked or out-of-range days and navigation the constraints
    /// refuse are ignored. Returns whether anything changed.
    pub fn handle(&mut self, event: ViewEvent) -> bool {
        let change = match event {
            ViewEvent::TapDay(date) => {
                if is_tappable(date, self.state.constraints()) {
                    self.state.select(date)
                } else {
                    tracing::debug!(%date, "Ignoring tap on inactive day");
                    None
                }
            }
            ViewEvent::Swipe { dx } => self.state.navigate(NavigationDirection::from_swipe(dx)),
            ViewEvent::NextMonth => self.state.navigate(NavigationDirection::Forward),
            ViewEvent::PreviousMonth => self.state.navigate(NavigationDirection::Backward),
        };

        let Some(change) = change else {
            return false;
        };
        match change {
            PickerEvent::DateSelected(date) => {
                if let Some(handler) = self.on_date_selected.as_mut() {
                    handler(date);
                }
            }
            PickerEvent::MonthChanged(month) => {
                if let Some(handler) = self.on_month_changed.as_mut() {
                    handler(month);
                }
            }
        }
        true
    }

    /// ## Summary
    /// Renders the visible month.
    ///
    /// ## Errors
    /// Returns an error if the header template or locale cannot be used.
    pub fn render(&self, formatters: &mut FormatterCache) -> ViewResult<MonthSnapshot> {
        self.render_at(formatters, today())
    }

    /// ## Summary
    /// Renders the visible month with `today` highlighted.
    ///
    /// ## Errors
    /// Returns an error if the header template or locale cannot be used.
    pub fn render_at(
        &self,
        formatters: &mut FormatterCache,
        today: NaiveDate,
    ) -> ViewResult<MonthSnapshot> {
        self.state.render(formatters, today)
    }
}

impl std::fmt::Debug for CalendarView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarView")
            .field("state", &self.state)
            .field("on_date_selected", &self.on_date_selected.is_some())
            .field("on_month_changed", &self.on_month_changed.is_some())
            .finish()
    }
}
