//! Callbacks from [`crate::CalendarPicker`] to its host.

use chrono::NaiveDate;

/// Receives selection and month changes from a [`crate::CalendarPicker`].
///
/// Calls are made only when the value actually changes.
pub trait CalendarPickerDelegate {
    /// The selected date changed. `None` means the selection was cleared,
    /// either by the user or because new constraints excluded it.
    fn did_select_date(&mut self, date: Option<NaiveDate>);

    /// The visible month changed; `month` is its first day.
    fn did_change_month(&mut self, _month: NaiveDate) {}
}
