//! Rendering-surface adapters for the month picker.
//!
//! ## Summary
//! [`CalendarPicker`] is a retained control that reports changes to a
//! delegate. [`CalendarView`] is a declarative view that reports them to
//! closures. Both drive the same [`state::PickerState`] and render the same
//! [`MonthSnapshot`]; neither draws anything.

pub mod delegate;
pub mod error;
pub mod picker;
pub mod snapshot;
pub mod state;
pub mod view;

pub use delegate::CalendarPickerDelegate;
pub use error::{ViewError, ViewResult};
pub use picker::CalendarPicker;
pub use snapshot::{DayCell, MonthSnapshot, render_month};
pub use state::{PickerEvent, PickerState};
pub use view::{CalendarView, ViewEvent};
