//! Date-range computation and day classification for a month calendar picker.
//!
//! ## Summary
//! Everything in this crate is a pure function over value types. The UI layer
//! builds a [`grid::MonthGrid`] once per visible month, runs every cell through
//! [`classify::classify`], and maps the result to a [`style::DayStyle`].

pub mod classify;
pub mod config;
pub mod constants;
pub mod constraints;
pub mod date;
pub mod day;
pub mod error;
pub mod grid;
pub mod navigation;
pub mod style;

pub use classify::{classify, classify_grid};
pub use constraints::PickerConstraints;
pub use day::CalendarDay;
pub use grid::{MonthGrid, build_month_grid, build_month_grid_at};
pub use navigation::{NavigationDirection, can_navigate, navigate};
pub use style::DayStyle;
