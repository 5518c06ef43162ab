//! Date formatting and parsing for the month picker.
//!
//! ## Summary
//! Named formats ([`DateFormatType`]) and free-form Unicode date patterns are
//! translated to chrono format items once and kept in an explicit
//! [`FormatterCache`] owned by the UI layer.

pub mod cache;
pub mod error;
pub mod format_type;
pub mod locale;
pub mod pattern;
pub mod relative;
pub mod weekday;

pub use cache::{DateFormatter, FormatterCache};
pub use error::{FormatError, FormatResult};
pub use format_type::DateFormatType;
pub use relative::time_elapsed;
pub use weekday::{PLACEHOLDER_WEEKDAY_SYMBOLS, ordered_weekday_symbols, weekday_symbols};
