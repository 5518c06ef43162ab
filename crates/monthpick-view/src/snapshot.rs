//! The render model handed to a drawing layer.

use chrono::NaiveDate;
use monthpick_core::config::PickerSettings;
use monthpick_core::constants::{DAYS_PER_WEEK, DEFAULT_LOCALE};
use monthpick_core::date::start_of_month;
use monthpick_core::{
    CalendarDay, DayStyle, NavigationDirection, PickerConstraints, build_month_grid_at,
    can_navigate, classify_grid,
};
use monthpick_format::{FormatError, FormatterCache, ordered_weekday_symbols};
use serde::Serialize;

use crate::error::ViewResult;

/// One drawable cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day: CalendarDay,
    pub label: String,
    pub style: DayStyle,
    /// Whether a tap on this cell selects it. Grayed leading and trailing
    /// cells stay tappable while their date is selectable.
    pub is_tappable: bool,
}

/// Everything needed to draw one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthSnapshot {
    /// First day of the visible month.
    pub month: NaiveDate,
    pub title: String,
    pub weekday_labels: [String; DAYS_PER_WEEK],
    /// 42 cells, row-major, starting on the configured first weekday.
    pub cells: Vec<DayCell>,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl MonthSnapshot {
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks_exact(DAYS_PER_WEEK)
    }

    #[must_use]
    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.day.date() == date)
    }

    #[must_use]
    pub fn selected(&self) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.day.is_selected)
    }
}

/// Whether tapping the cell for `date` selects it: the date must be in range
/// and not booked, whichever month it belongs to.
#[must_use]
pub fn is_tappable(date: NaiveDate, constraints: &PickerConstraints) -> bool {
    constraints.is_selectable(date)
}

/// ## Summary
/// Formats the month header.
///
/// A locale without data falls back to the default locale with a warning,
/// matching the placeholder fallback of the weekday row.
fn header_title(
    month: NaiveDate,
    settings: &PickerSettings,
    cache: &mut FormatterCache,
) -> ViewResult<String> {
    let template = &settings.header_template;
    let title = cache
        .template_formatter(template, Some(&settings.locale))
        .and_then(|formatter| formatter.format_date(month));

    match title {
        Ok(title) => Ok(title),
        Err(FormatError::UnknownLocale(locale)) => {
            tracing::warn!(%locale, fallback = DEFAULT_LOCALE, "No month names for locale");
            Ok(cache
                .template_formatter(template, Some(DEFAULT_LOCALE))?
                .format_date(month)?)
        }
        Err(error) => Err(error.into()),
    }
}

/// ## Summary
/// Builds, classifies and styles the month containing `anchor`.
///
/// ## Errors
/// Returns `ViewError::Format` if the header template in `settings` cannot
/// be used. An unknown locale is not an error.
pub fn render_month(
    anchor: NaiveDate,
    constraints: &PickerConstraints,
    settings: &PickerSettings,
    cache: &mut FormatterCache,
    today: NaiveDate,
) -> ViewResult<MonthSnapshot> {
    let month = start_of_month(anchor);
    let first_weekday = constraints.first_weekday();
    let grid = classify_grid(&build_month_grid_at(&month, first_weekday, today), constraints);

    let title = header_title(month, settings, cache)?;

    let cells = grid
        .days()
        .iter()
        .map(|day| DayCell {
            label: day.label(),
            style: DayStyle::resolve_in_view(day, month),
            is_tappable: is_tappable(day.date(), constraints),
            day: day.clone(),
        })
        .collect();

    tracing::trace!(%month, %title, "Rendered month snapshot");

    Ok(MonthSnapshot {
        month,
        title,
        weekday_labels: ordered_weekday_symbols(&settings.locale, first_weekday),
        cells,
        previous_enabled: can_navigate(NavigationDirection::Backward, month, constraints),
        next_enabled: can_navigate(NavigationDirection::Forward, month, constraints),
    })
}
