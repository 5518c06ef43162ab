//! Visual style precedence for classified days.
//!
//! ## Summary
//! A classified [`CalendarDay`] maps to exactly one [`DayStyle`]. The mapping
//! is an ordered rule table evaluated top to bottom; the first rule that
//! applies wins. Reordering the table changes what users see, so it is kept
//! as data and tested on its own.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::compare::is_same_month;
use crate::day::CalendarDay;

/// The visual variant a day cell is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStyle {
    Normal,
    Grayed,
    Today,
    Selected,
    Booked,
    Disabled,
}

/// One entry of the precedence table.
#[derive(Debug, Clone, Copy)]
pub struct StyleRule {
    pub name: &'static str,
    pub applies: fn(&CalendarDay) -> bool,
    pub style: DayStyle,
}

/// Style precedence, highest first. Falls through to [`DayStyle::Normal`].
pub const STYLE_RULES: [StyleRule; 6] = [
    StyleRule {
        name: "booked",
        applies: |day| day.is_booked,
        style: DayStyle::Booked,
    },
    StyleRule {
        name: "disabled outside month",
        applies: |day| !day.is_enabled && day.is_outside_current_month(),
        style: DayStyle::Grayed,
    },
    StyleRule {
        name: "disabled",
        applies: |day| !day.is_enabled,
        style: DayStyle::Disabled,
    },
    StyleRule {
        name: "selected",
        applies: |day| day.is_selected,
        style: DayStyle::Selected,
    },
    StyleRule {
        name: "today",
        applies: CalendarDay::is_today,
        style: DayStyle::Today,
    },
    StyleRule {
        name: "outside month",
        applies: CalendarDay::is_outside_current_month,
        style: DayStyle::Grayed,
    },
];

impl DayStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Grayed => "grayed",
            Self::Today => "today",
            Self::Selected => "selected",
            Self::Booked => "booked",
            Self::Disabled => "disabled",
        }
    }

    /// Resolves the style of a classified day from its own flags.
    #[must_use]
    pub fn resolve(day: &CalendarDay) -> Self {
        STYLE_RULES
            .iter()
            .find(|rule| (rule.applies)(day))
            .map_or(Self::Normal, |rule| rule.style)
    }

    /// ## Summary
    /// Resolves the style a cell is drawn with while `visible_month` is shown.
    ///
    /// Any day outside the visible month is drawn grayed, whatever its flags
    /// say. This only affects drawing; the day itself is not modified.
    #[must_use]
    pub fn resolve_in_view(day: &CalendarDay, visible_month: NaiveDate) -> Self {
        if is_same_month(day.date(), visible_month) {
            Self::resolve(day)
        } else {
            Self::Grayed
        }
    }
}

impl std::fmt::Display for DayStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
