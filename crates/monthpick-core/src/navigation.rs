//! Month navigation guard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::BACKWARD_LOOKBACK_DAYS;
use crate::constraints::PickerConstraints;
use crate::date::{add_days, add_months, start_of_month};

/// Direction of a month change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationDirection {
    Forward,
    Backward,
}

impl NavigationDirection {
    /// ## Summary
    /// Maps a horizontal drag translation to a direction.
    ///
    /// Dragging right (positive `dx`) reveals the previous month; anything else
    /// moves forward.
    #[must_use]
    pub fn from_swipe(dx: f64) -> Self {
        if dx > 0.0 { Self::Backward } else { Self::Forward }
    }

    const fn month_delta(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// ## Summary
/// Whether the visible month may move one step in `direction`.
///
/// Forward is refused when the next month's anchor lies after the maximum
/// date. Backward is always allowed when `allow_precede_minimum_date` is set;
/// otherwise it is refused when the day seven days before `anchor` precedes
/// the minimum date. `anchor` is expected to be the first of the visible
/// month, which is what [`navigate`] produces.
#[must_use]
pub fn can_navigate(
    direction: NavigationDirection,
    anchor: NaiveDate,
    constraints: &PickerConstraints,
) -> bool {
    match direction {
        NavigationDirection::Forward => !constraints.is_after_maximum(add_months(anchor, 1)),
        NavigationDirection::Backward => {
            constraints.allow_precede_minimum_date()
                || !constraints.is_before_minimum(add_days(anchor, -BACKWARD_LOOKBACK_DAYS))
        }
    }
}

/// ## Summary
/// Returns the anchor after one step in `direction`.
///
/// The result is the first day of the new month. When [`can_navigate`]
/// refuses, `anchor` is returned unchanged; that is not an error.
#[must_use]
pub fn navigate(
    direction: NavigationDirection,
    anchor: NaiveDate,
    constraints: &PickerConstraints,
) -> NaiveDate {
    if !can_navigate(direction, anchor, constraints) {
        tracing::debug!(?direction, %anchor, "Month navigation refused by constraints");
        return anchor;
    }

    let next = start_of_month(add_months(anchor, direction.month_delta()));
    tracing::debug!(?direction, from = %anchor, to = %next, "Month navigation");
    next
}
