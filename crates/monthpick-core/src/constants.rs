/// Number of day cells in a rendered month: six weeks of seven days.
pub const GRID_CELL_COUNT: usize = 42;

pub const DAYS_PER_WEEK: usize = 7;

/// Days looked back from the first of the visible month when deciding whether
/// backward navigation is allowed. The previous month's leading cells never
/// reach further back than this.
pub const BACKWARD_LOOKBACK_DAYS: i64 = 7;

/// Default skeleton for the month header ("June 2022").
pub const DEFAULT_HEADER_TEMPLATE: &str = "MMMMyyyy";

pub const DEFAULT_LOCALE: &str = "en_US";
