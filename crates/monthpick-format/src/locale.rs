//! Locale and time zone identifier resolution.

use std::str::FromStr;

use chrono::Locale;
use chrono_tz::Tz;
use monthpick_core::constants::DEFAULT_LOCALE;

use crate::error::{FormatError, FormatResult};

/// ## Summary
/// Resolves a POSIX (`de_DE`) or BCP 47 (`de-DE`) locale identifier.
///
/// Encoding and modifier suffixes such as `.UTF-8` or `@euro` are ignored.
///
/// ## Errors
/// Returns `FormatError::UnknownLocale` if no locale data exists for `id`.
pub fn parse_locale(id: &str) -> FormatResult<Locale> {
    let normalized = normalize_locale_id(id);
    Locale::try_from(normalized.as_str()).map_err(|_e| FormatError::UnknownLocale(id.to_string()))
}

/// ## Summary
/// Resolves an IANA time zone name such as `Asia/Kolkata`.
///
/// ## Errors
/// Returns `FormatError::UnknownTimeZone` if the name is not in the tz database.
pub fn parse_time_zone(id: &str) -> FormatResult<Tz> {
    Tz::from_str(id.trim()).map_err(|_e| FormatError::UnknownTimeZone(id.to_string()))
}

/// The process locale from `LC_ALL`, `LC_TIME` or `LANG`, falling back to `en_US`.
#[must_use]
pub fn current_locale_identifier() -> String {
    ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .map(|value| normalize_locale_id(&value))
        .find(|id| !id.is_empty() && id != "C" && id != "POSIX")
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

/// Strips encoding and modifier suffixes and uses `_` as the separator, so
/// `de-DE` and `de_DE.UTF-8` both become `de_DE`.
pub(crate) fn normalize_locale_id(id: &str) -> String {
    let base = id
        .trim()
        .split(['.', '@'])
        .next()
        .unwrap_or_default();
    base.replace('-', "_")
}
