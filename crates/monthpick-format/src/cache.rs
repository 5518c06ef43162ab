//! Compiled formatters and the cache that owns them.
//!
//! ## Summary
//! Translating a pattern and resolving its locale is done once per distinct
//! key. A [`FormatterCache`] is created by the rendering layer and passed by
//! reference to whatever needs to format or parse dates.
//!
//! Entries are never evicted. The set of formats a picker uses is small and
//! fixed, so the cache stops growing after the first render; call
//! [`FormatterCache::clear`] if formats are generated dynamically.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use chrono::format::{Item, ParseErrorKind, StrftimeItems};
use chrono::{DateTime, FixedOffset, Locale, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;

use crate::error::{FormatError, FormatResult};
use crate::format_type::DateFormatType;
use crate::locale::{current_locale_identifier, normalize_locale_id, parse_locale};
use crate::pattern::{template_to_strftime, to_strftime};

/// Fields appended to an input that stops short of a full date, tried in order.
const PARTIAL_DATE_FILLERS: [(&str, &str); 2] = [("-01", "-%d"), ("-01-01", "-%m-%d")];

/// A pattern compiled to a strftime string, bound to a time zone and an
/// optional locale.
#[derive(Debug, Clone)]
pub struct DateFormatter {
    pattern: String,
    strftime: String,
    time_zone: Tz,
    locale: Option<Locale>,
}

impl DateFormatter {
    /// ## Summary
    /// Compiles a Unicode date pattern. `None` formats in UTC.
    ///
    /// ## Errors
    /// Returns an error if the pattern cannot be expressed as a strftime string.
    pub fn from_pattern(pattern: &str, time_zone: Option<Tz>) -> FormatResult<Self> {
        let strftime = to_strftime(pattern)?;
        Self::compiled(pattern, strftime, time_zone.unwrap_or(Tz::UTC), None)
    }

    /// ## Summary
    /// Compiles a skeleton such as `MMMMyyyy` whose names are rendered in `locale`.
    ///
    /// ## Errors
    /// Returns an error if the template contains an unsupported field.
    pub fn from_template(template: &str, locale: Locale) -> FormatResult<Self> {
        let strftime = template_to_strftime(template)?;
        Self::compiled(template, strftime, Tz::UTC, Some(locale))
    }

    fn compiled(
        pattern: &str,
        strftime: String,
        time_zone: Tz,
        locale: Option<Locale>,
    ) -> FormatResult<Self> {
        if StrftimeItems::new(&strftime).any(|item| matches!(item, Item::Error)) {
            return Err(FormatError::InvalidFormat(strftime));
        }

        Ok(Self {
            pattern: pattern.to_string(),
            strftime,
            time_zone,
            locale,
        })
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn strftime(&self) -> &str {
        &self.strftime
    }

    #[must_use]
    pub const fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// ## Summary
    /// Formats `date` at midnight in the formatter's time zone.
    ///
    /// ## Errors
    /// Returns `FormatError::AmbiguousLocalTime` if midnight does not exist on
    /// that day in the time zone.
    pub fn format_date(&self, date: NaiveDate) -> FormatResult<String> {
        let local = self.localize(date.and_time(NaiveTime::MIN))?;
        Ok(self.render(&local))
    }

    /// Formats an instant after converting it to the formatter's time zone.
    #[must_use]
    pub fn format_datetime<Z: TimeZone>(&self, value: &DateTime<Z>) -> String {
        self.render(&value.with_timezone(&self.time_zone))
    }

    /// ## Summary
    /// Parses a calendar date.
    ///
    /// Formats that stop short of a day (`yyyy`, `yyyy-MM`) resolve to the
    /// first day of the period.
    ///
    /// ## Errors
    /// Returns `FormatError::Parse` if `input` does not match the pattern.
    pub fn parse_date(&self, input: &str) -> FormatResult<NaiveDate> {
        let error = match NaiveDate::parse_from_str(input, &self.strftime) {
            Ok(date) => return Ok(date),
            Err(error) => error,
        };
        if error.kind() != ParseErrorKind::NotEnough {
            return Err(self.parse_error(input, error));
        }

        for (input_suffix, format_suffix) in PARTIAL_DATE_FILLERS {
            let padded_input = format!("{input}{input_suffix}");
            let padded_format = format!("{}{format_suffix}", self.strftime);
            if let Ok(date) = NaiveDate::parse_from_str(&padded_input, &padded_format) {
                return Ok(date);
            }
        }

        Err(self.parse_error(input, error))
    }

    /// ## Summary
    /// Parses an instant.
    ///
    /// An offset in the input wins. Without one the value is read as local
    /// time in the formatter's time zone, and date-only input means midnight.
    ///
    /// ## Errors
    /// Returns `FormatError::Parse` if `input` does not match the pattern and
    /// `FormatError::AmbiguousLocalTime` if the local time cannot be resolved.
    pub fn parse_datetime(&self, input: &str) -> FormatResult<DateTime<FixedOffset>> {
        match DateTime::parse_from_str(input, &self.strftime) {
            Ok(value) => return Ok(value),
            Err(error) if error.kind() != ParseErrorKind::NotEnough => {
                return Err(self.parse_error(input, error));
            }
            Err(_) => {}
        }

        let naive = match NaiveDateTime::parse_from_str(input, &self.strftime) {
            Ok(naive) => naive,
            Err(error) if error.kind() == ParseErrorKind::NotEnough => {
                self.parse_date(input)?.and_time(NaiveTime::MIN)
            }
            Err(error) => return Err(self.parse_error(input, error)),
        };

        Ok(self.localize(naive)?.fixed_offset())
    }

    /// ## Summary
    /// Parses a time of day such as `10:42:52`.
    ///
    /// ## Errors
    /// Returns `FormatError::Parse` if `input` does not match the pattern.
    pub fn parse_time(&self, input: &str) -> FormatResult<NaiveTime> {
        NaiveTime::parse_from_str(input, &self.strftime).map_err(|error| self.parse_error(input, error))
    }

    fn localize(&self, naive: NaiveDateTime) -> FormatResult<DateTime<Tz>> {
        self.time_zone
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| FormatError::AmbiguousLocalTime(naive.to_string()))
    }

    fn render(&self, value: &DateTime<Tz>) -> String {
        match self.locale {
            Some(locale) => value.format_localized(&self.strftime, locale).to_string(),
            None => value.format(&self.strftime).to_string(),
        }
    }

    fn parse_error(&self, input: &str, source: chrono::ParseError) -> FormatError {
        tracing::debug!(input, pattern = %self.pattern, %source, "Date parse failed");
        FormatError::Parse {
            input: input.to_string(),
            source,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum FormatterKey {
    Format {
        format: String,
        time_zone: &'static str,
    },
    Template {
        template: String,
        locale: String,
    },
}

/// Formatters keyed by `(pattern, time zone)` or `(template, locale)`.
#[derive(Debug, Default)]
pub struct FormatterCache {
    formatters: HashMap<FormatterKey, DateFormatter>,
}

impl FormatterCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Returns the formatter for `format` in `time_zone`, compiling it on first use.
    ///
    /// `None` and `Some(Tz::UTC)` share an entry.
    ///
    /// ## Errors
    /// Returns an error if the format's pattern cannot be compiled. Failed
    /// compilations are not cached.
    pub fn formatter(
        &mut self,
        format: &DateFormatType,
        time_zone: Option<Tz>,
    ) -> FormatResult<&DateFormatter> {
        let pattern = format.string_format();
        let time_zone = time_zone.unwrap_or(Tz::UTC);
        let key = FormatterKey::Format {
            format: pattern.clone(),
            time_zone: time_zone.name(),
        };

        match self.formatters.entry(key) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let formatter = DateFormatter::from_pattern(&pattern, Some(time_zone))?;
                tracing::trace!(%pattern, time_zone = time_zone.name(), "Compiled date formatter");
                Ok(entry.insert(formatter))
            }
        }
    }

    /// ## Summary
    /// Returns the formatter for a skeleton in `locale`, compiling it on first use.
    ///
    /// `None` uses the process locale. Spellings of the same locale
    /// (`de-DE`, `de_DE`) share an entry.
    ///
    /// ## Errors
    /// Returns an error if the locale is unknown or the template cannot be compiled.
    pub fn template_formatter(
        &mut self,
        template: &str,
        locale: Option<&str>,
    ) -> FormatResult<&DateFormatter> {
        let locale_id = locale.map_or_else(current_locale_identifier, normalize_locale_id);
        let key = FormatterKey::Template {
            template: template.to_string(),
            locale: locale_id.clone(),
        };

        match self.formatters.entry(key) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let formatter = DateFormatter::from_template(template, parse_locale(&locale_id)?)?;
                tracing::trace!(template, locale = %locale_id, "Compiled template formatter");
                Ok(entry.insert(formatter))
            }
        }
    }

    /// ## Summary
    /// Formats `date` with a named format.
    ///
    /// ## Errors
    /// See [`Self::formatter`] and [`DateFormatter::format_date`].
    pub fn format_date(
        &mut self,
        date: NaiveDate,
        format: &DateFormatType,
        time_zone: Option<Tz>,
    ) -> FormatResult<String> {
        self.formatter(format, time_zone)?.format_date(date)
    }

    /// ## Summary
    /// Parses a date with a named format.
    ///
    /// ## Errors
    /// See [`Self::formatter`] and [`DateFormatter::parse_date`].
    pub fn parse_date(
        &mut self,
        input: &str,
        format: &DateFormatType,
        time_zone: Option<Tz>,
    ) -> FormatResult<NaiveDate> {
        self.formatter(format, time_zone)?.parse_date(input)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }

    pub fn clear(&mut self) {
        self.formatters.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Offset, Utc};

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn formatter_is_reused_per_format_and_zone() {
        let mut cache = FormatterCache::new();
        assert!(cache.is_empty());

        cache.formatter(&DateFormatType::IsoDate, None).unwrap();
        cache.formatter(&DateFormatType::IsoDate, None).unwrap();
        assert_eq!(cache.len(), 1);

        cache.formatter(&DateFormatType::IsoDate, Some(Tz::UTC)).unwrap();
        assert_eq!(cache.len(), 1);

        cache
            .formatter(&DateFormatType::IsoDate, Some(Tz::Asia__Kolkata))
            .unwrap();
        cache.formatter(&DateFormatType::IsoYear, None).unwrap();
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn template_keys_are_separate_from_format_keys() {
        let mut cache = FormatterCache::new();

        cache.formatter(&DateFormatType::Mmmm, None).unwrap();
        cache.template_formatter("MMMM", Some("en_US")).unwrap();
        cache.template_formatter("MMMM", Some("en_US")).unwrap();
        cache.template_formatter("MMMM", Some("de_DE")).unwrap();
        assert_eq!(cache.len(), 3);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn locale_spellings_share_an_entry() {
        let mut cache = FormatterCache::new();

        cache.template_formatter("MMMMyyyy", Some("de-DE")).unwrap();
        cache.template_formatter("MMMMyyyy", Some("de_DE")).unwrap();
        cache.template_formatter("MMMMyyyy", Some("de_DE.UTF-8")).unwrap();
        assert_eq!(cache.len(), 1);
    }

    #[test_log::test]
    fn failures_are_not_cached() {
        let mut cache = FormatterCache::new();

        assert!(cache.template_formatter("MMMMyyyy", Some("xx_YY")).is_err());
        let custom = DateFormatType::Custom {
            format: "QQQ".into(),
            separator: None,
        };
        assert!(cache.formatter(&custom, None).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn formats_dates() {
        let mut cache = FormatterCache::new();
        let date = ymd(2022, 6, 5);

        assert_eq!(cache.format_date(date, &DateFormatType::IsoDate, None).unwrap(), "2022-06-05");
        assert_eq!(
            cache
                .format_date(date, &DateFormatType::DdMmmYyyy(" ".into()), None)
                .unwrap(),
            "05 Jun 2022"
        );
        assert_eq!(
            cache.format_date(date, &DateFormatType::YyyyDdd(".".into()), None).unwrap(),
            "2022.156"
        );
        assert_eq!(cache.format_date(date, &DateFormatType::Eeee, None).unwrap(), "Sunday");
    }

    #[test]
    fn formats_in_time_zone() {
        let mut cache = FormatterCache::new();
        let utc = Utc.with_ymd_and_hms(2022, 6, 5, 5, 12, 52).unwrap();
        let ist = Some(Tz::Asia__Kolkata);

        let stamp = cache.formatter(&DateFormatType::YyyyMmDdZ, ist).unwrap();
        assert_eq!(stamp.format_datetime(&utc), "20220605+0530");

        let clock = cache.formatter(&DateFormatType::HhMmSs(":".into()), ist).unwrap();
        assert_eq!(clock.format_datetime(&utc), "10:42:52");
        assert_eq!(clock.parse_time("10:42:52").unwrap(), NaiveTime::from_hms_opt(10, 42, 52).unwrap());
    }

    #[test]
    fn http_header() {
        let formatter = DateFormatter::from_pattern(
            &DateFormatType::HttpHeader.string_format(),
            Some(Tz::Asia__Kolkata),
        )
        .unwrap();
        let value = Tz::Asia__Kolkata.with_ymd_and_hms(2022, 6, 5, 19, 20, 30).unwrap();

        assert_eq!(formatter.format_datetime(&value), "Sun, 5 Jun 2022 19:20:30 +0530");
    }

    #[test]
    fn partial_dates_resolve_to_period_start() {
        let mut cache = FormatterCache::new();

        assert_eq!(
            cache.parse_date("2022", &DateFormatType::IsoYear, None).unwrap(),
            ymd(2022, 1, 1)
        );
        assert_eq!(
            cache.parse_date("2022-06", &DateFormatType::IsoYearMonth, None).unwrap(),
            ymd(2022, 6, 1)
        );
        assert_eq!(
            cache.parse_date("2022-06-05", &DateFormatType::IsoDate, None).unwrap(),
            ymd(2022, 6, 5)
        );
    }

    #[test]
    fn parse_errors() {
        let mut cache = FormatterCache::new();
        assert!(matches!(
            cache.parse_date("June", &DateFormatType::IsoDate, None),
            Err(FormatError::Parse { .. })
        ));
    }

    #[test]
    fn parse_datetime_offsets() {
        let iso = DateFormatter::from_pattern(&DateFormatType::IsoDateTime.string_format(), None).unwrap();
        let parsed = iso.parse_datetime("2022-06-05T19:20:30+0100").unwrap();
        assert_eq!(parsed.offset().fix().local_minus_utc(), 3600);
        assert_eq!(parsed.naive_utc(), ymd(2022, 6, 5).and_hms_opt(18, 20, 30).unwrap());

        let date = DateFormatter::from_pattern("yyyy-MM-dd", Some(Tz::Asia__Kolkata)).unwrap();
        let parsed = date.parse_datetime("2022-06-05").unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 19800);
        assert_eq!(parsed.naive_local(), ymd(2022, 6, 5).and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn templates_are_localized() {
        let mut cache = FormatterCache::new();
        let june = ymd(2022, 6, 17);

        let english = cache.template_formatter("MMMMyyyy", Some("en_US")).unwrap();
        assert_eq!(english.format_date(june).unwrap(), "June 2022");

        let german = cache.template_formatter("MMMMyyyy", Some("de-DE")).unwrap();
        assert_eq!(german.format_date(june).unwrap(), "Juni 2022");
    }
}
