//! Named date formats.

/// A named date format used for string conversion.
///
/// Separator-driven variants take the separator placed between fields, so
/// `DdMmYyyy("-".into())` formats as `05-06-2022`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DateFormatType {
    /// `yyyy`, e.g. 2022
    IsoYear,
    /// `yyyy-MM`, e.g. 2022-06
    IsoYearMonth,
    /// `yyyy-MM-dd`, e.g. 2022-06-05
    IsoDate,
    /// `yyyy-MM-dd'T'HH:mm:ssZ`, e.g. 2022-06-05T19:20:30+0100
    IsoDateTime,
    /// `yyyy-MM-dd'T'HH:mm:ss.SSSZ`, e.g. 2022-06-05T19:20:30.450+0100
    IsoDateTimeFull,
    /// `EEE, d MMM yyyy HH:mm:ss ZZZ`, e.g. Sun, 5 Jun 2022 19:20:30 +0530
    HttpHeader,
    YyMmDd(String),
    MmDdYy(String),
    YyyyMmDd(String),
    DdMmYyyy(String),
    MmDdYyyy(String),
    DdMmYy(String),
    YyMmmDd(String),
    DdMmmYy(String),
    MmmDdYy(String),
    YyyyMmmDd(String),
    DdMmmYyyy(String),
    MmmDdYyyy(String),
    /// Two-digit year and day of year
    YyDdd(String),
    DddYy(String),
    YyyyDdd(String),
    DddYyyy(String),
    YyyyMm(String),
    /// Full month name, e.g. December
    Mmmm,
    /// Full weekday name, e.g. Sunday
    Eeee,
    Yyyy,
    HhMm(String),
    HhMmSs(String),
    /// `yyyyMMddZ`, e.g. 20220605+0530
    YyyyMmDdZ,
    /// A free-form pattern. When `separator` is set and non-empty, every `_`
    /// in `format` is replaced with it.
    Custom {
        format: String,
        separator: Option<String>,
    },
}

fn separated(template: &str, separator: &str) -> String {
    template.replace('_', separator)
}

impl DateFormatType {
    /// The Unicode date pattern this format stands for.
    #[must_use]
    pub fn string_format(&self) -> String {
        match self {
            Self::IsoYear | Self::Yyyy => "yyyy".to_string(),
            Self::IsoYearMonth => "yyyy-MM".to_string(),
            Self::IsoDate => "yyyy-MM-dd".to_string(),
            Self::IsoDateTime => "yyyy-MM-dd'T'HH:mm:ssZ".to_string(),
            Self::IsoDateTimeFull => "yyyy-MM-dd'T'HH:mm:ss.SSSZ".to_string(),
            Self::HttpHeader => "EEE, d MMM yyyy HH:mm:ss ZZZ".to_string(),
            Self::YyMmDd(separator) => separated("yy_MM_dd", separator),
            Self::MmDdYy(separator) => separated("MM_dd_yy", separator),
            Self::YyyyMmDd(separator) => separated("yyyy_MM_dd", separator),
            Self::DdMmYyyy(separator) => separated("dd_MM_yyyy", separator),
            Self::MmDdYyyy(separator) => separated("MM_dd_yyyy", separator),
            Self::DdMmYy(separator) => separated("dd_MM_yy", separator),
            Self::YyMmmDd(separator) => separated("yy_MMM_dd", separator),
            Self::DdMmmYy(separator) => separated("dd_MMM_yy", separator),
            Self::MmmDdYy(separator) => separated("MMM_dd_yy", separator),
            Self::YyyyMmmDd(separator) => separated("yyyy_MMM_dd", separator),
            Self::DdMmmYyyy(separator) => separated("dd_MMM_yyyy", separator),
            Self::MmmDdYyyy(separator) => separated("MMM_dd_yyyy", separator),
            Self::YyDdd(separator) => separated("yy_DDD", separator),
            Self::DddYy(separator) => separated("DDD_yy", separator),
            Self::YyyyDdd(separator) => separated("yyyy_DDD", separator),
            Self::DddYyyy(separator) => separated("DDD_yyyy", separator),
            Self::YyyyMm(separator) => separated("yyyy_MM", separator),
            Self::Mmmm => "MMMM".to_string(),
            Self::Eeee => "EEEE".to_string(),
            Self::HhMm(separator) => separated("HH_mm", separator),
            Self::HhMmSs(separator) => separated("HH_mm_ss", separator),
            Self::YyyyMmDdZ => "yyyyMMddZ".to_string(),
            Self::Custom { format, separator } => match separator {
                Some(separator) if !separator.is_empty() => separated(format, separator),
                _ => format.clone(),
            },
        }
    }
}
