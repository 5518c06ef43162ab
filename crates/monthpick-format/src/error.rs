use thiserror::Error;

/// Formatting and parsing errors
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Unsupported pattern field '{field}' in '{pattern}'")]
    UnsupportedField { field: String, pattern: String },

    #[error("Unterminated quoted literal in '{0}'")]
    UnterminatedLiteral(String),

    #[error("Invalid strftime string '{0}'")]
    InvalidFormat(String),

    #[error("Could not parse '{input}': {source}")]
    Parse {
        input: String,
        source: chrono::ParseError,
    },

    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Local time {0} does not exist or is ambiguous in the formatter's time zone")]
    AmbiguousLocalTime(String),
}

pub type FormatResult<T> = std::result::Result<T, FormatError>;
