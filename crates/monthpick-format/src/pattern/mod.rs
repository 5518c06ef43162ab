//! Unicode date pattern translation.
//!
//! ## Summary
//! Converts the `yyyy-MM-dd` style patterns used by [`crate::DateFormatType`]
//! into chrono strftime strings. Quoted text (`'T'`) is copied literally and
//! `''` yields a single quote. Letters without a chrono equivalent are
//! rejected instead of being passed through.

use crate::error::{FormatError, FormatResult};


/// A run of one pattern letter, e.g. `MMMM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Field {
    letter: char,
    width: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Field(Field),
    Literal(String),
}

fn tokenize(pattern: &str) -> FormatResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\'' {
            // '' outside a quoted section is an escaped quote
            if chars.peek() == Some(&'\'') {
                chars.next();
                tokens.push(Token::Literal("'".to_string()));
                continue;
            }

            let mut literal = String::new();
            let mut closed = false;
            while let Some(q) = chars.next() {
                if q != '\'' {
                    literal.push(q);
                } else if chars.peek() == Some(&'\'') {
                    chars.next();
                    literal.push('\'');
                } else {
                    closed = true;
                    break;
                }
            }
            if !closed {
                return Err(FormatError::UnterminatedLiteral(pattern.to_string()));
            }
            tokens.push(Token::Literal(literal));
        } else if c.is_ascii_alphabetic() {
            let mut width = 1;
            while chars.peek() == Some(&c) {
                chars.next();
                width += 1;
            }
            tokens.push(Token::Field(Field { letter: c, width }));
        } else {
            tokens.push(Token::Literal(c.to_string()));
        }
    }

    Ok(tokens)
}

fn field_to_strftime(field: Field, pattern: &str) -> FormatResult<&'static str> {
    let directive = match (field.letter, field.width) {
        ('y', 2) => "%y",
        ('y', _) => "%Y",
        ('M', 1) => "%-m",
        ('M', 2) => "%m",
        ('M', 3) => "%b",
        ('M', _) => "%B",
        ('d', 1) => "%-d",
        ('d', 2) => "%d",
        ('D', 1 | 2) => "%-j",
        ('D', 3) => "%j",
        ('E', 1..=3) => "%a",
        ('E', _) => "%A",
        ('H', 1) => "%-H",
        ('H', 2) => "%H",
        ('h', 1) => "%-I",
        ('h', 2) => "%I",
        ('m', 1) => "%-M",
        ('m', 2) => "%M",
        ('s', 1) => "%-S",
        ('s', 2) => "%S",
        ('S', 1..=3) => "%3f",
        ('S', 4..=6) => "%6f",
        ('S', 7..=9) => "%9f",
        ('a', _) => "%p",
        ('Z', 1..=3) => "%z",
        ('Z', 5) => "%:z",
        _ => {
            return Err(FormatError::UnsupportedField {
                field: field.letter.to_string().repeat(field.width),
                pattern: pattern.to_string(),
            });
        }
    };
    Ok(directive)
}

fn push_literal(out: &mut String, literal: &str) {
    for c in literal.chars() {
        if c == '%' {
            out.push_str("%%");
        } else {
            out.push(c);
        }
    }
}

/// ## Summary
/// Translates a Unicode date pattern into a chrono strftime string.
///
/// `"yyyy-MM-dd'T'HH:mm:ssZ"` becomes `"%Y-%m-%dT%H:%M:%S%z"`.
///
/// ## Errors
/// Returns `FormatError::UnsupportedField` for a letter run chrono cannot
/// express and `FormatError::UnterminatedLiteral` for an unclosed quote.
pub fn to_strftime(pattern: &str) -> FormatResult<String> {
    let mut out = String::with_capacity(pattern.len() * 2);
    for token in tokenize(pattern)? {
        match token {
            Token::Field(field) => out.push_str(field_to_strftime(field, pattern)?),
            Token::Literal(literal) => push_literal(&mut out, &literal),
        }
    }
    Ok(out)
}

/// ## Summary
/// Translates a skeleton such as `"MMMMyyyy"` into a strftime string.
///
/// A skeleton only names the fields to show. Each field is translated in the
/// order written and fields are joined with single spaces, so `"MMMMyyyy"`
/// becomes `"%B %Y"`. Anything other than letters is ignored. Field order is
/// not adapted to the locale.
///
/// ## Errors
/// Returns `FormatError::UnsupportedField` for a letter run chrono cannot express.
pub fn template_to_strftime(template: &str) -> FormatResult<String> {
    let fields = tokenize(template)?
        .into_iter()
        .filter_map(|token| match token {
            Token::Field(field) => Some(field_to_strftime(field, template)),
            Token::Literal(_) => None,
        })
        .collect::<FormatResult<Vec<_>>>()?;

    Ok(fields.join(" "))
}
