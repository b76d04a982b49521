use super::lexer::TokenKind;
use crate::common::NonEmpty;
use std::fmt;
use std::ops::Range;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("error at position {} ({slice:?}): {kind}", .span.start)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Range<usize>,
    pub slice: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    UnexpectedToken {
        found: Option<TokenKind>,
        expected: NonEmpty<TokenKind>,
    },
    UnexpectedString {
        expected: NonEmpty<TokenKind>,
    },
    InvalidInteger,
    TrailingInput,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken {
                found: Some(found),
                expected,
            } => write!(
                f,
                "unexpected token: found {}, expected {}",
                found,
                expected.fmt_expected()
            ),
            Self::UnexpectedToken {
                found: None,
                expected,
            } => write!(
                f,
                "unexpected end of input, expected {}",
                expected.fmt_expected()
            ),
            Self::UnexpectedString { expected } => {
                write!(f, "expected {}", expected.fmt_expected())
            }
            Self::InvalidInteger => f.write_str("integer is out of range"),
            Self::TrailingInput => f.write_str("unexpected input after the end of the roll"),
        }
    }
}

trait FormatExpected {
    fn fmt_expected(&self) -> String;
}

impl FormatExpected for [TokenKind] {
    fn fmt_expected(&self) -> String {
        match self {
            [] => String::new(),
            [a] => a.to_string(),
            [a, b] => format!("{} or {}", a, b),
            [init @ .., last] => {
                let init: Vec<_> = init.iter().map(TokenKind::as_str).collect();
                format!("{}, or {}", init.join(", "), last)
            }
        }
    }
}
