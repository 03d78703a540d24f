//! Lexical error taxonomy.
//!
//! A single [`LexError`] carries the position of the offending byte plus a
//! [`LexErrorKind`] payload, the same shape `intl_flat_json_parser::JsonPosition`
//! uses to carry line/column alongside parsed data, and the same single-enum
//! `thiserror` convention `keyless_json::Error` uses for its own error type.

use thiserror::Error;

/// One `SyntaxError` subcategory per row of the error taxonomy table.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum LexErrorKind {
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),

    #[error("invalid spread token; expected `...`")]
    InvalidSpreadToken,

    #[error("invalid number, unexpected digit after leading zero")]
    InvalidNumberLeadingZero,

    #[error("invalid number, expected a digit")]
    InvalidNumberExpectedDigit,

    #[error("invalid escape sequence `\\{0}`")]
    InvalidEscapeSequence(char),

    #[error("invalid character {0:?} in string")]
    InvalidCharacterInString(char),

    #[error("unterminated string")]
    UnterminatedString,

    #[error("input must not be empty")]
    EmptyInput,

    #[error("argument out of range: {0}")]
    ArgumentOutOfRange(&'static str),
}

/// A fatal syntax error, tagged with the 1-indexed line/column of the byte
/// that triggered it.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("SyntaxError: {kind} (line {line}, column {column})")]
pub struct LexError {
    pub line: u32,
    pub column: u32,
    pub kind: LexErrorKind,
}

impl LexError {
    pub fn new(line: u32, column: u32, kind: LexErrorKind) -> Self {
        log::warn!("lex error at {}:{}: {}", line, column, kind);
        Self { line, column, kind }
    }
}

pub type LexResult<T> = Result<T, LexError>;
