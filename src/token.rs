//! Token kinds and the borrowed [`Token`] type itself.
//!
//! `Token` deliberately holds a `&'a [u8]` view into the caller's buffer
//! rather than an owned/ref-counted string — unlike the teacher's
//! `SyntaxToken`, which wraps an `Rc<str>` so tokens can be cheaply cloned
//! into a mutable CST. This crate never builds a tree, so there is nothing
//! to clone into; every token borrows directly from the source for its
//! entire lifetime.

/// The closed set of lexical token kinds a [`crate::Lexer`] can produce.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    StartOfFile,
    EndOfFile,
    Name,
    Integer,
    Float,
    String,
    BlockString,
    Comment,
    Bang,
    Dollar,
    Ampersand,
    LParen,
    RParen,
    Spread,
    Colon,
    Equal,
    At,
    LBracket,
    RBracket,
    LBrace,
    Pipe,
    RBrace,
}

/// Tag distinguishing the two lexical shapes of a [`TokenKind::Float`] token.
/// Absent on every other token kind.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum FloatFormat {
    /// A decimal point with no exponent, e.g. `1.5`.
    FixedPoint,
    /// An exponent, with or without a decimal point, e.g. `1e5`, `1.5e-2`.
    Exponential,
}

/// A single classified token, as a borrowed view into the source buffer that
/// produced it. `value` is a sub-slice of `[start, end)`:
///
/// - for [`TokenKind::String`], the inner body excluding the surrounding quotes
/// - for [`TokenKind::BlockString`], the inner body excluding the `"""` delimiters
/// - for [`TokenKind::Comment`], the body with leading `#`/space/tab trimmed
/// - for [`TokenKind::Name`], [`TokenKind::Integer`], [`TokenKind::Float`], the full lexeme
/// - empty for punctuators and [`TokenKind::EndOfFile`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub value: &'a [u8],
    pub float_format: Option<FloatFormat>,
    pub line: u32,
    pub column: u32,
}

impl<'a> Token<'a> {
    /// Returns `value` reinterpreted as UTF-8, or `None` if it isn't.
    ///
    /// `Lexer::new` takes `&[u8]`, not `&str` — per spec.md §3, UTF-8 is
    /// assumed but never required of the input — so a caller feeding in
    /// arbitrary bytes can produce a token whose `value` isn't valid UTF-8.
    /// This is checked rather than asserted for that reason.
    pub fn value_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.value).ok()
    }
}
