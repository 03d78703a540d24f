//! The byte-cursor scanner itself.
//!
//! The dispatch shape here — a `match`/if-else chain over the current byte
//! that branches into one `consume_*` method per token family, with small
//! helper methods for stepping the cursor (`current`, `peek_byte`,
//! `advance_*`, `is_eof`) — is the same shape as the teacher's
//! `Lexer::next_regular_token` in `lexer.rs`. Unlike the teacher, this
//! scanner never needs full checkpoint/rewind backtracking: every
//! lookahead-sensitive production here (`...`, exponent sign, block-string
//! escaped triple-quote) resolves with a small fixed-width peek, because
//! GraphQL's lexical grammar doesn't have the teacher's URI/email-style
//! speculative productions.

use crate::error::{LexError, LexErrorKind, LexResult};
use crate::options::LexerOptions;
use crate::tables;
use crate::token::{FloatFormat, Token, TokenKind};

const EMPTY: &[u8] = &[];

/// A single-pass, allocation-free scanner over a borrowed byte buffer.
///
/// Tokens are produced by repeatedly calling [`Lexer::advance`]; the current
/// token's kind, span, and value are then read back through the observer
/// methods (`kind`, `start`, `end`, `value`, ...). See the crate-level docs
/// for the full contract.
pub struct Lexer<'a> {
    data: &'a [u8],
    length: usize,
    position: usize,
    kind: TokenKind,
    start: usize,
    end: usize,
    value: &'a [u8],
    float_format: Option<FloatFormat>,
    line: u32,
    line_start: usize,
    column: u32,
    pending_new_lines: u32,
    options: LexerOptions,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `data` with default [`LexerOptions`].
    ///
    /// Returns [`LexErrorKind::EmptyInput`] if `data` is empty.
    pub fn new(data: &'a [u8]) -> LexResult<Self> {
        Self::with_options(data, LexerOptions::default())
    }

    /// Creates a lexer over `data` with explicit [`LexerOptions`].
    pub fn with_options(data: &'a [u8], options: LexerOptions) -> LexResult<Self> {
        if data.is_empty() {
            return Err(LexError::new(1, 1, LexErrorKind::EmptyInput));
        }
        if data.len() > options.max_input_len {
            return Err(LexError::new(
                1,
                1,
                LexErrorKind::ArgumentOutOfRange("input exceeds max_input_len"),
            ));
        }

        log::debug!("constructing lexer over {} bytes", data.len());

        Ok(Self {
            data,
            length: data.len(),
            position: 0,
            kind: TokenKind::StartOfFile,
            start: 0,
            end: 0,
            value: EMPTY,
            float_format: None,
            line: 1,
            line_start: 0,
            column: 1,
            pending_new_lines: 0,
            options,
        })
    }

    //#region Observers

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn line_start(&self) -> usize {
        self.line_start
    }

    pub fn value(&self) -> &'a [u8] {
        self.value
    }

    pub fn float_format(&self) -> Option<FloatFormat> {
        self.float_format
    }

    pub fn is_end_of_stream(&self) -> bool {
        self.is_eof()
    }

    /// Builds a standalone [`Token`] snapshot of the current lexer state.
    pub fn current_token(&self) -> Token<'a> {
        Token {
            kind: self.kind,
            start: self.start,
            end: self.end,
            value: self.value,
            float_format: self.float_format,
            line: self.line,
            column: self.column,
        }
    }

    /// Recomputes `column` from `position` and `line_start`. Exposed so that
    /// higher layers (e.g. a block-string indentation post-processor) that
    /// mutate position bookkeeping via [`Lexer::set_new_line`] can re-derive
    /// a consistent column afterward.
    pub fn update_column(&mut self) {
        self.column = 1 + (self.position - self.line_start) as u32;
    }

    /// Registers one additional line break to be applied on the next
    /// whitespace skip. See [`Lexer::set_new_lines`].
    pub fn set_new_line(&mut self) -> LexResult<()> {
        self.set_new_lines(1)
    }

    /// Registers `n` additional line breaks to be applied on the next
    /// whitespace skip. `n` must be at least 1.
    pub fn set_new_lines(&mut self, n: u32) -> LexResult<()> {
        if n < 1 {
            return Err(self.err(LexErrorKind::ArgumentOutOfRange("n must be >= 1")));
        }
        self.pending_new_lines += n;
        Ok(())
    }

    //#endregion

    /// Lex the next token. Returns `Ok(true)` when a real token was
    /// produced, `Ok(false)` exactly when the terminal `EndOfFile` token is
    /// produced. Calls after `EndOfFile` are idempotent no-ops.
    pub fn advance(&mut self) -> LexResult<bool> {
        if self.kind == TokenKind::EndOfFile {
            return Ok(false);
        }

        self.float_format = None;
        if self.position == 0 {
            self.skip_bom();
        }
        self.skip_insignificant();
        self.update_column();
        self.start = self.position;

        if self.is_eof() {
            self.kind = TokenKind::EndOfFile;
            self.end = self.position;
            self.value = EMPTY;
            return Ok(false);
        }

        let previous_kind = self.kind;
        let b = self.current();
        let outcome = if tables::is_punctuator(b) {
            self.consume_punctuator().map(Some)
        } else if tables::is_letter_or_underscore(b) {
            Ok(Some(self.consume_name()))
        } else if tables::is_digit_or_minus(b) {
            self.consume_number().map(Some)
        } else if b == tables::HASH {
            Ok(Some(self.consume_comment()))
        } else if b == tables::QUOTE {
            self.consume_string_like()
        } else {
            let ch = self.current_char();
            Err(self.err(LexErrorKind::UnexpectedCharacter(ch)))
        }?;

        match outcome {
            Some(kind) => {
                self.kind = kind;
                Ok(true)
            }
            // §4.8 / open question in spec.md §9: a raw line terminator
            // inside a single-line string exits scanning without an error
            // and without consuming the terminator. The current token
            // reverts to whatever it was before this call.
            None => {
                self.kind = previous_kind;
                Ok(true)
            }
        }
    }

    //#region Whitespace & line tracking

    fn skip_bom(&mut self) {
        if self.data.len() >= 3 && self.data[0] == 0xEF && self.data[1] == 0xBB && self.data[2] == 0xBF {
            self.position = 3;
        } else if self.options.allow_utf16_bom
            && self.data.len() >= 2
            && self.data[0] == 0xFE
            && self.data[1] == 0xFF
        {
            self.position = 2;
        }
    }

    fn skip_insignificant(&mut self) {
        loop {
            if self.pending_new_lines > 0 {
                self.line += self.pending_new_lines;
                self.line_start = self.position;
                self.pending_new_lines = 0;
            }
            if self.is_eof() {
                break;
            }
            match self.current() {
                tables::SPACE | tables::TAB | tables::COMMA => self.position += 1,
                tables::NEWLINE => {
                    self.position += 1;
                    self.line += 1;
                    self.line_start = self.position;
                }
                tables::RETURN => {
                    self.position += 1;
                    if !self.is_eof() && self.current() == tables::NEWLINE {
                        self.position += 1;
                    }
                    self.line += 1;
                    self.line_start = self.position;
                }
                _ => break,
            }
        }
    }

    //#endregion

    //#region Punctuators

    fn consume_punctuator(&mut self) -> LexResult<TokenKind> {
        let b = self.current();
        if b == tables::DOT {
            return self.consume_spread();
        }
        let kind = tables::punctuator_kind(b);
        self.position += 1;
        self.end = self.position;
        self.value = EMPTY;
        Ok(kind)
    }

    fn consume_spread(&mut self) -> LexResult<TokenKind> {
        if self.peek_byte(1) == Some(tables::DOT) && self.peek_byte(2) == Some(tables::DOT) {
            self.position += 3;
            self.end = self.position;
            self.value = EMPTY;
            Ok(TokenKind::Spread)
        } else {
            Err(self.err(LexErrorKind::InvalidSpreadToken))
        }
    }

    //#endregion

    //#region Name

    fn consume_name(&mut self) -> TokenKind {
        while !self.is_eof() && tables::is_letter_or_digit_or_underscore(self.current()) {
            self.position += 1;
        }
        self.end = self.position;
        self.value = &self.data[self.start..self.end];
        TokenKind::Name
    }

    //#endregion

    //#region Number

    fn consume_number(&mut self) -> LexResult<TokenKind> {
        if self.current() == tables::MINUS {
            self.position += 1;
        }
        if self.is_eof() || !tables::is_digit(self.current()) {
            return Err(self.err(LexErrorKind::InvalidNumberExpectedDigit));
        }

        if self.current() == tables::ZERO {
            self.position += 1;
            if !self.is_eof() && tables::is_digit(self.current()) {
                return Err(self.err(LexErrorKind::InvalidNumberLeadingZero));
            }
        } else {
            self.consume_digit_run()?;
        }

        let mut kind = TokenKind::Integer;
        let mut float_format = None;

        if !self.is_eof() && self.current() == tables::DOT {
            self.position += 1;
            self.consume_digit_run()?;
            kind = TokenKind::Float;
            float_format = Some(FloatFormat::FixedPoint);
        }

        if !self.is_eof() && matches!(self.current(), tables::LOWER_E | tables::UPPER_E) {
            self.position += 1;
            if !self.is_eof() && matches!(self.current(), tables::PLUS | tables::MINUS) {
                self.position += 1;
            }
            self.consume_digit_run()?;
            kind = TokenKind::Float;
            float_format = Some(FloatFormat::Exponential);
        }

        self.end = self.position;
        self.value = &self.data[self.start..self.end];
        self.float_format = float_format;
        Ok(kind)
    }

    fn consume_digit_run(&mut self) -> LexResult<()> {
        if self.is_eof() || !tables::is_digit(self.current()) {
            return Err(self.err(LexErrorKind::InvalidNumberExpectedDigit));
        }
        while !self.is_eof() && tables::is_digit(self.current()) {
            self.position += 1;
        }
        Ok(())
    }

    //#endregion

    //#region Comment

    fn consume_comment(&mut self) -> TokenKind {
        let body_start = self.start + 1;
        self.position += 1; // consume '#'
        while !self.is_eof() && !tables::is_control_character(self.current()) {
            self.position += 1;
        }
        self.end = self.position;

        let body = &self.data[body_start..self.end];
        let mut trimmed = 0;
        for &b in body {
            if b == tables::HASH || b == tables::SPACE || b == tables::TAB {
                trimmed += 1;
            } else {
                break;
            }
        }
        self.value = &body[trimmed..];
        TokenKind::Comment
    }

    //#endregion

    //#region Strings

    fn consume_string_like(&mut self) -> LexResult<Option<TokenKind>> {
        if self.peek_byte(1) == Some(tables::QUOTE) && self.peek_byte(2) == Some(tables::QUOTE) {
            self.consume_block_string().map(Some)
        } else {
            self.consume_single_line_string()
        }
    }

    fn consume_single_line_string(&mut self) -> LexResult<Option<TokenKind>> {
        self.position += 1; // opening quote
        let inner_start = self.position;
        loop {
            if self.is_eof() {
                return Err(self.err(LexErrorKind::UnterminatedString));
            }
            let c = self.current();
            if c == tables::QUOTE {
                let inner_end = self.position;
                self.position += 1;
                self.end = self.position;
                self.value = &self.data[inner_start..inner_end];
                return Ok(Some(TokenKind::String));
            }
            if c == tables::NEWLINE || c == tables::RETURN {
                return Ok(None);
            }
            if c == tables::BACKSLASH {
                self.position += 1;
                if self.is_eof() {
                    return Err(self.err(LexErrorKind::UnterminatedString));
                }
                let escaped = self.current();
                if !tables::is_escape_character(escaped) {
                    return Err(self.err(LexErrorKind::InvalidEscapeSequence(escaped as char)));
                }
                self.position += 1;
                continue;
            }
            if tables::is_control_character(c) {
                return Err(self.err(LexErrorKind::InvalidCharacterInString(c as char)));
            }
            self.position += 1;
        }
    }

    /// Scans from the opening `"""` through the closing `"""`.
    ///
    /// Unlike every other token kind, `end` here is an *inclusive* index
    /// (the last byte of the closing triple quote), per spec.md §4.9, so
    /// that `value = data[start+3 .. end-2)` lands exactly on the inner
    /// body. `position` still advances to one past `end`, as usual.
    fn consume_block_string(&mut self) -> LexResult<TokenKind> {
        self.position += 3; // opening """
        let inner_start = self.position;
        loop {
            if self.is_eof() {
                return Err(self.err(LexErrorKind::UnterminatedString));
            }
            let c = self.current();
            if c == tables::BACKSLASH
                && self.peek_byte(1) == Some(tables::QUOTE)
                && self.peek_byte(2) == Some(tables::QUOTE)
                && self.peek_byte(3) == Some(tables::QUOTE)
            {
                self.position += 4;
                continue;
            }
            if c == tables::QUOTE
                && self.peek_byte(1) == Some(tables::QUOTE)
                && self.peek_byte(2) == Some(tables::QUOTE)
            {
                let closing_start = self.position;
                self.position += 3;
                self.value = &self.data[inner_start..closing_start];
                self.end = closing_start + 2;
                return Ok(TokenKind::BlockString);
            }
            if c == tables::NEWLINE {
                self.pending_new_lines += 1;
                self.position += 1;
                continue;
            }
            if c == tables::RETURN {
                self.pending_new_lines += 1;
                self.position += 1;
                if !self.is_eof() && self.current() == tables::NEWLINE {
                    self.position += 1;
                }
                continue;
            }
            if tables::is_control_character_no_newline(c) {
                return Err(self.err(LexErrorKind::InvalidCharacterInString(c as char)));
            }
            self.position += 1;
        }
    }

    //#endregion

    //#region Internal helpers

    fn current(&self) -> u8 {
        self.data[self.position]
    }

    fn peek_byte(&self, offset: usize) -> Option<u8> {
        self.data.get(self.position + offset).copied()
    }

    fn is_eof(&self) -> bool {
        self.position >= self.length
    }

    fn current_char(&self) -> char {
        std::str::from_utf8(&self.data[self.position..])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or('\u{FFFD}')
    }

    /// Builds a [`LexError`] at the current token's start position. Every
    /// fatal error in this lexer is reported at the start of the token being
    /// scanned rather than the exact offending byte — matching the one
    /// concrete case spec.md pins down (`..` raising `InvalidToken(Spread)`
    /// at the position of the first `.`, not the missing third one).
    fn err(&self, kind: LexErrorKind) -> LexError {
        LexError::new(self.line, self.column, kind)
    }

    //#endregion
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token<'_>> {
        let mut lexer = Lexer::new(input.as_bytes()).unwrap();
        let mut out = Vec::new();
        loop {
            let more = lexer.advance().unwrap();
            out.push(lexer.current_token());
            if !more {
                break;
            }
        }
        out
    }

    #[test]
    fn initial_state_matches_invariants() {
        let lexer = Lexer::new(b"x").unwrap();
        assert_eq!(lexer.kind(), TokenKind::StartOfFile);
        assert_eq!(lexer.start(), 0);
        assert_eq!(lexer.end(), 0);
        assert_eq!(lexer.position(), 0);
        assert_eq!(lexer.line(), 1);
        assert_eq!(lexer.line_start(), 0);
        assert_eq!(lexer.column(), 1);
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = Lexer::new(b"").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::EmptyInput);
    }

    #[test]
    fn eof_is_sticky() {
        let mut lexer = Lexer::new(b"x").unwrap();
        assert!(lexer.advance().unwrap());
        assert_eq!(lexer.kind(), TokenKind::Name);
        assert!(!lexer.advance().unwrap());
        assert_eq!(lexer.kind(), TokenKind::EndOfFile);
        let (start, end) = (lexer.start(), lexer.end());
        assert!(!lexer.advance().unwrap());
        assert_eq!((lexer.start(), lexer.end()), (start, end));
    }

    #[test]
    fn s1_braces_and_names() {
        let toks = tokens("{ hero { name } }");
        let kinds: Vec<_> = toks.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::LBrace,
                TokenKind::Name,
                TokenKind::LBrace,
                TokenKind::Name,
                TokenKind::RBrace,
                TokenKind::RBrace,
                TokenKind::EndOfFile,
            ]
        );
        assert_eq!((toks[0].start, toks[0].end), (0, 1));
        assert_eq!((toks[1].start, toks[1].end), (2, 6));
        assert_eq!(toks[1].value, b"hero");
        assert_eq!((toks[6].start, toks[6].end), (17, 17));
    }

    #[test]
    fn s2_query_with_variable() {
        let toks = tokens("query Q($x: Int = 42) { a(x: $x) }");
        let kinds: Vec<_> = toks.iter().map(|t| t.kind).collect();
        use TokenKind::*;
        assert_eq!(
            kinds,
            vec![
                Name, Name, LParen, Dollar, Name, Colon, Name, Equal, Integer, RParen, LBrace,
                Name, LParen, Name, Colon, Dollar, Name, RParen, RBrace, EndOfFile,
            ]
        );
        assert_eq!(toks[8].value, b"42");
    }

    #[test]
    fn s3_negative_exponential_float() {
        let toks = tokens("-0.5e-3");
        assert_eq!(toks[0].kind, TokenKind::Float);
        assert_eq!(toks[0].value, b"-0.5e-3");
        assert_eq!(toks[0].float_format, Some(FloatFormat::Exponential));
    }

    #[test]
    fn s4_comment_then_next_line() {
        let toks = tokens("# hello\n{a}");
        assert_eq!(toks[0].kind, TokenKind::Comment);
        assert_eq!(toks[0].value, b"hello");
        assert_eq!(toks[1].kind, TokenKind::LBrace);
        assert_eq!(toks[1].line, 2);
        assert_eq!(toks[1].column, 1);
        assert_eq!(toks[2].column, 2);
        assert_eq!(toks[3].column, 3);
    }

    #[test]
    fn s5_block_string_newline_is_pending_until_next_token() {
        let mut lexer = Lexer::new(b"\"\"\"line1\nline2\"\"\"").unwrap();
        assert!(lexer.advance().unwrap());
        assert_eq!(lexer.kind(), TokenKind::BlockString);
        assert_eq!(lexer.value(), b"line1\nline2");
        assert_eq!(lexer.line(), 1);
        assert!(!lexer.advance().unwrap());
        assert_eq!(lexer.kind(), TokenKind::EndOfFile);
        assert_eq!(lexer.line(), 2);
    }

    #[test]
    fn s6_lone_dot_is_invalid_spread() {
        let mut lexer = Lexer::new(b"..").unwrap();
        let err = lexer.advance().unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.column, 1);
        assert_eq!(err.kind, LexErrorKind::InvalidSpreadToken);
    }

    #[test]
    fn spread_consumes_three_dots() {
        let toks = tokens("...");
        assert_eq!(toks[0].kind, TokenKind::Spread);
        assert_eq!((toks[0].start, toks[0].end), (0, 3));
    }

    #[test]
    fn zero_alone_is_valid_integer() {
        let toks = tokens("0");
        assert_eq!(toks[0].kind, TokenKind::Integer);
        assert_eq!(toks[0].value, b"0");
    }

    #[test]
    fn leading_zero_followed_by_digit_is_an_error() {
        let mut lexer = Lexer::new(b"00").unwrap();
        let err = lexer.advance().unwrap_err();
        assert_eq!(err.kind, LexErrorKind::InvalidNumberLeadingZero);
    }

    #[test]
    fn fixed_point_float_is_tagged() {
        let toks = tokens("1.5");
        assert_eq!(toks[0].kind, TokenKind::Float);
        assert_eq!(toks[0].float_format, Some(FloatFormat::FixedPoint));
    }

    #[test]
    fn exponential_overrides_fixed_point_tag() {
        let toks = tokens("1.0e+5");
        assert_eq!(toks[0].kind, TokenKind::Float);
        assert_eq!(toks[0].value, b"1.0e+5");
        assert_eq!(toks[0].float_format, Some(FloatFormat::Exponential));
    }

    #[test]
    fn string_round_trips_inner_value() {
        let toks = tokens(r#""hello""#);
        assert_eq!(toks[0].kind, TokenKind::String);
        assert_eq!(toks[0].value, b"hello");
    }

    #[test]
    fn string_with_raw_newline_exits_without_error() {
        let mut lexer = Lexer::new(b"\"\n").unwrap();
        assert_eq!(lexer.kind(), TokenKind::StartOfFile);
        let result = lexer.advance();
        assert!(result.is_ok());
        assert_eq!(lexer.kind(), TokenKind::StartOfFile);
        assert_eq!(lexer.position(), 1);
    }

    #[test]
    fn unterminated_string_is_an_error() {
        let mut lexer = Lexer::new(b"\"abc").unwrap();
        let err = lexer.advance().unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    }

    #[test]
    fn invalid_escape_sequence_is_an_error() {
        let mut lexer = Lexer::new(br#""\q""#).unwrap();
        let err = lexer.advance().unwrap_err();
        assert_eq!(err.kind, LexErrorKind::InvalidEscapeSequence('q'));
    }

    #[test]
    fn block_string_with_escaped_triple_quote() {
        // """a\"""b"""
        let mut input = Vec::new();
        input.extend_from_slice(b"\"\"\"");
        input.extend_from_slice(b"a\\\"\"\"b");
        input.extend_from_slice(b"\"\"\"");
        let mut lexer = Lexer::new(&input).unwrap();
        lexer.advance().unwrap();
        assert_eq!(lexer.kind(), TokenKind::BlockString);
        assert_eq!(lexer.value(), b"a\\\"\"\"b");
    }

    #[test]
    fn block_string_span_is_inclusive_of_closing_quotes() {
        // """x"""
        let mut input = Vec::new();
        input.extend_from_slice(b"\"\"\"");
        input.extend_from_slice(b"x");
        input.extend_from_slice(b"\"\"\"");
        let mut lexer = Lexer::new(&input).unwrap();
        lexer.advance().unwrap();
        assert_eq!(lexer.kind(), TokenKind::BlockString);
        assert_eq!(lexer.end() - lexer.start() + 1, lexer.position());
    }

    #[test]
    fn block_string_control_character_is_rejected() {
        // """a<NUL>b"""
        let mut input = Vec::new();
        input.extend_from_slice(b"\"\"\"");
        input.extend_from_slice(b"a\x00b");
        input.extend_from_slice(b"\"\"\"");
        let mut lexer = Lexer::new(&input).unwrap();
        let err = lexer.advance().unwrap_err();
        assert_eq!(err.kind, LexErrorKind::InvalidCharacterInString('\0'));
    }

    #[test]
    fn block_string_crlf_counts_as_a_single_pending_newline() {
        // """line1\r\nline2"""
        let mut input = Vec::new();
        input.extend_from_slice(b"\"\"\"");
        input.extend_from_slice(b"line1\r\nline2");
        input.extend_from_slice(b"\"\"\"");
        let mut lexer = Lexer::new(&input).unwrap();
        lexer.advance().unwrap();
        assert_eq!(lexer.kind(), TokenKind::BlockString);
        assert_eq!(lexer.value(), b"line1\r\nline2");
        assert_eq!(lexer.line(), 1);
        assert!(!lexer.advance().unwrap());
        assert_eq!(lexer.kind(), TokenKind::EndOfFile);
        assert_eq!(lexer.line(), 2);
    }

    #[test]
    fn comment_trims_leading_hashes_spaces_and_tabs_only() {
        let toks = tokens("#   hi  ");
        assert_eq!(toks[0].value, b"hi  ");
    }

    #[test]
    fn consecutive_hashes_are_all_trimmed() {
        let toks = tokens("## banner");
        assert_eq!(toks[0].value, b"banner");
    }

    #[test]
    fn commas_and_whitespace_are_insignificant() {
        let toks = tokens("a,,, b");
        assert_eq!(toks[0].kind, TokenKind::Name);
        assert_eq!(toks[0].value, b"a");
        assert_eq!(toks[1].kind, TokenKind::Name);
        assert_eq!(toks[1].value, b"b");
    }

    #[test]
    fn crlf_counts_as_a_single_line_terminator() {
        let toks = tokens("a\r\nb");
        assert_eq!(toks[1].line, 2);
        assert_eq!(toks[1].column, 1);
    }

    #[test]
    fn utf8_bom_is_skipped_at_construction() {
        let mut data = vec![0xEF, 0xBB, 0xBF];
        data.extend_from_slice(b"x");
        let mut lexer = Lexer::new(&data).unwrap();
        lexer.advance().unwrap();
        assert_eq!(lexer.kind(), TokenKind::Name);
        assert_eq!(lexer.start(), 3);
    }

    #[test]
    fn set_new_lines_rejects_zero() {
        let mut lexer = Lexer::new(b"x").unwrap();
        let err = lexer.set_new_lines(0).unwrap_err();
        assert_eq!(
            err.kind,
            LexErrorKind::ArgumentOutOfRange("n must be >= 1")
        );
    }

    #[test]
    fn tokens_have_strictly_non_decreasing_starts() {
        let toks = tokens("{ a(b: 1.5, c: \"x\") }");
        for pair in toks.windows(2) {
            assert!(pair[1].start >= pair[0].end);
        }
    }
}
