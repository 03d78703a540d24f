//! Byte-classification tables used to drive the scanner in O(1) per byte.
//!
//! Every table here is a `const`-evaluated 256-entry array, built once at
//! compile time and shared process-wide — there is nothing to initialize and
//! nothing to allocate. This mirrors the `UTF8_LENGTH_LOOKUP` /
//! `SIGNIFICANT_PUNCTUATION_BYTES` tables the teacher crate precomputes for
//! its own byte-cursor scanner, except these are derived with `const fn`
//! instead of a proc-macro, since the full set of predicates here is small
//! enough to not warrant generating its own macro crate.

use crate::token::TokenKind;

pub const HASH: u8 = b'#';
pub const QUOTE: u8 = b'"';
pub const BACKSLASH: u8 = b'\\';
pub const DOT: u8 = b'.';
pub const MINUS: u8 = b'-';
pub const PLUS: u8 = b'+';
pub const ZERO: u8 = b'0';
pub const LOWER_E: u8 = b'e';
pub const UPPER_E: u8 = b'E';
pub const SPACE: u8 = b' ';
pub const TAB: u8 = b'\t';
pub const COMMA: u8 = b',';
pub const NEWLINE: u8 = b'\n';
pub const RETURN: u8 = b'\r';

const fn is_punctuator_byte(b: u8) -> bool {
    matches!(
        b,
        b'!' | b'$' | b'&' | b'(' | b')' | b'.' | b':' | b'=' | b'@' | b'[' | b']' | b'{' | b'|' | b'}'
    )
}

const fn punctuator_kind_of(b: u8) -> TokenKind {
    match b {
        b'!' => TokenKind::Bang,
        b'$' => TokenKind::Dollar,
        b'&' => TokenKind::Ampersand,
        b'(' => TokenKind::LParen,
        b')' => TokenKind::RParen,
        // `.` never resolves here; the spread recognizer owns it. Mapped to
        // itself as a harmless placeholder so the table stays total.
        b'.' => TokenKind::Spread,
        b':' => TokenKind::Colon,
        b'=' => TokenKind::Equal,
        b'@' => TokenKind::At,
        b'[' => TokenKind::LBracket,
        b']' => TokenKind::RBracket,
        b'{' => TokenKind::LBrace,
        b'|' => TokenKind::Pipe,
        b'}' => TokenKind::RBrace,
        _ => TokenKind::EndOfFile,
    }
}

const fn is_digit_byte(b: u8) -> bool {
    b.is_ascii_digit()
}

const fn is_digit_or_minus_byte(b: u8) -> bool {
    is_digit_byte(b) || b == MINUS
}

const fn is_letter_or_underscore_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

const fn is_letter_or_digit_or_underscore_byte(b: u8) -> bool {
    is_letter_or_underscore_byte(b) || is_digit_byte(b)
}

const fn is_escape_character_byte(b: u8) -> bool {
    matches!(
        b,
        b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' | b'u'
    )
}

const fn is_control_character_byte(b: u8) -> bool {
    (b < 0x20 && b != TAB) || b == 0x7F
}

const fn is_control_character_no_newline_byte(b: u8) -> bool {
    is_control_character_byte(b) && b != NEWLINE && b != RETURN
}

macro_rules! build_table {
    ($name:ident, $predicate:expr) => {
        const fn build() -> [bool; 256] {
            let mut table = [false; 256];
            let mut b: usize = 0;
            while b < 256 {
                table[b] = $predicate(b as u8);
                b += 1;
            }
            table
        }
        pub static $name: [bool; 256] = build();
    };
}

build_table!(IS_PUNCTUATOR, is_punctuator_byte);
build_table!(IS_DIGIT, is_digit_byte);
build_table!(IS_DIGIT_OR_MINUS, is_digit_or_minus_byte);
build_table!(IS_LETTER_OR_UNDERSCORE, is_letter_or_underscore_byte);
build_table!(
    IS_LETTER_OR_DIGIT_OR_UNDERSCORE,
    is_letter_or_digit_or_underscore_byte
);
build_table!(IS_ESCAPE_CHARACTER, is_escape_character_byte);
build_table!(IS_CONTROL_CHARACTER, is_control_character_byte);
build_table!(
    IS_CONTROL_CHARACTER_NO_NEWLINE,
    is_control_character_no_newline_byte
);

const fn build_punctuator_kind() -> [TokenKind; 256] {
    let mut table = [TokenKind::EndOfFile; 256];
    let mut b: usize = 0;
    while b < 256 {
        table[b] = punctuator_kind_of(b as u8);
        b += 1;
    }
    table
}
pub static PUNCTUATOR_KIND: [TokenKind; 256] = build_punctuator_kind();

#[inline(always)]
pub fn is_punctuator(b: u8) -> bool {
    IS_PUNCTUATOR[b as usize]
}

#[inline(always)]
pub fn punctuator_kind(b: u8) -> TokenKind {
    PUNCTUATOR_KIND[b as usize]
}

#[inline(always)]
pub fn is_digit(b: u8) -> bool {
    IS_DIGIT[b as usize]
}

#[inline(always)]
pub fn is_digit_or_minus(b: u8) -> bool {
    IS_DIGIT_OR_MINUS[b as usize]
}

#[inline(always)]
pub fn is_letter_or_underscore(b: u8) -> bool {
    IS_LETTER_OR_UNDERSCORE[b as usize]
}

#[inline(always)]
pub fn is_letter_or_digit_or_underscore(b: u8) -> bool {
    IS_LETTER_OR_DIGIT_OR_UNDERSCORE[b as usize]
}

#[inline(always)]
pub fn is_escape_character(b: u8) -> bool {
    IS_ESCAPE_CHARACTER[b as usize]
}

#[inline(always)]
pub fn is_control_character(b: u8) -> bool {
    IS_CONTROL_CHARACTER[b as usize]
}

#[inline(always)]
pub fn is_control_character_no_newline(b: u8) -> bool {
    IS_CONTROL_CHARACTER_NO_NEWLINE[b as usize]
}
