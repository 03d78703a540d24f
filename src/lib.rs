//! A hand-rolled, allocation-free lexical analyzer for GraphQL source text.
//!
//! The lexer scans a borrowed byte buffer in a single pass and produces a
//! stream of [`Token`]s — punctuators, names, numbers, strings, block
//! strings, and comments — each carrying a byte span and 1-indexed
//! line/column position. It does not parse, decode escapes, or build a
//! syntax tree; those are concerns of a layer built on top of this one.
//!
//! ```
//! use gql_lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new(b"{ hero { name } }").unwrap();
//! let mut kinds = Vec::new();
//! loop {
//!     let more = lexer.advance().unwrap();
//!     kinds.push(lexer.kind());
//!     if !more {
//!         break;
//!     }
//! }
//! assert_eq!(kinds.first(), Some(&TokenKind::LBrace));
//! assert_eq!(kinds.last(), Some(&TokenKind::EndOfFile));
//! ```

mod error;
mod lexer;
mod options;
mod tables;
mod token;

pub use error::{LexError, LexErrorKind, LexResult};
pub use lexer::Lexer;
pub use options::LexerOptions;
pub use token::{FloatFormat, Token, TokenKind};
