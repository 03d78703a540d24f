//! Construction-time configuration for a [`crate::Lexer`].
//!
//! Mirrors the plain-struct-with-defaults convention the teacher workspace
//! uses for its own options types (e.g. `IntlMessageBundlerOptions`): a
//! public struct with a `Default` impl, no builder ceremony.

/// Options controlling lexer construction. Everything here has a sane
/// default; most callers never need to touch this.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LexerOptions {
    /// Reject buffers longer than this many bytes at construction time.
    /// Defaults to `usize::MAX`, i.e. unchecked.
    pub max_input_len: usize,
    /// Whether to recognize and skip a leading two-byte UTF-16 BOM
    /// (`FE FF`) in addition to the UTF-8 BOM (`EF BB BF`). Defaults to
    /// `true`, per spec.
    pub allow_utf16_bom: bool,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            max_input_len: usize::MAX,
            allow_utf16_bom: true,
        }
    }
}
