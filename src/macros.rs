//! Utility macros for the lexer.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// The two-argument form builds a fixed-form token with no payload; the
/// three-argument form attaches a text payload (identifiers and integer
/// constants).
///
/// # Example
///
/// ```ignore
/// let semicolon = MK_TOKEN!(TokenKind::Semicolon, span);
/// let number = MK_TOKEN!(TokenKind::IntConst, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: None,
            span: $span,
        }
    };
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: Some($value),
            span: $span,
        }
    };
}
