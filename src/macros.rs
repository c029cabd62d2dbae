//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span from two byte offsets

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's source text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), MK_SPAN!(0, 2));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $span:expr) => {
        Token {
            kind: $kind,
            literal: $literal,
            span: $span,
        }
    };
}

/// Creates a Span covering the byte offsets `[$start, $end)`.
///
/// Offsets past `u32::MAX` saturate.
#[macro_export]
macro_rules! MK_SPAN {
    ($start:expr, $end:expr) => {
        Span {
            start: Position(u32::try_from($start).unwrap_or(u32::MAX)),
            end: Position(u32::try_from($end).unwrap_or(u32::MAX)),
        }
    };
}
