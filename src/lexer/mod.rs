//! Lexical analysis.
//!
//! Converts source text into tokens, one token per call:
//!
//! - Single and two-character operators (`=` vs `==`, `!` vs `!=`)
//! - Identifiers and the reserved keywords
//! - Integer literals
//! - Unrecognised characters, reported as `Illegal` tokens

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
