//! Diagnostics produced while parsing.
//!
//! Parse errors are never fatal: the parser records them and keeps going.
//! This module defines:
//!
//! - `Error`, a diagnostic paired with the source position it refers to
//! - `ErrorImpl`, the kinds of diagnostic and their messages
//! - `ErrorTip`, a short suggestion used when rendering a diagnostic

pub mod errors;
