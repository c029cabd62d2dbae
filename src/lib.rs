#![allow(clippy::module_inception)]

use std::fmt::Write;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod cli;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod repl;

pub use lexer::lexer::{tokenize, Lexer};
pub use parser::parser::{parse, Parser};

/// Byte offset into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position(pub u32);

/// Half-open byte range `[start, end)` into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing `position`.
///
/// Returns the 1-based line number, the text of the line (including its
/// newline, if any) and the byte offset of `position` within that line.
/// A position one past the end of the source resolves to the end of the
/// last line, so end-of-input diagnostics can still be rendered.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // pos == content.len(): point just past the final character.
    match content.split_inclusive('\n').last() {
        Some(line) if !line.ends_with('\n') => Some((line_number - 1, line.to_string(), line.len())),
        _ => Some((line_number, String::new(), 0)),
    }
}

/// Renders a diagnostic with a caret pointing at the offending column.
///
/// ```text
/// Error: UnexpectedToken (expected next token to be IDENT, got = instead)
/// -> main.mk
///   |
/// 1 | let = 5;
///   | ----^
/// ```
pub fn display_error(error: &Error, source: &str, file: &str) -> String {
    let mut out = String::new();
    let position = error.get_position();

    match error.get_tip() {
        ErrorTip::None => {
            let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error);
        }
        tip => {
            let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), tip);
        }
    }
    let _ = writeln!(out, "-> {}", file);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    // columns are characters, not bytes
    let column = line_text
        .get(removed_whitespace.min(line_pos)..line_pos)
        .map_or(0, |prefix| prefix.chars().count());
    let arrows = column + 1;

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");
    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.len() - string.trim_start_matches([' ', '\t']).len();
    (&string[start..], start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::errors::ErrorImpl;

    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nfoo\n\nTesting { }\n";

        let (line_number, line, line_pos) = get_line_at_position(content, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = get_line_at_position(content, 27).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = get_line_at_position("a +\nb +", 7).unwrap();
        assert_eq!(line_number, 2);
        assert_eq!(line, "b +");
        assert_eq!(line_pos, 3);

        assert!(get_line_at_position("abc", 4).is_none());
    }

    #[test]
    fn test_display_error_points_at_token() {
        let source = "let x = 1;\n  let = 5;";
        let (_, errors) = parse(source);
        assert_eq!(errors.len(), 2);

        let rendered = display_error(&errors[0], source, "main.mk");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines[0],
            "Error: UnexpectedToken (expected next token to be IDENT, got = instead)"
        );
        assert_eq!(lines[1], "-> main.mk");
        assert_eq!(lines[3], "2 | let = 5;");
        assert_eq!(lines[4], "  | ----^");
    }

    #[test]
    fn test_display_error_with_tip() {
        let source = "(a + b";
        let (_, errors) = parse(source);
        assert_eq!(errors.len(), 1);

        let rendered = display_error(&errors[0], source, "main.mk");
        assert_eq!(
            rendered.lines().next(),
            Some("Error: UnexpectedToken (expected next token to be ), got EOF instead, did you miss a closing `)`?)")
        );
    }

    #[test]
    fn test_display_error_counts_characters() {
        let source = "é + ;";
        let error = Error::new(
            ErrorImpl::NoPrefixParseFn {
                kind: lexer::tokens::TokenKind::Semicolon,
            },
            Position(5),
        );

        let rendered = display_error(&error, source, "main.mk");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: NoPrefixParseFn (no prefix parse function for ; found)");
        assert_eq!(lines[3], "1 | é + ;");
        assert_eq!(lines[4], "  | ----^");
    }

    #[test]
    fn test_span_offsets_saturate() {
        let span = crate::MK_SPAN!(7usize, u32::MAX as usize + 10);

        assert_eq!(span.start, Position(7));
        assert_eq!(span.end, Position(u32::MAX));
    }
}
