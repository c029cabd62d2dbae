//! Unit tests for the lexer module.
//!
//! Covers single and two-character operators, keywords and identifiers,
//! integer literals, illegal characters, spans and end-of-input handling.

use crate::{Position, Span};

use super::{
    lexer::{tokenize, Lexer},
    tokens::{lookup_identifier, TokenKind},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_single_character_operators() {
    let cases = [
        (";", TokenKind::Semicolon),
        ("(", TokenKind::OpenParen),
        (")", TokenKind::CloseParen),
        (",", TokenKind::Comma),
        ("+", TokenKind::Plus),
        ("{", TokenKind::OpenCurly),
        ("}", TokenKind::CloseCurly),
        ("-", TokenKind::Dash),
        ("!", TokenKind::Not),
        ("/", TokenKind::Slash),
        ("*", TokenKind::Star),
        ("<", TokenKind::Less),
        (">", TokenKind::Greater),
        ("=", TokenKind::Assignment),
    ];

    for (source, kind) in cases {
        let tokens = tokenize(source);
        assert_eq!(tokens.len(), 2, "input {:?}", source);
        assert_eq!(tokens[0].kind, kind, "input {:?}", source);
        assert_eq!(tokens[0].literal, source);
        assert_eq!(tokens[1].kind, TokenKind::EOF);
    }
}

#[test]
fn test_tokenize_two_character_operators() {
    let tokens = tokenize("==");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Equals);
    assert_eq!(tokens[0].literal, "==");

    let tokens = tokenize("!=");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::NotEquals);
    assert_eq!(tokens[0].literal, "!=");
}

#[test]
fn test_tokenize_operator_disambiguation() {
    assert_eq!(
        kinds("= = ! !! !== ==="),
        vec![
            TokenKind::Assignment,
            TokenKind::Assignment,
            TokenKind::Not,
            TokenKind::Not,
            TokenKind::Not,
            TokenKind::NotEquals,
            TokenKind::Assignment,
            TokenKind::Equals,
            TokenKind::Assignment,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("fn let true false if else return"),
        vec![
            TokenKind::Fn,
            TokenKind::Let,
            TokenKind::True,
            TokenKind::False,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::Return,
            TokenKind::EOF,
        ]
    );

    let tokens = tokenize("let");
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[0].literal, "let");
}

#[test]
fn test_lookup_identifier() {
    assert_eq!(lookup_identifier("return"), TokenKind::Return);
    assert_eq!(lookup_identifier("lets"), TokenKind::Identifier);
    assert_eq!(lookup_identifier("Let"), TokenKind::Identifier);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foobar _under CamelCase x");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].literal, "foobar");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].literal, "_under");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].literal, "CamelCase");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].literal, "x");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_identifiers_stop_at_digits() {
    let tokens = tokenize("foo1");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].literal, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Int);
    assert_eq!(tokens[1].literal, "1");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("12345 0 007");

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].literal, "12345");
    assert_eq!(tokens[1].kind, TokenKind::Int);
    assert_eq!(tokens[1].literal, "0");
    assert_eq!(tokens[2].kind, TokenKind::Int);
    assert_eq!(tokens[2].literal, "007");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_numbers_have_no_fraction_or_sign() {
    assert_eq!(
        kinds("-3.14"),
        vec![
            TokenKind::Dash,
            TokenKind::Int,
            TokenKind::Illegal,
            TokenKind::Int,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_simple_program() {
    let source = "let five = 5;\nlet ten = 10;\n\nlet result = five + ten;\n!-/*5;\n5 < 10 > 5;\n10 == 10;\n10 != 9;";
    let expected = [
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "five"),
        (TokenKind::Assignment, "="),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "ten"),
        (TokenKind::Assignment, "="),
        (TokenKind::Int, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "result"),
        (TokenKind::Assignment, "="),
        (TokenKind::Identifier, "five"),
        (TokenKind::Plus, "+"),
        (TokenKind::Identifier, "ten"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Not, "!"),
        (TokenKind::Dash, "-"),
        (TokenKind::Slash, "/"),
        (TokenKind::Star, "*"),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Int, "5"),
        (TokenKind::Less, "<"),
        (TokenKind::Int, "10"),
        (TokenKind::Greater, ">"),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Int, "10"),
        (TokenKind::Equals, "=="),
        (TokenKind::Int, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Int, "10"),
        (TokenKind::NotEquals, "!="),
        (TokenKind::Int, "9"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::EOF, ""),
    ];

    let tokens = tokenize(source);
    assert_eq!(tokens.len(), expected.len());

    for (token, (kind, literal)) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind);
        assert_eq!(token.literal, literal);
    }
}

#[test]
fn test_tokenize_function_shaped_input() {
    assert_eq!(
        kinds("fn(x, y) { x + y; }"),
        vec![
            TokenKind::Fn,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_illegal_characters() {
    let tokens = tokenize("a @ b # \0");

    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].literal, "@");
    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].literal, "#");
    assert_eq!(tokens[4].kind, TokenKind::Illegal);
    assert_eq!(tokens[4].literal, "\0");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_non_ascii_character() {
    let tokens = tokenize("a é b");

    assert_eq!(tokens[0].literal, "a");
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].literal, "é");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].literal, "b");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_empty_and_whitespace() {
    for source in ["", "   ", " \t\r\n "] {
        let tokens = tokenize(source);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::EOF);
        assert_eq!(tokens[0].literal, "");
    }
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.literal, "");
    }
    assert!(lexer.at_eof());
}

#[test]
fn test_runs_end_cleanly_at_eof() {
    let tokens = tokenize("abc");
    assert_eq!(tokens[0].literal, "abc");
    assert_eq!(tokens[1].kind, TokenKind::EOF);

    let tokens = tokenize("42");
    assert_eq!(tokens[0].literal, "42");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let x == 10;");

    let spans: Vec<(u32, u32)> = tokens
        .iter()
        .map(|token| (token.span.start.0, token.span.end.0))
        .collect();
    assert_eq!(spans, vec![(0, 3), (4, 5), (6, 8), (9, 11), (11, 12), (12, 12)]);

    assert_eq!(
        tokens[2].span,
        Span {
            start: Position(6),
            end: Position(8)
        }
    );
}

#[test]
fn test_iterator_stops_before_eof() {
    let literals: Vec<String> = Lexer::new("a + 1").map(|token| token.literal).collect();
    assert_eq!(literals, vec!["a", "+", "1"]);
}

#[test]
fn test_tokenizing_terminates_within_input_length() {
    let source = "let @@ = ==!= 12ab;\n\t( ) ~ é";
    let mut lexer = Lexer::new(source);
    let mut calls = 0;

    while lexer.next_token().kind != TokenKind::EOF {
        calls += 1;
        assert!(calls <= source.len());
    }
}

#[test]
fn test_token_display() {
    let tokens = tokenize("let x");
    assert_eq!(tokens[0].to_string(), "{Type:LET Literal:let}");
    assert_eq!(tokens[1].to_string(), "{Type:IDENT Literal:x}");
    assert_eq!(tokens[2].to_string(), "{Type:EOF Literal:}");
}
