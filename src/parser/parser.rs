//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and parsing entry points.
//! The parser keeps a two-token window (`current` and `peek`) over the
//! lexer and consults the shared lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use log::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{BindingPower, TokenLookups, TOKEN_LOOKUPS},
    stmt::parse_stmt,
};

/// Deepest expression nesting the parser will follow. Each prefix operand,
/// parenthesised group and folded infix operator counts as one level.
pub const MAX_EXPR_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// Owns its lexer and pulls tokens from it on demand. Diagnostics are
/// collected rather than returned, so a parse always runs to the end of the
/// input.
pub struct Parser<'a> {
    /// The token source
    lexer: Lexer<'a>,
    /// The token under examination
    current: Token,
    /// The token after `current`
    peek: Token,
    /// Diagnostics in the order they were found
    errors: Vec<Error>,
    /// Statement, NUD, LED and binding power tables
    lookups: &'static TokenLookups,
    /// Current expression nesting level
    depth: usize,
    /// Set once the nesting limit is hit; cleared at the next statement
    too_deep: bool,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser, reading two tokens so that both `current` and
    /// `peek` are set.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Parser {
            lexer,
            current,
            peek,
            errors: vec![],
            lookups: &TOKEN_LOOKUPS,
            depth: 0,
            too_deep: false,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Shifts `peek` into `current` and pulls a fresh `peek` from the lexer.
    pub fn advance(&mut self) {
        self.current = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    /// Advances if the next token is of `expected_kind`; otherwise records an
    /// unexpected-token diagnostic and leaves the window untouched.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> bool {
        if self.peek_token_is(expected_kind) {
            self.advance();
            return true;
        }

        self.push_error(
            ErrorImpl::UnexpectedToken {
                expected: expected_kind,
                received: self.peek.kind,
            },
            self.peek.span.start,
        );
        false
    }

    /// Records a diagnostic and carries on.
    pub fn push_error(&mut self, error_impl: ErrorImpl, position: Position) {
        debug!("parse error at byte {}: {}", position.0, error_impl);
        self.errors.push(Error::new(error_impl, position));
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn restore_depth(&mut self, depth: usize) {
        self.depth = depth;
    }

    pub fn is_too_deep(&self) -> bool {
        self.too_deep
    }

    /// Enters one more level of expression nesting.
    ///
    /// Past `MAX_EXPR_DEPTH` this records a single diagnostic, skips to the
    /// end of the statement and returns false, so callers unwind without
    /// building anything further.
    pub fn descend(&mut self) -> bool {
        if self.too_deep {
            return false;
        }

        if self.depth >= MAX_EXPR_DEPTH {
            self.push_error(
                ErrorImpl::ExpressionTooDeep {
                    limit: MAX_EXPR_DEPTH,
                },
                self.current.span.start,
            );
            self.too_deep = true;

            while !self.peek.is_one_of_many(&[TokenKind::Semicolon, TokenKind::EOF]) {
                self.advance();
            }
            return false;
        }

        self.depth += 1;
        true
    }

    /// Returns the shared lookup tables.
    pub fn get_lookups(&self) -> &'static TokenLookups {
        self.lookups
    }

    pub fn current_binding_power(&self) -> BindingPower {
        self.lookups.get_binding_power(self.current.kind)
    }

    pub fn peek_binding_power(&self) -> BindingPower {
        self.lookups.get_binding_power(self.peek.kind)
    }

    /// Parses statements until the end of the input.
    ///
    /// Statements that fail structurally contribute nothing; their
    /// diagnostics are available from `errors` afterwards.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_token_is(TokenKind::EOF) {
            self.depth = 0;
            self.too_deep = false;

            if let Some(stmt) = parse_stmt(self) {
                program.statements.push(stmt);
            }
            self.advance();
        }

        debug!(
            "parsed {} statements with {} errors",
            program.len(),
            self.errors.len()
        );
        program
    }

    /// The messages of every diagnostic recorded so far, in order.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// The diagnostics recorded so far, with their positions.
    pub fn get_errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

/// Parses `source` into a Program.
///
/// The program is returned even when diagnostics were recorded; only an
/// empty error list means the tree is complete.
pub fn parse(source: &str) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (program, parser.into_errors())
}
