use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::ast::{Expr, Stmt},
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, lowest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Unary,
    Call,
}

pub type StmtHandler = fn(&mut Parser<'_>) -> Option<Stmt>;
pub type NUDHandler = fn(&mut Parser<'_>) -> Option<Expr>;
pub type LEDHandler = fn(&mut Parser<'_>, Expr) -> Option<Expr>;

pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;

/// Handler and precedence tables, keyed by token kind.
///
/// Built once by `create_token_lookups` and shared read-only by every parser.
#[derive(Default)]
pub struct TokenLookups {
    stmt_lookup: StmtLookup,
    nud_lookup: NUDLookup,
    led_lookup: LEDLookup,
    binding_power_lookup: BPLookup,
}

impl TokenLookups {
    /// Registers a left denotation (infix) handler and its binding power.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler.
    ///
    /// Unlike `led`, this leaves the binding power table alone: `-` is both a
    /// prefix and an infix operator and must keep its additive precedence.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a leading token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn get_stmt(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    pub fn get_nud(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    pub fn get_led(&self, kind: TokenKind) -> Option<LEDHandler> {
        self.led_lookup.get(&kind).copied()
    }

    /// Kinds without an entry bind at `Default`, which ends any expression.
    pub fn get_binding_power(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }
}

pub fn create_token_lookups() -> TokenLookups {
    let mut lookups = TokenLookups::default();

    // Equality and relational
    lookups.led(TokenKind::Equals, BindingPower::Equality, parse_infix_expr);
    lookups.led(TokenKind::NotEquals, BindingPower::Equality, parse_infix_expr);
    lookups.led(TokenKind::Less, BindingPower::Relational, parse_infix_expr);
    lookups.led(TokenKind::Greater, BindingPower::Relational, parse_infix_expr);

    // Additive and multiplicative
    lookups.led(TokenKind::Plus, BindingPower::Additive, parse_infix_expr);
    lookups.led(TokenKind::Dash, BindingPower::Additive, parse_infix_expr);
    lookups.led(TokenKind::Star, BindingPower::Multiplicative, parse_infix_expr);
    lookups.led(TokenKind::Slash, BindingPower::Multiplicative, parse_infix_expr);

    // Literals and symbols
    lookups.nud(TokenKind::Identifier, parse_identifier);
    lookups.nud(TokenKind::Int, parse_integer_literal);
    lookups.nud(TokenKind::Not, parse_prefix_expr);
    lookups.nud(TokenKind::Dash, parse_prefix_expr);
    lookups.nud(TokenKind::OpenParen, parse_grouping_expr);

    // Statements
    lookups.stmt(TokenKind::Let, parse_let_stmt);
    lookups.stmt(TokenKind::Return, parse_return_stmt);

    lookups
}

lazy_static! {
    pub static ref TOKEN_LOOKUPS: TokenLookups = create_token_lookups();
}
