use crate::{
    ast::{
        ast::Expr,
        expressions::{Identifier, InfixExpr, IntegerLiteral, PrefixExpr},
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

/// Pratt loop: parse a prefix expression at `current`, then keep folding
/// infix operators into it while the next operator binds tighter than `bp`.
///
/// Equal binding powers stop the loop, which makes chains such as
/// `a + b + c` left-associative.
///
/// Nesting is bounded by `MAX_EXPR_DEPTH`, which also bounds the height of
/// the tree that comes back.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expr> {
    let depth = parser.depth();
    let expr = parse_bounded_expr(parser, bp);
    parser.restore_depth(depth);
    expr
}

fn parse_bounded_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expr> {
    if !parser.descend() {
        return None;
    }

    let lookups = parser.get_lookups();

    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = lookups.get_nud(token_kind) else {
        let position = parser.current_token().span.start;
        parser.push_error(ErrorImpl::NoPrefixParseFn { kind: token_kind }, position);
        return None;
    };

    let mut left = nud_fn(parser)?;

    while !parser.peek_token_is(TokenKind::Semicolon) && bp < parser.peek_binding_power() {
        let Some(led_fn) = lookups.get_led(parser.peek_token().kind) else {
            return Some(left);
        };

        // each fold adds a level on the left
        if !parser.descend() {
            return None;
        }

        parser.advance();
        left = led_fn(parser, left)?;
    }

    Some(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token();

    Some(Expr::Identifier(Identifier {
        value: token.literal.clone(),
        span: token.span,
    }))
}

pub fn parse_integer_literal(parser: &mut Parser) -> Option<Expr> {
    let token = parser.current_token();

    match token.literal.parse::<i64>() {
        Ok(value) => Some(Expr::Integer(IntegerLiteral {
            value,
            span: token.span,
        })),
        Err(_) => {
            let error = ErrorImpl::NumberParseError {
                token: token.literal.clone(),
            };
            let position = token.span.start;
            parser.push_error(error, position);
            None
        }
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expr> {
    let operator_token = parser.current_token().clone();

    parser.advance();
    let right = parse_expr(parser, BindingPower::Unary)?;

    Some(Expr::Prefix(PrefixExpr {
        span: Span {
            start: operator_token.span.start,
            end: right.get_span().end,
        },
        operator: operator_token.literal,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expr) -> Option<Expr> {
    let operator_token = parser.current_token().clone();
    let bp = parser.current_binding_power();

    parser.advance();
    let right = parse_expr(parser, bp)?;

    Some(Expr::Infix(InfixExpr {
        span: Span {
            start: left.get_span().start,
            end: right.get_span().end,
        },
        left: Box::new(left),
        operator: operator_token.literal,
        right: Box::new(right),
    }))
}

/// `( expr )`: the parentheses only steer precedence and leave no node behind.
pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expr> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default);

    if parser.is_too_deep() || !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    expr
}
