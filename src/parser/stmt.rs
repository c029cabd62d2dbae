use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{ExpressionStmt, LetStmt, ReturnStmt},
    },
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::Parser;

/// Dispatches on the leading token; anything without a statement handler is
/// parsed as an expression statement.
pub fn parse_stmt(parser: &mut Parser) -> Option<Stmt> {
    if let Some(stmt_fn) = parser.get_lookups().get_stmt(parser.current_token_kind()) {
        return stmt_fn(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Stmt> {
    let start = parser.current_token().span.start;

    let expression = parse_expr(parser, BindingPower::Default);
    skip_semicolon(parser);

    Some(Stmt::Expression(ExpressionStmt {
        expression,
        span: Span {
            start,
            end: parser.current_token().span.end,
        },
    }))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<Stmt> {
    let start = parser.current_token().span.start;

    if !parser.expect_peek(TokenKind::Identifier) {
        return None;
    }

    let name = Identifier {
        value: parser.current_token().literal.clone(),
        span: parser.current_token().span,
    };

    if !parser.expect_peek(TokenKind::Assignment) {
        return None;
    }

    parser.advance();
    let value = parse_expr(parser, BindingPower::Default);
    skip_semicolon(parser);

    Some(Stmt::Let(LetStmt {
        name,
        value,
        span: Span {
            start,
            end: parser.current_token().span.end,
        },
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<Stmt> {
    let start = parser.current_token().span.start;

    parser.advance();

    // A bare `return;` has no value to parse.
    let return_value = if parser
        .current_token()
        .is_one_of_many(&[TokenKind::Semicolon, TokenKind::EOF])
    {
        None
    } else {
        let value = parse_expr(parser, BindingPower::Default);
        skip_semicolon(parser);
        value
    };

    Some(Stmt::Return(ReturnStmt {
        return_value,
        span: Span {
            start,
            end: parser.current_token().span.end,
        },
    }))
}

fn skip_semicolon(parser: &mut Parser) {
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }
}
