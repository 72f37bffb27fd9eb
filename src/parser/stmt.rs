use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{ExpressionStatement, LetStatement, ReturnStatement},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::Precedence},
};

use super::parser::Parser;

/// Parses one statement. On success the current token is the statement's
/// last token (its `;` when present).
pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    if let Some(&handler) = parser.get_stmt_lookup().get(&parser.current_token_kind()) {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::Ident)?;
    let name = Identifier::new(parser.current_token().clone());

    parser.expect_peek(TokenKind::Assign)?;

    // TODO: parse the initializer with parse_expr instead of skipping it
    parser.skip_to_semicolon();

    Ok(LetStatement {
        token,
        name,
        value: None,
    }
    .into())
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    parser.advance();
    parser.skip_to_semicolon();

    Ok(ReturnStatement {
        token,
        return_value: None,
    }
    .into())
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, Precedence::Lowest)?;

    // Optional, so `a + b` at end of input is still a statement
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(ExpressionStatement { token, expression }.into())
}
