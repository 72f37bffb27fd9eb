use crate::{
    ast::{
        ast::Expression,
        expressions::{Identifier, InfixExpression, IntegerLiteral, PrefixExpression},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::Precedence, parser::Parser};

/// Pratt loop. Starts on the expression's first token and leaves the cursor
/// on its last one.
pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Result<Expression, Error> {
    let token = parser.current_token();
    let Some(&prefix) = parser.get_prefix_lookup().get(&token.kind) else {
        return Err(Error::new(
            ErrorImpl::NoPrefixParseFn {
                kind: token.kind,
                token: token.literal.clone(),
            },
            token.span.start.clone(),
        ));
    };

    let mut left = prefix(parser)?;

    // Fold while the next operator binds tighter than the caller's floor
    while !parser.peek_token_is(TokenKind::Semicolon) && precedence < parser.peek_precedence() {
        let Some(&infix) = parser.get_infix_lookup().get(&parser.peek_token().kind) else {
            return Ok(left);
        };

        parser.advance();
        left = infix(parser, left)?;
    }

    Ok(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Result<Expression, Error> {
    Ok(Identifier::new(parser.current_token().clone()).into())
}

pub fn parse_integer_literal(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    match token.literal.parse::<u64>() {
        Ok(value) => Ok(IntegerLiteral { token, value }.into()),
        Err(_) => Err(Error::new(
            ErrorImpl::IntegerParseError {
                token: token.literal.clone(),
            },
            token.span.start.clone(),
        )),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, Precedence::Prefix)?;

    Ok(PrefixExpression {
        operator: token.literal.clone(),
        token,
        right: Box::new(right),
    }
    .into())
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expression) -> Result<Expression, Error> {
    let token = parser.current_token().clone();
    let precedence = parser.cur_precedence();
    parser.advance();

    // Same precedence as the operator itself, so `a - b - c` folds left
    let right = parse_expr(parser, precedence)?;

    Ok(InfixExpression {
        operator: token.literal.clone(),
        token,
        left: Box::new(left),
        right: Box::new(right),
    }
    .into())
}
