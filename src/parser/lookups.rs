use std::collections::HashMap;

use crate::{
    ast::ast::{Expression, Statement},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Binding strength of an operator, weakest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,      // == !=
    LessGreater, // < >
    Sum,         // + -
    Product,     // * /
    Prefix,      // -x !x
    Call,        // f(x)
}

pub type StmtHandler = fn(&mut Parser) -> Result<Statement, Error>;
pub type PrefixHandler = fn(&mut Parser) -> Result<Expression, Error>;
pub type InfixHandler = fn(&mut Parser, Expression) -> Result<Expression, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Equality
    parser.infix(TokenKind::Eq, Precedence::Equals, parse_infix_expr);
    parser.infix(TokenKind::NotEq, Precedence::Equals, parse_infix_expr);

    // Relational
    parser.infix(TokenKind::LT, Precedence::LessGreater, parse_infix_expr);
    parser.infix(TokenKind::GT, Precedence::LessGreater, parse_infix_expr);

    // Additive and multiplicative
    parser.infix(TokenKind::Plus, Precedence::Sum, parse_infix_expr);
    parser.infix(TokenKind::Minus, Precedence::Sum, parse_infix_expr);
    parser.infix(TokenKind::Asterisk, Precedence::Product, parse_infix_expr);
    parser.infix(TokenKind::Slash, Precedence::Product, parse_infix_expr);

    // Literals, symbols and unary operators
    parser.prefix(TokenKind::Ident, parse_identifier);
    parser.prefix(TokenKind::Int, parse_integer_literal);
    parser.prefix(TokenKind::Bang, parse_prefix_expr);
    parser.prefix(TokenKind::Minus, parse_prefix_expr);

    // Statements
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type PrefixLookup = HashMap<TokenKind, PrefixHandler>;
pub type InfixLookup = HashMap<TokenKind, InfixHandler>;
pub type PrecedenceLookup = HashMap<TokenKind, Precedence>;
