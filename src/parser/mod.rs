//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into a [`Program`](crate::ast::statements::Program). It uses a Pratt
//! parser for expressions with operator precedence and handles:
//!
//! - Statement parsing (`let`, `return` and expression statements)
//! - Expression parsing (identifiers, integers, prefix and infix operators)
//! - Error collection and resynchronisation at `;`
//!
//! Expressions are parsed with prefix handlers for tokens that start an
//! expression and infix handlers for operators that extend one, ordered by
//! a precedence table.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
