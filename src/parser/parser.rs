//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program-level entry
//! points. The parser pulls tokens from a [`Lexer`] on demand and always
//! holds the current token plus one token of lookahead.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - Prefix handlers, for tokens that can start an expression
//! - Infix handlers, for operators that continue one
//! - Operator precedences

use std::collections::HashMap;

use crate::{
    ast::statements::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, InfixHandler, InfixLookup, Precedence, PrecedenceLookup,
        PrefixHandler, PrefixLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Token source, drawn from one token at a time
    lexer: Lexer,
    cur_token: Token,
    peek_token: Token,
    /// Errors collected by `parse_program`, in source order
    errors: Vec<Error>,
    stmt_lookup: StmtLookup,
    prefix_lookup: PrefixLookup,
    infix_lookup: InfixLookup,
    precedence_lookup: PrecedenceLookup,
}

impl Parser {
    /// Creates a new Parser, drawing the first two tokens from `lexer`.
    pub fn new(mut lexer: Lexer) -> Self {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();

        let mut parser = Parser {
            lexer,
            cur_token,
            peek_token,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            prefix_lookup: HashMap::new(),
            infix_lookup: HashMap::new(),
            precedence_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.cur_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.cur_token.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    /// Shifts the lookahead into the current token and draws a new lookahead.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.cur_token = std::mem::replace(&mut self.peek_token, next);
    }

    pub fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Advances if the lookahead is of the expected kind, otherwise fails
    /// without consuming anything.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<(), Error> {
        if self.peek_token_is(expected_kind) {
            self.advance();
            Ok(())
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: self.peek_token.kind,
                },
                self.peek_token.span.start.clone(),
            ))
        }
    }

    pub fn peek_precedence(&self) -> Precedence {
        self.precedence_of(self.peek_token.kind)
    }

    pub fn cur_precedence(&self) -> Precedence {
        self.precedence_of(self.cur_token.kind)
    }

    fn precedence_of(&self, kind: TokenKind) -> Precedence {
        self.precedence_lookup
            .get(&kind)
            .copied()
            .unwrap_or(Precedence::Lowest)
    }

    /// Moves the cursor onto the next `;`, or `EOF` if there is none.
    pub fn skip_to_semicolon(&mut self) {
        while !self.cur_token_is(TokenKind::Semicolon) && !self.cur_token_is(TokenKind::EOF) {
            self.advance();
        }
    }

    /// Errors collected by the last `parse_program` call.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the prefix handler lookup table.
    pub fn get_prefix_lookup(&self) -> &PrefixLookup {
        &self.prefix_lookup
    }

    /// Returns a reference to the infix handler lookup table.
    pub fn get_infix_lookup(&self) -> &InfixLookup {
        &self.infix_lookup
    }

    /// Registers an infix handler for an operator together with its precedence.
    pub fn infix(&mut self, kind: TokenKind, precedence: Precedence, infix_fn: InfixHandler) {
        self.precedence_lookup.insert(kind, precedence);
        self.infix_lookup.insert(kind, infix_fn);
    }

    /// Registers a prefix handler for a token.
    pub fn prefix(&mut self, kind: TokenKind, prefix_fn: PrefixHandler) {
        self.prefix_lookup.insert(kind, prefix_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Parses statements until `EOF`.
    ///
    /// A statement that fails is left out of the program; its error is
    /// recorded in [`Parser::errors`] and parsing resumes after the next `;`.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.cur_token_is(TokenKind::EOF) {
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    self.errors.push(error);
                    self.skip_to_semicolon();
                }
            }

            self.advance();
        }

        program
    }
}

/// Parses a source string into a Program.
///
/// This is the main entry point for parsing. Returns every error found if
/// any statement failed to parse.
pub fn parse(source: &str) -> Result<Program, Vec<Error>> {
    parse_lexer(Lexer::new(source))
}

/// Like [`parse`], with a source name attached to every position.
pub fn parse_file(source: &str, file: &str) -> Result<Program, Vec<Error>> {
    parse_lexer(Lexer::with_file(source, file))
}

fn parse_lexer(lexer: Lexer) -> Result<Program, Vec<Error>> {
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    if parser.errors.is_empty() {
        Ok(program)
    } else {
        Err(parser.errors)
    }
}
