use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span};

use super::tokens::{lookup_ident, Token, TokenKind};

lazy_static! {
    static ref IDENTIFIER_PATTERN: Regex = Regex::new("^[a-zA-Z_]+").unwrap();
    static ref INTEGER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
}

/// Pull-based lexer. Each call to [`Lexer::next_token`] reads exactly one
/// token; once the input is exhausted every further call yields `EOF`.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    /// Byte offset of `ch`
    position: usize,
    /// Byte offset of the character after `ch`
    read_position: usize,
    ch: Option<char>,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer::with_file(source, "shell")
    }

    pub fn with_file(source: &str, file: &str) -> Lexer {
        let mut lexer = Lexer {
            source: source.to_string(),
            position: 0,
            read_position: 0,
            ch: None,
            file: Rc::new(file.to_string()),
        };
        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        self.position = self.read_position;
        self.ch = self.source[self.read_position..].chars().next();
        if let Some(ch) = self.ch {
            self.read_position += ch.len_utf8();
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.source[self.read_position..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(' ' | '\t' | '\n' | '\r')) {
            self.read_char();
        }
    }

    /// Consumes the maximal run matched by `pattern` at the cursor.
    fn read_run(&mut self, pattern: &Regex) -> String {
        let start = self.position;
        let len = pattern
            .find(&self.source[start..])
            .map(|m| m.end())
            .unwrap_or(0);

        while self.ch.is_some() && self.position < start + len {
            self.read_char();
        }

        self.source[start..self.position].to_string()
    }

    fn token(&self, kind: TokenKind, literal: String, start: usize) -> Token {
        Token {
            kind,
            literal,
            span: Span {
                start: Position(start as u32, Rc::clone(&self.file)),
                end: Position(self.position as u32, Rc::clone(&self.file)),
            },
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let Some(ch) = self.ch else {
            return self.token(TokenKind::EOF, String::new(), start);
        };

        let kind = match ch {
            '=' if self.peek_char() == Some('=') => {
                self.read_char();
                TokenKind::Eq
            }
            '=' => TokenKind::Assign,
            '!' if self.peek_char() == Some('=') => {
                self.read_char();
                TokenKind::NotEq
            }
            '!' => TokenKind::Bang,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Asterisk,
            '/' => TokenKind::Slash,
            '>' => TokenKind::GT,
            '<' => TokenKind::LT,
            ';' => TokenKind::Semicolon,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            c if c.is_ascii_alphabetic() || c == '_' => {
                let literal = self.read_run(&IDENTIFIER_PATTERN);
                return self.token(lookup_ident(&literal), literal, start);
            }
            c if c.is_ascii_digit() => {
                let literal = self.read_run(&INTEGER_PATTERN);
                return self.token(TokenKind::Int, literal, start);
            }
            _ => TokenKind::Illegal,
        };

        self.read_char();
        let literal = self.source[start..self.position].to_string();
        self.token(kind, literal, start)
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is(TokenKind::EOF) {
            None
        } else {
            Some(token)
        }
    }
}

/// Lexes the whole source, including the trailing `EOF` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.is(TokenKind::EOF);
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
