//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Operators and delimiters, including two-character operators
//! - Illegal characters and end-of-input behaviour

use super::{
    lexer::{tokenize, Lexer},
    tokens::{lookup_ident, TokenKind},
};

fn kinds_and_literals(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source)
        .into_iter()
        .map(|token| (token.kind, token.literal))
        .collect()
}

#[test]
fn test_tokenize_delimiters() {
    let tokens = kinds_and_literals("=+(){},;");
    let expected = [
        (TokenKind::Assign, "="),
        (TokenKind::Plus, "+"),
        (TokenKind::LParen, "("),
        (TokenKind::RParen, ")"),
        (TokenKind::LBrace, "{"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Comma, ","),
        (TokenKind::Semicolon, ";"),
        (TokenKind::EOF, ""),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (token, (kind, literal)) in tokens.iter().zip(expected.iter()) {
        assert_eq!(token.0, *kind);
        assert_eq!(token.1, *literal);
    }
}

#[test]
fn test_tokenize_operators() {
    let tokens = kinds_and_literals("! - / * < > == !=");

    assert_eq!(tokens[0], (TokenKind::Bang, "!".to_string()));
    assert_eq!(tokens[1], (TokenKind::Minus, "-".to_string()));
    assert_eq!(tokens[2], (TokenKind::Slash, "/".to_string()));
    assert_eq!(tokens[3], (TokenKind::Asterisk, "*".to_string()));
    assert_eq!(tokens[4], (TokenKind::LT, "<".to_string()));
    assert_eq!(tokens[5], (TokenKind::GT, ">".to_string()));
    assert_eq!(tokens[6], (TokenKind::Eq, "==".to_string()));
    assert_eq!(tokens[7], (TokenKind::NotEq, "!=".to_string()));
    assert_eq!(tokens[8].0, TokenKind::EOF);
}

#[test]
fn test_two_character_operators_are_atomic() {
    let tokens = kinds_and_literals("a==b!=c");

    assert_eq!(tokens.len(), 6);
    assert_eq!(tokens[1], (TokenKind::Eq, "==".to_string()));
    assert_eq!(tokens[3], (TokenKind::NotEq, "!=".to_string()));
}

#[test]
fn test_assign_followed_by_bang() {
    let tokens = kinds_and_literals("=!");

    assert_eq!(tokens[0].0, TokenKind::Assign);
    assert_eq!(tokens[1].0, TokenKind::Bang);
    assert_eq!(tokens[2].0, TokenKind::EOF);
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("fn let true false if else return");

    assert_eq!(tokens[0].kind, TokenKind::Function);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::True);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::If);
    assert_eq!(tokens[5].kind, TokenKind::Else);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
    assert_eq!(tokens[6].literal, "return");
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo _bar CamelCase lets iff");

    for (token, name) in tokens.iter().zip(["foo", "_bar", "CamelCase", "lets", "iff"]) {
        assert_eq!(token.kind, TokenKind::Ident);
        assert_eq!(token.literal, name);
    }
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_identifier_stops_at_digit() {
    let tokens = kinds_and_literals("x1");

    assert_eq!(tokens[0], (TokenKind::Ident, "x".to_string()));
    assert_eq!(tokens[1], (TokenKind::Int, "1".to_string()));
}

#[test]
fn test_tokenize_integers() {
    let tokens = kinds_and_literals("1000000007 0 42");

    assert_eq!(tokens[0], (TokenKind::Int, "1000000007".to_string()));
    assert_eq!(tokens[1], (TokenKind::Int, "0".to_string()));
    assert_eq!(tokens[2], (TokenKind::Int, "42".to_string()));
    assert_eq!(tokens[3].0, TokenKind::EOF);
}

#[test]
fn test_tokenize_program() {
    let source = "let five = 5;
let ten = 10;

let add = fn(x, y){
  x + y;
};

let result = add(five, ten);
";
    let tokens = kinds_and_literals(source);
    let expected = [
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "five"),
        (TokenKind::Assign, "="),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "ten"),
        (TokenKind::Assign, "="),
        (TokenKind::Int, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "add"),
        (TokenKind::Assign, "="),
        (TokenKind::Function, "fn"),
        (TokenKind::LParen, "("),
        (TokenKind::Ident, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Ident, "y"),
        (TokenKind::RParen, ")"),
        (TokenKind::LBrace, "{"),
        (TokenKind::Ident, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Ident, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "result"),
        (TokenKind::Assign, "="),
        (TokenKind::Ident, "add"),
        (TokenKind::LParen, "("),
        (TokenKind::Ident, "five"),
        (TokenKind::Comma, ","),
        (TokenKind::Ident, "ten"),
        (TokenKind::RParen, ")"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::EOF, ""),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (token, (kind, literal)) in tokens.iter().zip(expected.iter()) {
        assert_eq!(token.0, *kind, "literal {:?}", token.1);
        assert_eq!(token.1, *literal);
    }
}

#[test]
fn test_illegal_characters() {
    let tokens = kinds_and_literals("@ 5 é");

    assert_eq!(tokens[0], (TokenKind::Illegal, "@".to_string()));
    assert_eq!(tokens[1], (TokenKind::Int, "5".to_string()));
    assert_eq!(tokens[2], (TokenKind::Illegal, "é".to_string()));
    assert_eq!(tokens[3].0, TokenKind::EOF);
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.literal, "");
    }
}

#[test]
fn test_empty_and_whitespace_source() {
    assert_eq!(kinds_and_literals(""), vec![(TokenKind::EOF, String::new())]);
    assert_eq!(
        kinds_and_literals(" \t\r\n  "),
        vec![(TokenKind::EOF, String::new())]
    );
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let x == 10;");

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[2].span.start.0, 6);
    assert_eq!(tokens[2].span.end.0, 8);
    assert_eq!(tokens[3].span.start.0, 9);
    assert_eq!(tokens[3].span.end.0, 11);
    assert_eq!(*tokens[0].span.start.1, "shell");
}

#[test]
fn test_lexer_with_file_name() {
    let mut lexer = Lexer::with_file("5", "main.mk");
    let token = lexer.next_token();

    assert_eq!(*token.span.start.1, "main.mk");
}

#[test]
fn test_lexer_iterator_stops_before_eof() {
    let kinds: Vec<TokenKind> = Lexer::new("let x = 5;").map(|token| token.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Ident,
            TokenKind::Assign,
            TokenKind::Int,
            TokenKind::Semicolon
        ]
    );
}

#[test]
fn test_lookup_ident() {
    assert_eq!(lookup_ident("fn"), TokenKind::Function);
    assert_eq!(lookup_ident("return"), TokenKind::Return);
    assert_eq!(lookup_ident("returns"), TokenKind::Ident);
}

#[test]
fn test_token_kind_display() {
    assert_eq!(TokenKind::NotEq.to_string(), "NOT_EQ");
    assert_eq!(TokenKind::Ident.to_string(), "IDENT");
    assert_eq!(TokenKind::EOF.to_string(), "EOF");
}
