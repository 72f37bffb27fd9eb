//! Lexical analysis module.
//!
//! This module contains the lexer that converts source text into tokens
//! on demand. It handles:
//!
//! - Single and two-character operators (`=` / `==`, `!` / `!=`)
//! - Recognition of keywords, identifiers and integer literals
//! - Token position tracking for error reporting
//! - Whitespace skipping; unknown characters become `Illegal` tokens

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
