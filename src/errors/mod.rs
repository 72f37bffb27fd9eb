//! Error types and error handling for the parser.
//!
//! This module defines the errors a parse can produce. It includes:
//!
//! - Error structures with source position information
//! - A classification into token-type, operator and literal failures
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;
