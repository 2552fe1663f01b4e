//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that turns source text
//! into tokens for the parser. It handles:
//!
//! - Lazy, one-token-at-a-time scanning driven by regex patterns
//! - Recognition of identifiers, integer/string/boolean literals and punctuation
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;
