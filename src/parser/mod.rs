//! Parser module for building the syntax tree.
//!
//! A recursive-descent parser that pulls tokens from the lexer on demand:
//!
//! - Statement parsing (`;`-separated sequences, `var` definitions, calls)
//! - Expression parsing with two precedence levels (`+ -` below `* /`)
//! - Structured errors instead of aborting; no error recovery

pub mod expr;
pub mod parser;
pub mod stmt;
