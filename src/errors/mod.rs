//! Error types and error handling for the front end.
//!
//! This module defines the error type shared by the lexer and parser:
//!
//! - Error structures with source position information
//! - Specific error variants for lexing and parsing failures
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
