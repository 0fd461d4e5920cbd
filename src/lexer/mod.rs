//! Lexical analysis for Gee source.
//!
//! Two passes turn raw text into tokens:
//!
//! - [`indent`] rewrites significant indentation into explicit block markers
//!   and statement terminators, dropping comments and blank lines
//! - [`lexer`] splits the normalized lines into tokens with ordered regex
//!   patterns, keeping source positions for error reporting

pub mod indent;
pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
