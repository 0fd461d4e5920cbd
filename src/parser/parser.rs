//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the [`Parser`] token cursor and the [`parse`] entry
//! point. The cursor only ever moves forward: grammar routines look at the
//! current token, decide on a production and consume tokens as they go.

use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::statements::BlockStmt,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::stmt::parse_stmt_list;

/// The read head over the token stream.
///
/// The stream always ends with an `EOF` token, and advancing past it keeps
/// returning it, so look-ahead never runs out.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
}

impl Parser {
    /// Creates a new Parser instance, appending an `EOF` token if the stream
    /// lacks one.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = match tokens.last() {
                Some(token) => token.span.end.clone(),
                None => Position::new(1, 0, &file),
            };
            tokens.push(MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                Span {
                    start: end.clone(),
                    end
                }
            ));
        }

        Parser {
            tokens,
            pos: 0,
            file,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> &Token {
        let current = self.pos.min(self.tokens.len() - 1);
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        &self.tokens[current]
    }

    /// Builds the error for an unexpected current token. At end of input the
    /// error says what was still expected instead.
    pub fn unexpected(&self, message: &str) -> Error {
        let token = self.current_token();
        let cause = if token.kind == TokenKind::EOF {
            ErrorImpl::UnexpectedEndOfInput {
                expected: message.to_string(),
            }
        } else {
            ErrorImpl::UnexpectedTokenDetailed {
                token: token.value.clone(),
                message: message.to_string(),
            }
        };

        Error::new(cause, self.get_position())
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// Returns the token and advances past it if it matches.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None if token.kind == TokenKind::EOF => Err(Error::new(
                    ErrorImpl::UnexpectedEndOfInput {
                        expected: format!("expected {}", expected_kind),
                    },
                    token.span.start.clone(),
                )),
                None => Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: token.value.clone(),
                    },
                    token.span.start.clone(),
                )),
            }
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    pub fn get_file(&self) -> &Rc<String> {
        &self.file
    }
}

/// Parses a stream of tokens into the program's statement list.
///
/// Fails on the first token that does not fit the grammar; no partial tree is
/// returned.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<BlockStmt, Error> {
    let mut parser = Parser::new(tokens, file);
    debug!(file = %parser.get_file(), "parsing");

    let program = parse_stmt_list(&mut parser)?;

    // A statement list only stops early on a block end with no block open
    if parser.has_tokens() {
        return Err(parser.unexpected("block end without an open block"));
    }

    Ok(program)
}
