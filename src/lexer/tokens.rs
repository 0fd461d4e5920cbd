use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,

    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    Comma,
    Colon,
    Semicolon,  // ;
    BlockStart, // @
    BlockEnd,   // ~
    Dollar,

    Assignment, // =
    Equals,     // ==
    NotEquals,  // !=
    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Plus,
    Dash,
    Star,
    Slash,

    // Reserved
    If,
    Else,
    While,
    And,
    Or,
}

/// Coarse lexical class of a token.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenClass {
    Number,
    String,
    Identifier,
    Operator,
    Punctuation,
    BlockStart,
    BlockEnd,
    StatementEnd,
    EndOfInput,
}

impl TokenKind {
    pub fn class(&self) -> TokenClass {
        match self {
            TokenKind::EOF => TokenClass::EndOfInput,
            TokenKind::Number => TokenClass::Number,
            TokenKind::String => TokenClass::String,
            TokenKind::Identifier
            | TokenKind::If
            | TokenKind::Else
            | TokenKind::While
            | TokenKind::And
            | TokenKind::Or => TokenClass::Identifier,
            TokenKind::Semicolon => TokenClass::StatementEnd,
            TokenKind::BlockStart => TokenClass::BlockStart,
            TokenKind::BlockEnd => TokenClass::BlockEnd,
            TokenKind::OpenParen
            | TokenKind::CloseParen
            | TokenKind::OpenBracket
            | TokenKind::CloseBracket
            | TokenKind::Comma
            | TokenKind::Colon
            | TokenKind::Dollar => TokenClass::Punctuation,
            TokenKind::Assignment
            | TokenKind::Equals
            | TokenKind::NotEquals
            | TokenKind::Less
            | TokenKind::LessEquals
            | TokenKind::Greater
            | TokenKind::GreaterEquals
            | TokenKind::Plus
            | TokenKind::Dash
            | TokenKind::Star
            | TokenKind::Slash => TokenClass::Operator,
        }
    }

    /// True for tokens after which a `-` must be subtraction rather than
    /// the sign of a number.
    pub fn ends_operand(&self) -> bool {
        matches!(
            self,
            TokenKind::Number
                | TokenKind::String
                | TokenKind::Identifier
                | TokenKind::CloseParen
                | TokenKind::CloseBracket
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::String | TokenKind::Identifier | TokenKind::Number => {
                write!(f, "{} ({})", self.kind, self.value)
            }
            _ => write!(f, "{} `{}`", self.kind, self.value),
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Prints `line:column class token`, one token per line.
    pub fn debug(&self) {
        println!(
            "{}:{} {:?} {}",
            self.span.start.line,
            self.span.start.column,
            self.kind.class(),
            self
        );
    }
}
