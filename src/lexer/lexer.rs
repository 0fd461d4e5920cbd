use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::{
    indent::SourceLine,
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

pub type RegexHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(&format!("^(?:{})", pattern)).unwrap(),
            handler,
        }
    }
}

lazy_static! {
    // Tried in order. Within a class the longer spelling comes first.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new("\\s+", skip_handler),
        RegexPattern::new("'[^']*'|\"[^\"]*\"", string_handler),
        RegexPattern::new("-?[0-9]+(\\.[0-9]+)?", number_handler),
        RegexPattern::new("\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        RegexPattern::new("\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        RegexPattern::new("\\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[")),
        RegexPattern::new("\\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]")),
        RegexPattern::new(",", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        RegexPattern::new(":", MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")),
        RegexPattern::new(";", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        RegexPattern::new("@", MK_DEFAULT_HANDLER!(TokenKind::BlockStart, "@")),
        RegexPattern::new("~", MK_DEFAULT_HANDLER!(TokenKind::BlockEnd, "~")),
        RegexPattern::new("\\$", MK_DEFAULT_HANDLER!(TokenKind::Dollar, "$")),
        RegexPattern::new("<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=")),
        RegexPattern::new("<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
        RegexPattern::new(">=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=")),
        RegexPattern::new(">", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
        RegexPattern::new("==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        RegexPattern::new("=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        RegexPattern::new("!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        RegexPattern::new("\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        RegexPattern::new("-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        RegexPattern::new("\\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
        RegexPattern::new("/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        RegexPattern::new("[a-zA-Z]\\w*", symbol_handler),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    line: SourceLine,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    fn new(file: Rc<String>) -> Self {
        Lexer {
            tokens: vec![],
            line: SourceLine {
                number: 1,
                offset: 0,
                markers: 0,
                text: String::new(),
            },
            pos: 0,
            file,
        }
    }

    fn load(&mut self, line: &SourceLine) {
        self.line = line.clone();
        self.pos = 0;
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        trace!(token = %token, "lexed");
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &str {
        &self.line.text[self.pos..]
    }

    pub fn at_eol(&self) -> bool {
        self.pos >= self.line.text.len()
    }

    pub fn position_at(&self, offset: usize) -> Position {
        Position::new(
            self.line.number,
            self.line.source_column(offset) as u32,
            &self.file,
        )
    }

    /// Span of the next `len` bytes of the current line.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position_at(self.pos),
            end: self.position_at(self.pos + len),
        }
    }

    fn last_ends_operand(&self) -> bool {
        self.tokens
            .last()
            .map(|token| token.kind.ends_operand())
            .unwrap_or(false)
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    lexer.advance_n(matched.len());
}

fn string_handler(lexer: &mut Lexer, matched: &str) {
    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::String, matched.to_string(), span));
    lexer.advance_n(matched.len());
}

fn number_handler(lexer: &mut Lexer, matched: &str) {
    // `x -1` is a subtraction: the sign only binds where an operand is expected
    if matched.starts_with('-') && lexer.last_ends_operand() {
        let span = lexer.span_of(1);
        lexer.push(MK_TOKEN!(TokenKind::Dash, String::from("-"), span));
        lexer.advance_n(1);
        return;
    }

    let span = lexer.span_of(matched.len());
    lexer.push(MK_TOKEN!(TokenKind::Number, matched.to_string(), span));
    lexer.advance_n(matched.len());
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) {
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);
    let span = lexer.span_of(matched.len());

    lexer.push(MK_TOKEN!(kind, matched.to_string(), span));
    lexer.advance_n(matched.len());
}

/// Tokenizes normalized lines into one token stream terminated by `EOF`.
pub fn tokenize(lines: &[SourceLine], file: Rc<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(Rc::clone(&file));

    for line in lines {
        lex.load(line);

        while !lex.at_eol() {
            let remainder = lex.remainder();
            let found = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remainder)
                    .map(|found| (pattern.handler, found.as_str().to_string()))
            });

            match found {
                Some((handler, matched)) => handler(&mut lex, &matched),
                None => {
                    let token = remainder.chars().next().map(String::from).unwrap_or_default();
                    return Err(Error::new(
                        ErrorImpl::UnrecognisedToken { token },
                        lex.position_at(lex.pos),
                    ));
                }
            }
        }
    }

    let end = match lines.last() {
        Some(line) => Position::new(
            line.number,
            line.source_column(line.text.len()) as u32,
            &file,
        ),
        None => Position::new(1, 0, &file),
    };
    lex.push(MK_TOKEN!(
        TokenKind::EOF,
        String::from("EOF"),
        Span {
            start: end.clone(),
            end
        }
    ));
    Ok(lex.tokens)
}

/// Normalizes and tokenizes raw source text in one step.
pub fn tokenize_source(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let file = Rc::new(file.unwrap_or_else(|| String::from("shell")));
    tokenize(&super::indent::normalize(source), file)
}
