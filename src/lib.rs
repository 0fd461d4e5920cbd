#![allow(clippy::module_inception)]

use std::{fmt::Display, path::Path, rc::Rc};

use crate::{
    ast::statements::BlockStmt,
    errors::errors::{Error, ErrorTip},
    lexer::{indent::normalize, lexer::tokenize, tokens::Token},
    parser::parser::parse,
    type_checker::{type_checker::type_check, type_map::TypeMap},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod logger;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

/// A location in the original source text.
///
/// `line` is 1-based, `column` is a 0-based byte offset into that line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: u32, column: u32, file: &Rc<String>) -> Self {
        Position {
            line,
            column,
            file: Rc::clone(file),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Runs the whole pipeline over one source text: indentation normalization,
/// tokenization, parsing and type checking.
///
/// Returns the type map in first-assignment order, or the first error found.
pub fn check_source(source: &str, file: Option<String>) -> Result<TypeMap, Error> {
    check_source_with(source, file, |_| {}, |_| {})
}

/// Same as [`check_source`], handing the token stream and the parsed program
/// to `on_tokens` and `on_ast` as each stage completes.
pub fn check_source_with(
    source: &str,
    file: Option<String>,
    on_tokens: impl FnOnce(&[Token]),
    on_ast: impl FnOnce(&BlockStmt),
) -> Result<TypeMap, Error> {
    let file = Rc::new(file.unwrap_or_else(|| String::from("shell")));

    let lines = normalize(source);
    let tokens = tokenize(&lines, Rc::clone(&file))?;
    on_tokens(&tokens);

    let ast = parse(tokens, Rc::clone(&file))?;
    on_ast(&ast);

    let mut type_map = TypeMap::new();
    type_check(&ast, &mut type_map)?;

    Ok(type_map)
}

/// Returns the 1-based line `line` of `source`, if it exists.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }
    source.lines().nth(line as usize - 1)
}

/// Renders a diagnostic in the form:
///
/// ```text
/// Error: TypeMatchError (Operands of `+` have different types: number and boolean)
/// -> main.gee
///   |
/// 3 | y = x + (x > 1)
///   | ------^
/// ```
pub fn format_error(error: &Error, source: &str, file: &Path) -> String {
    let mut out = String::new();
    let position = error.get_position();

    match error.get_tip() {
        ErrorTip::None => out.push_str(&format!("Error: {}\n", error.get_error_name())),
        tip => out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), tip)),
    }
    out.push_str(&format!("-> {}\n", file.as_os_str().to_string_lossy()));

    let Some(line_text) = get_line(source, position.line) else {
        // End of input, nothing to underline
        out.push_str(&format!("{}\n", error));
        return out;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!(
        "{} | {}\n",
        line_string,
        line_text_removed.trim_end().replace('\t', " ")
    ));

    // The column is a byte offset, the caret counts characters
    let column = (position.column as usize).saturating_sub(removed_whitespace);
    let before = line_text_removed.get(..column).unwrap_or(line_text_removed);
    let arrows = before.chars().count() + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

pub fn display_error(error: &Error, source: &str, file: &Path) {
    print!("{}", format_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();
    (&string[start..], start)
}
