//! Unit tests for the lexer module.
//!
//! Covers indentation normalization, token classes, operator precedence
//! between overlapping patterns, negative numbers and error cases.

use std::rc::Rc;

use super::{
    indent::{normalize, render},
    lexer::{tokenize, tokenize_source},
    tokens::{TokenClass, TokenKind},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize_source(source, Some("test.gee".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

fn values(source: &str) -> Vec<String> {
    tokenize_source(source, Some("test.gee".to_string()))
        .unwrap()
        .into_iter()
        .map(|token| token.value)
        .collect()
}

#[test]
fn test_normalize_flat_program() {
    let lines = normalize("x = 1\ny = 2\n");
    assert_eq!(render(&lines), "x = 1;y = 2;");
    assert_eq!(lines[0].number, 1);
    assert_eq!(lines[1].number, 2);
}

#[test]
fn test_normalize_drops_comments_and_blank_lines() {
    let source = "# header\n\nx = 1   # trailing\n     \n   # indented comment\ny = 2\n";
    let lines = normalize(source);

    assert_eq!(lines.len(), 2);
    assert_eq!(render(&lines), "x = 1;y = 2;");
    assert_eq!(lines[0].number, 3);
    assert_eq!(lines[1].number, 6);
}

#[test]
fn test_normalize_nested_blocks() {
    let source = "while a:\n  if b:\n    x = 1\n  y = 2\nz = 3\n";
    assert_eq!(
        render(&normalize(source)),
        "while a:;@if b:;@x = 1;~y = 2;~z = 3;"
    );
}

#[test]
fn test_normalize_closes_open_blocks_at_end() {
    let lines = normalize("while a:\n  if b:\n    x = 1\n");

    assert_eq!(render(&lines), "while a:;@if b:;@x = 1;~~");
    let last = lines.last().unwrap();
    assert_eq!(last.markers, 2);
    assert_eq!(last.number, 4);
}

#[test]
fn test_normalize_dedent_to_unseen_level() {
    // 3 was never pushed: the dedent closes the level-4 block and stays in level 2
    let source = "if a:\n  if b:\n    x = 1\n   y = 2\n";
    assert_eq!(render(&normalize(source)), "if a:;@if b:;@x = 1;~y = 2;~");
}

#[test]
fn test_normalize_tabs_are_not_indentation() {
    let lines = normalize("if a:\n\tx = 1\n");
    assert_eq!(render(&lines), "if a:;x = 1;");
}

#[test]
fn test_source_column_skips_markers() {
    let lines = normalize("if a:\n    x = 1\n");
    let inner = &lines[1];

    assert_eq!(inner.text, "@x = 1;");
    assert_eq!(inner.source_column(0), 4);
    assert_eq!(inner.source_column(1), 4);
    assert_eq!(inner.source_column(3), 6);
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("if else while and or"),
        vec![
            TokenKind::If,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Semicolon,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize_source("foo bar2 baz_1 CamelCase iffy", None).unwrap();

    for (token, expected) in tokens.iter().zip(["foo", "bar2", "baz_1", "CamelCase", "iffy"]) {
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.value, expected);
    }
}

#[test]
fn test_tokenize_numbers() {
    assert_eq!(values("42 3.14 0"), vec!["42", "3.14", "0", ";", "EOF"]);
    assert_eq!(values("-7 (-2.5)"), vec!["-7", "(", "-2.5", ")", ";", "EOF"]);
    assert!(kinds("42 3.14").starts_with(&[TokenKind::Number, TokenKind::Number]));
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize_source(r#"'single' "double" 'it"s'"#, None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "'single'");
    assert_eq!(tokens[1].value, "\"double\"");
    assert_eq!(tokens[2].value, "'it\"s'");
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / < <= > >= == = !="),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Less,
            TokenKind::LessEquals,
            TokenKind::Greater,
            TokenKind::GreaterEquals,
            TokenKind::Equals,
            TokenKind::Assignment,
            TokenKind::NotEquals,
            TokenKind::Semicolon,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_tokenize_operators_without_spaces() {
    assert_eq!(values("a<=b==c"), vec!["a", "<=", "b", "==", "c", ";", "EOF"]);
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) [ ] , : $"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::Comma,
            TokenKind::Colon,
            TokenKind::Dollar,
            TokenKind::Semicolon,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_negative_number_after_operator() {
    assert_eq!(values("x = -1"), vec!["x", "=", "-1", ";", "EOF"]);
    assert_eq!(values("x = 2 * -1"), vec!["x", "=", "2", "*", "-1", ";", "EOF"]);
    assert_eq!(values("x = (-1)"), vec!["x", "=", "(", "-1", ")", ";", "EOF"]);
}

#[test]
fn test_minus_after_operand_is_subtraction() {
    assert_eq!(values("x = y-1"), vec!["x", "=", "y", "-", "1", ";", "EOF"]);
    assert_eq!(values("x = 3 -1"), vec!["x", "=", "3", "-", "1", ";", "EOF"]);
    assert_eq!(values("x = (y)-1"), vec!["x", "=", "(", "y", ")", "-", "1", ";", "EOF"]);
}

#[test]
fn test_tokenize_block_markers() {
    assert_eq!(
        kinds("while a:\n  x = 1\n"),
        vec![
            TokenKind::While,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Semicolon,
            TokenKind::BlockStart,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::BlockEnd,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_token_classes() {
    let tokens = tokenize_source("if a:\n  x = 'a' + 1\n", None).unwrap();
    let classes: Vec<TokenClass> = tokens.iter().map(|token| token.kind.class()).collect();

    assert_eq!(
        classes,
        vec![
            TokenClass::Identifier,
            TokenClass::Identifier,
            TokenClass::Punctuation,
            TokenClass::StatementEnd,
            TokenClass::BlockStart,
            TokenClass::Identifier,
            TokenClass::Operator,
            TokenClass::String,
            TokenClass::Operator,
            TokenClass::Number,
            TokenClass::StatementEnd,
            TokenClass::BlockEnd,
            TokenClass::EndOfInput
        ]
    );
}

#[test]
fn test_token_positions_are_source_coordinates() {
    let tokens = tokenize_source("x = 1\nif x > 0:\n    y = x\n", None).unwrap();

    let y = tokens.iter().find(|token| token.value == "y").unwrap();
    assert_eq!(y.span.start.line, 3);
    assert_eq!(y.span.start.column, 4);
    assert_eq!(y.span.end.column, 5);

    let greater = tokens.iter().find(|token| token.kind == TokenKind::Greater).unwrap();
    assert_eq!(greater.span.start.line, 2);
    assert_eq!(greater.span.start.column, 5);
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize(&normalize(""), Rc::new("test.gee".to_string())).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unrecognised_character() {
    let error = tokenize_source("x = 1\ny = x ! 2\n", Some("test.gee".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 6);
}
