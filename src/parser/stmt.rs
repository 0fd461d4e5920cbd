use tracing::debug;

use crate::{
    ast::{
        ast::Stmt,
        statements::{AssignmentStmt, BlockStmt, IfStmt, WhileStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    Span,
};

use super::{expr::parse_expr, parser::Parser};

/// `stmtList = { statement }`
///
/// Stops at end of input or at a block end, which is left for the enclosing
/// block to consume.
pub fn parse_stmt_list(parser: &mut Parser) -> Result<BlockStmt, Error> {
    debug!(token = %parser.current_token().value, "statement list");

    let start = parser.get_position();
    let mut body = vec![];

    while !matches!(
        parser.current_token_kind(),
        TokenKind::EOF | TokenKind::BlockEnd
    ) {
        body.push(parse_stmt(parser)?);
    }

    Ok(BlockStmt {
        body,
        span: Span {
            start,
            end: parser.get_position(),
        },
    })
}

/// `statement = ifStatement | whileStatement | assignment`
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    debug!(token = %parser.current_token().value, "statement");

    match parser.current_token_kind() {
        TokenKind::If => parse_if_stmt(parser),
        TokenKind::While => parse_while_stmt(parser),
        TokenKind::Identifier => parse_assignment_stmt(parser),
        _ => Err(parser.unexpected("expected `if`, `while` or an assignment")),
    }
}

/// `assignment = identifier "=" expression eoln`
pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    debug!(token = %parser.current_token().value, "assignment");

    let identifier = parser.advance().clone();

    let error = parser.unexpected("expected `=` after the variable name");
    parser.expect_error(TokenKind::Assignment, Some(error))?;

    let value = parse_expr(parser)?;

    // `x = 1 2` lands here with `2` as the current token
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Assignment(AssignmentStmt {
        identifier: identifier.value,
        value,
        span: identifier.span,
    }))
}

/// `ifStatement = "if" expression block [ "else" block ]`
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    debug!(token = %parser.current_token().value, "if statement");

    let start = parser.advance().span.clone();

    let condition = parse_expr(parser)?;
    let then_body = parse_block(parser)?;

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        debug!("else statement");
        parser.advance();
        Some(parse_block(parser)?)
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        condition,
        then_body,
        else_body,
        span: start,
    }))
}

/// `whileStatement = "while" expression block`
pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    debug!(token = %parser.current_token().value, "while statement");

    let start = parser.advance().span.clone();

    let condition = parse_expr(parser)?;
    let body = parse_block(parser)?;

    Ok(Stmt::While(WhileStmt {
        condition,
        body,
        span: start,
    }))
}

/// `block = ":" eoln indent stmtList undent`
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    debug!(token = %parser.current_token().value, "block");

    let error = parser.unexpected("expected `:` to open a block");
    parser.expect_error(TokenKind::Colon, Some(error))?;

    let error = parser.unexpected("expected a line break after `:`");
    parser.expect_error(TokenKind::Semicolon, Some(error))?;

    let error = parser.unexpected("expected an indented block");
    parser.expect_error(TokenKind::BlockStart, Some(error))?;

    let body = parse_stmt_list(parser)?;

    if parser.current_token_kind() != TokenKind::BlockEnd {
        return Err(parser.unexpected("expected the block to end"));
    }
    parser.advance();

    Ok(body)
}
