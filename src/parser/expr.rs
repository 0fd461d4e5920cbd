use tracing::debug;

use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, NumberExpr, Operator, StringExpr, SymbolExpr},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

const RELATIONAL: [TokenKind; 6] = [
    TokenKind::Less,
    TokenKind::LessEquals,
    TokenKind::Greater,
    TokenKind::GreaterEquals,
    TokenKind::Equals,
    TokenKind::NotEquals,
];

/// Consumes the operator under the cursor and the right operand, folding
/// them onto `left`.
fn parse_binary_expr(
    parser: &mut Parser,
    left: Expr,
    parse_operand: fn(&mut Parser) -> Result<Expr, Error>,
) -> Result<Expr, Error> {
    let token = parser.advance().clone();
    let Some(operator) = Operator::from_token_kind(token.kind) else {
        return Err(parser.unexpected("expected an operator"));
    };
    let right = parse_operand(parser)?;

    Ok(Expr::Binary(BinaryExpr {
        operator,
        left: Box::new(left),
        right: Box::new(right),
        span: token.span,
    }))
}

/// `expression = andExpr { "or" andExpr }`
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    debug!(token = %parser.current_token().value, "expression");

    let mut left = parse_and_expr(parser)?;
    while parser.current_token_kind() == TokenKind::Or {
        left = parse_binary_expr(parser, left, parse_and_expr)?;
    }

    Ok(left)
}

/// `andExpr = relationalExpr { "and" relationalExpr }`
pub fn parse_and_expr(parser: &mut Parser) -> Result<Expr, Error> {
    debug!(token = %parser.current_token().value, "and expression");

    let mut left = parse_relational_expr(parser)?;
    while parser.current_token_kind() == TokenKind::And {
        left = parse_binary_expr(parser, left, parse_relational_expr)?;
    }

    Ok(left)
}

/// `relationalExpr = addExpr [ relation addExpr ]`
pub fn parse_relational_expr(parser: &mut Parser) -> Result<Expr, Error> {
    debug!(token = %parser.current_token().value, "relational expression");

    let left = parse_additive_expr(parser)?;
    if parser.current_token().is_one_of_many(&RELATIONAL) {
        return parse_binary_expr(parser, left, parse_additive_expr);
    }

    Ok(left)
}

/// `addExpr = term { ("+" | "-") term }`
pub fn parse_additive_expr(parser: &mut Parser) -> Result<Expr, Error> {
    debug!(token = %parser.current_token().value, "additive expression");

    let mut left = parse_term(parser)?;
    while matches!(
        parser.current_token_kind(),
        TokenKind::Plus | TokenKind::Dash
    ) {
        left = parse_binary_expr(parser, left, parse_term)?;
    }

    Ok(left)
}

/// `term = factor { ("*" | "/") factor }`
pub fn parse_term(parser: &mut Parser) -> Result<Expr, Error> {
    debug!(token = %parser.current_token().value, "term");

    let mut left = parse_factor(parser)?;
    while matches!(
        parser.current_token_kind(),
        TokenKind::Star | TokenKind::Slash
    ) {
        left = parse_binary_expr(parser, left, parse_factor)?;
    }

    Ok(left)
}

/// `factor = number | string | identifier | "(" expression ")"`
pub fn parse_factor(parser: &mut Parser) -> Result<Expr, Error> {
    debug!(token = %parser.current_token().value, "factor");

    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.advance().clone();
            Ok(Expr::Number(NumberExpr {
                value: token.value,
                span: token.span,
            }))
        }
        TokenKind::String => {
            let token = parser.advance().clone();
            Ok(Expr::String(StringExpr {
                value: token.value,
                span: token.span,
            }))
        }
        TokenKind::Identifier => {
            let token = parser.advance().clone();
            Ok(Expr::Symbol(SymbolExpr {
                value: token.value,
                span: token.span,
            }))
        }
        TokenKind::OpenParen => {
            parser.advance();
            let expr = parse_expr(parser)?;

            let error = parser.unexpected("expected `)`");
            parser.expect_error(TokenKind::CloseParen, Some(error))?;

            Ok(expr)
        }
        _ => Err(parser.unexpected("expected a number, string, variable or `(`")),
    }
}
