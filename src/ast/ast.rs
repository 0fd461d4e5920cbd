use std::fmt::Display;

use crate::Span;

use super::{
    expressions::{BinaryExpr, NumberExpr, StringExpr, SymbolExpr},
    statements::{AssignmentStmt, BlockStmt, IfStmt, WhileStmt},
};

/// Statement
///
/// Closed set of statement kinds; every pass over the tree matches on it
/// exhaustively.
#[derive(Debug, Clone)]
pub enum Stmt {
    Assignment(AssignmentStmt),
    While(WhileStmt),
    If(IfStmt),
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Assignment(stmt) => &stmt.span,
            Stmt::While(stmt) => &stmt.span,
            Stmt::If(stmt) => &stmt.span,
        }
    }
}

/// Expression
#[derive(Debug, Clone)]
pub enum Expr {
    Binary(BinaryExpr),
    Number(NumberExpr),
    String(StringExpr),
    Symbol(SymbolExpr),
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Binary(expr) => &expr.span,
            Expr::Number(expr) => &expr.span,
            Expr::String(expr) => &expr.span,
            Expr::Symbol(expr) => &expr.span,
        }
    }
}

// Rendering. Expressions print in prefix form (`+ x 1`), statements one per
// line with `endwhile`/`endif` closing their bodies.

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Binary(expr) => write!(f, "{} {} {}", expr.operator, expr.left, expr.right),
            Expr::Number(expr) => write!(f, "{}", expr.value),
            Expr::String(expr) => write!(f, "{}", expr.value),
            Expr::Symbol(expr) => write!(f, "{}", expr.value),
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Assignment(stmt) => writeln!(f, "= {} {}", stmt.identifier, stmt.value),
            Stmt::While(stmt) => {
                writeln!(f, "while {}", stmt.condition)?;
                write!(f, "{}", stmt.body)?;
                writeln!(f, "endwhile")
            }
            Stmt::If(stmt) => {
                writeln!(f, "if {}", stmt.condition)?;
                write!(f, "{}", stmt.then_body)?;
                if let Some(else_body) = &stmt.else_body {
                    writeln!(f, "else")?;
                    write!(f, "{}", else_body)?;
                }
                writeln!(f, "endif")
            }
        }
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in self.iter() {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
