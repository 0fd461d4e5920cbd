//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! A recursive-descent parser with one routine per grammar rule:
//!
//! ```text
//! program     = { statement }
//! statement   = ifStmt | whileStmt | assignment
//! assignment  = identifier "=" expression ";"
//! ifStmt      = "if" expression block [ "else" block ]
//! whileStmt   = "while" expression block
//! block       = ":" ";" "@" { statement } "~"
//! expression  = andExpr { "or" andExpr }
//! andExpr     = relExpr { "and" relExpr }
//! relExpr     = addExpr [ relOp addExpr ]
//! addExpr     = term { ("+"|"-") term }
//! term        = factor { ("*"|"/") factor }
//! factor      = number | string | identifier | "(" expression ")"
//! ```
//!
//! One token of look-ahead always decides the production; there is no
//! backtracking and the first mismatch aborts the parse.

pub mod expr;
pub mod parser;
pub mod stmt;
