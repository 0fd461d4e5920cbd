//! Type checking module.
//!
//! A single pass over the AST that gives every expression one of the two
//! Gee types and records each variable's type the first time it is assigned.
//! The check fails on:
//!
//! - Operands of different types
//! - Arithmetic on booleans
//! - A `while`/`if` condition that is not boolean
//! - Assigning a variable a value of a different type than it already has
//! - Reading a variable before it is assigned
//! - Any string value

pub mod type_checker;
pub mod type_map;
