use tracing::debug;

use crate::{
    ast::{
        ast::{Expr, Stmt},
        expressions::BinaryExpr,
        statements::BlockStmt,
        types::Type,
    },
    errors::errors::{Error, ErrorImpl},
};

use super::type_map::TypeMap;

pub fn type_check_expr(type_map: &TypeMap, ast: &Expr) -> Result<Type, Error> {
    match ast {
        Expr::Number(_) => Ok(Type::Number),
        Expr::String(string) => Err(Error::new(
            ErrorImpl::StringNotSupported {
                value: string.value.clone(),
            },
            string.span.start.clone(),
        )),
        Expr::Symbol(symbol) => type_map.get(&symbol.value).ok_or_else(|| {
            Error::new(
                ErrorImpl::VariableNotDeclared {
                    variable: symbol.value.clone(),
                },
                symbol.span.start.clone(),
            )
        }),
        Expr::Binary(binary) => type_check_binary(type_map, binary),
    }
}

fn type_check_binary(type_map: &TypeMap, binary: &BinaryExpr) -> Result<Type, Error> {
    let left = type_check_expr(type_map, &binary.left)?;
    let right = type_check_expr(type_map, &binary.right)?;

    if left != right {
        return Err(Error::new(
            ErrorImpl::TypeMatchError {
                operator: binary.operator.to_string(),
                left,
                right,
            },
            binary.span.start.clone(),
        ));
    }

    // Relational operators accept any pair of equal types, so two booleans
    // compare with `<` as well as two numbers do.
    if binary.operator.is_boolean() {
        return Ok(Type::Boolean);
    }

    match left {
        Type::Number => Ok(Type::Number),
        operand => Err(Error::new(
            ErrorImpl::OperandTypeError {
                operator: binary.operator.to_string(),
                operand,
            },
            binary.span.start.clone(),
        )),
    }
}

/// Requires a `while`/`if` condition to be boolean.
fn type_check_condition(type_map: &TypeMap, condition: &Expr, statement: &str) -> Result<(), Error> {
    match type_check_expr(type_map, condition)? {
        Type::Boolean => Ok(()),
        received => Err(Error::new(
            ErrorImpl::ConditionTypeError {
                statement: statement.to_string(),
                received,
            },
            condition.get_span().start.clone(),
        )),
    }
}

pub fn type_check_stmt(type_map: &mut TypeMap, ast: &Stmt) -> Result<(), Error> {
    match ast {
        Stmt::Assignment(assignment) => {
            let ty = type_check_expr(type_map, &assignment.value)?;

            match type_map.declare(&assignment.identifier, ty) {
                Ok(true) => {
                    debug!(variable = %assignment.identifier, %ty, "type established");
                    Ok(())
                }
                Ok(false) => Ok(()),
                Err(expected) => Err(Error::new(
                    ErrorImpl::VariableTypeChanged {
                        variable: assignment.identifier.clone(),
                        expected,
                        received: ty,
                    },
                    assignment.span.start.clone(),
                )),
            }
        }
        Stmt::While(while_stmt) => {
            type_check_condition(type_map, &while_stmt.condition, "while")?;
            type_check_block(type_map, &while_stmt.body)
        }
        Stmt::If(if_stmt) => {
            type_check_condition(type_map, &if_stmt.condition, "if")?;
            type_check_block(type_map, &if_stmt.then_body)?;

            if let Some(else_body) = &if_stmt.else_body {
                type_check_block(type_map, else_body)?;
            }
            Ok(())
        }
    }
}

pub fn type_check_block(type_map: &mut TypeMap, ast: &BlockStmt) -> Result<(), Error> {
    for stmt in ast.iter() {
        type_check_stmt(type_map, stmt)?;
    }
    Ok(())
}

/// Checks a whole program, recording every variable's type in `type_map`.
///
/// Statements are checked in order and the first error stops the check.
/// Variables are global: one assigned inside a block is visible after it.
pub fn type_check(ast: &BlockStmt, type_map: &mut TypeMap) -> Result<(), Error> {
    debug!(statements = ast.len(), "type checking");
    type_check_block(type_map, ast)
}
