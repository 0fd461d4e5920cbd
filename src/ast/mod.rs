/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Stmt` and `Expr` sums and their textual rendering
/// - expressions: Expression nodes and binary operators
/// - statements: Statement nodes and statement lists
/// - types: The two value types of the language
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
