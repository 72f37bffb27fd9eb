/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Node` trait and the `Statement` / `Expression` enums
/// - expressions: Definitions for the expression node types
/// - statements: Definitions for `Program` and the statement node types
pub mod ast;
pub mod expressions;
pub mod statements;
