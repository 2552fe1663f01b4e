/// AST (Abstract Syntax Tree) module
///
/// Submodules:
/// - ast: the `Node` sum type and the arithmetic operators
pub mod ast;

#[cfg(test)]
mod tests;
