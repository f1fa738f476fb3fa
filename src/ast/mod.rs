//! AST (Abstract Syntax Tree) module
//! Contains all definitions related to the AST structure
//!
//! Submodules:
//! - ast: Node, literal and operator definitions

pub mod ast;
