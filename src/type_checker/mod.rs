//! Type checking and semantic analysis module.
//!
//! This module performs the static validation pass over the AST:
//!
//! - Verifying operand types of binary expressions
//! - Requiring `bool` conditions and matching branch types in the
//!   expression form of `if`
//! - Resolving variable references and rejecting duplicates
//!
//! The checker synthesizes one type per node and never mutates the
//! AST. The first violated rule aborts the whole pass.

pub mod type_checker;

#[cfg(test)]
mod tests;
