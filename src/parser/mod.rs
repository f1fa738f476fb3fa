//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a sequence of tokens
//! into an AST. It uses a Pratt parser for expressions with one binding
//! power tier per precedence level and handles:
//!
//! - Statement parsing (blocks, conditionals, variable declarations)
//! - Expression parsing (binary operators, literals, grouping, the
//!   expression form of `if`)
//! - Error reporting with source lines; the first error aborts the parse
//!
//! The parser uses NUD (null denotation) and LED (left denotation)
//! handlers with binding powers for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
