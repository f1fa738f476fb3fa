//! Code generation module for the compiler.
//!
//! This module contains the text backend that lowers the checked AST
//! into JavaScript statement text. It handles:
//!
//! - Canonical emission of literals and identifiers
//! - Operator spelling and spacing, with strict equality forms
//! - Conditionals as `if`/`else` or ternary text depending on form
//! - Variable declarations as `var` statements

pub mod codegen;
