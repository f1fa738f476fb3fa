//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a sequence of tokens for parsing. It handles:
//!
//! - Tokenization of source text using regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token line tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
