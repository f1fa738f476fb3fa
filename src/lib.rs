#![allow(clippy::module_inception)]

//! A small experimental language front-end.
//!
//! Source text is lexed into tokens, parsed into an AST, statically
//! type checked, and lowered into JavaScript statement text. The whole
//! pipeline runs synchronously and aborts on the first fatal error.

use std::{fmt::Display, fs, path::PathBuf};

use crate::{
    codegen::codegen::generate,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::type_check,
};

pub mod ast;
pub mod codegen;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

/// A source location for diagnostics: the 1-based line an error refers
/// to, or the end-of-input marker when no line is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Line(u32),
    Eof,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Line(line) => write!(f, "{}", line),
            Position::Eof => write!(f, "EOF"),
        }
    }
}

/// Runs the full pipeline over `source` and returns the generated
/// JavaScript text, or the first fatal error of whichever stage failed.
pub fn compile(source: &str) -> Result<String, Error> {
    let tokens = tokenize(source)?;
    let ast = parse(tokens)?;
    type_check(&ast)?;
    generate(&ast)
}

pub fn get_line(file: PathBuf, line_number: u32) -> Option<String> {
    let content = fs::read_to_string(&file).ok()?;
    content
        .lines()
        .nth((line_number as usize).checked_sub(1)?)
        .map(String::from)
}

pub fn display_error(error: Error, file: PathBuf) {
    /*
        Error: name (tip)
        -> final.lang
           |
        20 | let a = #;
           |
    */

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file.as_os_str().to_string_lossy());

    let line_number = match error.get_position() {
        Position::Line(line) => line,
        Position::Eof => {
            println!("   | <end of input>");
            return;
        }
    };

    if let Some(line_text) = get_line(file, line_number) {
        let line_string = line_number.to_string();
        let padding = line_string.len() + 2;
        println!("{:>padding$}", "|");
        println!("{} | {}", line_string, line_text.trim());
        println!("{:>padding$}", "|");
    }
}

#[cfg(test)]
mod tests {
    use super::Position;

    #[test]
    fn test_position_display() {
        assert_eq!(Position::Line(3).to_string(), "3");
        assert_eq!(Position::Eof.to_string(), "EOF");
    }
}
