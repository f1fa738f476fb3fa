//! Unit tests for the type checker module.
//!
//! This module contains tests for the validation rules:
//! - Literal and binary expression typing
//! - Conditional typing in statement and expression form
//! - Variable declaration and lookup
//! - Scope behaviour
//! - Error cases

use super::type_checker::{type_check, ValueType};
use crate::{errors::errors::Error, lexer::lexer::tokenize, parser::parser::parse};

fn check_source(source: &str) -> Result<(), Error> {
    type_check(&parse(tokenize(source).unwrap()).unwrap())
}

#[test]
fn test_check_literals() {
    assert!(check_source("1; 2.5; true; \"hello\";").is_ok());
}

#[test]
fn test_check_arithmetic_int() {
    assert!(check_source("1 + 2 * 3 - 4 / 2;").is_ok());
}

#[test]
fn test_check_arithmetic_float() {
    assert!(check_source("1.5 + 2.5 * 0.5;").is_ok());
}

#[test]
fn test_check_arithmetic_mixed_numeric_rejected() {
    let result = check_source("1 + 2.5;");

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().get_error_name(),
        "OperandTypeMismatch"
    );
}

#[test]
fn test_check_arithmetic_on_bools_rejected() {
    assert!(check_source("true + false;").is_err());
}

#[test]
fn test_check_arithmetic_on_strings_rejected() {
    assert!(check_source("\"a\" + \"b\";").is_err());
}

#[test]
fn test_check_comparison_numeric() {
    assert!(check_source("1 < 2; 2.5 >= 1.5; 3 > 0; 1 <= 1;").is_ok());
}

#[test]
fn test_check_comparison_mixed_numeric_rejected() {
    assert!(check_source("1 < 2.5;").is_err());
}

#[test]
fn test_check_comparison_on_bools_rejected() {
    assert!(check_source("true < false;").is_err());
}

#[test]
fn test_check_equality_same_types() {
    assert!(check_source("1 == 2; 1.5 != 2.5; true == false; \"a\" == \"b\";").is_ok());
}

#[test]
fn test_check_equality_different_types_rejected() {
    let result = check_source("1 == true;");

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().get_error_name(),
        "OperandTypeMismatch"
    );
}

#[test]
fn test_check_logical_bools() {
    assert!(check_source("true && false || true;").is_ok());
}

#[test]
fn test_check_logical_on_ints_rejected() {
    assert!(check_source("1 && 2;").is_err());
}

#[test]
fn test_check_if_statement() {
    assert!(check_source("if true { 1; }").is_ok());
}

#[test]
fn test_check_if_condition_must_be_bool() {
    let result = check_source("if 1 { 2; }");

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().get_error_name(),
        "ConditionTypeMismatch"
    );
}

#[test]
fn test_check_if_branch_types_independent_in_statement_form() {
    // Statement-form branches may have different types.
    assert!(check_source("if true { 1; } else { \"a\"; }").is_ok());
}

#[test]
fn test_check_conditional_expression() {
    assert!(check_source("let x = if true do 1 else 2;").is_ok());
}

#[test]
fn test_check_conditional_expression_branch_mismatch() {
    let result = check_source("if true do 1 else true;");

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().get_error_name(),
        "BranchTypeMismatch"
    );
}

#[test]
fn test_check_variable_declaration_and_use() {
    assert!(check_source("let x = 1; x + 2;").is_ok());
}

#[test]
fn test_check_variable_not_declared() {
    let result = check_source("x;");

    assert!(result.is_err());
    let error = result.err().unwrap();
    assert_eq!(error.get_error_name(), "VariableNotDeclared");
    assert_eq!(error.get_position().to_string(), "1");
}

#[test]
fn test_check_variable_already_declared() {
    let source = "let x = 1;\nlet x = 2;";
    let result = check_source(source);

    assert!(result.is_err());
    let error = result.err().unwrap();
    assert_eq!(error.get_error_name(), "VariableAlreadyDeclared");
    assert_eq!(error.get_position().to_string(), "2");
}

#[test]
fn test_check_variable_type_from_initialiser() {
    assert!(check_source("let b = 1 < 2; b && true;").is_ok());
    assert!(check_source("let b = 1 < 2; b + 1;").is_err());
}

#[test]
fn test_flat_scope_block_leak() {
    // Declarations inside a block stay visible after the block closes.
    assert!(check_source("{ let x = 1; } x + 1;").is_ok());
}

#[test]
fn test_flat_scope_shadowing_rejected() {
    // With a single flat scope, re-declaring inside a block is a collision.
    let result = check_source("let x = 1; { let x = 2; }");

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().get_error_name(),
        "VariableAlreadyDeclared"
    );
}

#[test]
fn test_check_assignment_not_supported() {
    let result = check_source("let x = 1; x = 2;");

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().get_error_name(),
        "NotImplementedError"
    );
}

#[test]
fn test_value_type_display() {
    assert_eq!(ValueType::Int.to_string(), "int");
    assert_eq!(ValueType::Float.to_string(), "float");
    assert_eq!(ValueType::Bool.to_string(), "bool");
    assert_eq!(ValueType::Str.to_string(), "string");
    assert_eq!(ValueType::Void.to_string(), "void");
}

#[test]
fn test_value_type_is_numeric() {
    assert!(ValueType::Int.is_numeric());
    assert!(ValueType::Float.is_numeric());
    assert!(!ValueType::Bool.is_numeric());
    assert!(!ValueType::Str.is_numeric());
    assert!(!ValueType::Void.is_numeric());
}
