//! Unit tests for the parser module.
//!
//! This module contains tests for statement and expression parsing:
//! - Literals, identifiers and grouping
//! - Binary operator precedence and associativity
//! - Variable declarations and assignments
//! - Conditionals in statement and expression form
//! - Error cases

use super::parser::parse;
use crate::{
    ast::ast::{BinOp, Literal, Node},
    lexer::lexer::tokenize,
};

fn parse_source(source: &str) -> Result<Vec<Node>, crate::errors::errors::Error> {
    parse(tokenize(source).unwrap())
}

#[test]
fn test_parse_empty_program() {
    let ast = parse_source("").unwrap();

    assert!(ast.is_empty());
}

#[test]
fn test_parse_literal_statement() {
    let ast = parse_source("42;").unwrap();

    assert_eq!(ast.len(), 1);
    let Node::ExprStmt { expr, .. } = &ast[0] else {
        panic!("expected expression statement, got {:?}", ast[0]);
    };
    assert!(matches!(
        expr.as_ref(),
        Node::Literal {
            value: Literal::Int(42),
            ..
        }
    ));
}

#[test]
fn test_parse_all_literal_kinds() {
    let ast = parse_source("1; 2.5; true; false; \"hi\"; x;");
    // `x` is resolved later by the type checker, parsing succeeds.
    assert!(ast.is_ok());
    assert_eq!(ast.unwrap().len(), 6);
}

#[test]
fn test_parse_precedence_multiplication_binds_tighter() {
    let ast = parse_source("1 + 2 * 3;").unwrap();

    let Node::ExprStmt { expr, .. } = &ast[0] else {
        panic!("expected expression statement");
    };
    let Node::Binary {
        left, op, right, ..
    } = expr.as_ref()
    else {
        panic!("expected binary expression");
    };
    assert_eq!(*op, BinOp::Plus);
    assert!(matches!(
        left.as_ref(),
        Node::Literal {
            value: Literal::Int(1),
            ..
        }
    ));
    let Node::Binary {
        left: mul_left,
        op: mul_op,
        right: mul_right,
        ..
    } = right.as_ref()
    else {
        panic!("expected multiplication on the right");
    };
    assert_eq!(*mul_op, BinOp::Multiply);
    assert!(matches!(
        mul_left.as_ref(),
        Node::Literal {
            value: Literal::Int(2),
            ..
        }
    ));
    assert!(matches!(
        mul_right.as_ref(),
        Node::Literal {
            value: Literal::Int(3),
            ..
        }
    ));
}

#[test]
fn test_parse_left_associativity() {
    // 1 - 2 - 3 must parse as (1 - 2) - 3.
    let ast = parse_source("1 - 2 - 3;").unwrap();

    let Node::ExprStmt { expr, .. } = &ast[0] else {
        panic!("expected expression statement");
    };
    let Node::Binary {
        left, op, right, ..
    } = expr.as_ref()
    else {
        panic!("expected binary expression");
    };
    assert_eq!(*op, BinOp::Minus);
    assert!(matches!(
        right.as_ref(),
        Node::Literal {
            value: Literal::Int(3),
            ..
        }
    ));
    let Node::Binary {
        op: inner_op,
        left: inner_left,
        ..
    } = left.as_ref()
    else {
        panic!("expected nested binary on the left");
    };
    assert_eq!(*inner_op, BinOp::Minus);
    assert!(matches!(
        inner_left.as_ref(),
        Node::Literal {
            value: Literal::Int(1),
            ..
        }
    ));
}

#[test]
fn test_parse_comparison_below_additive() {
    // 1 + 2 < 3 + 4 parses as (1 + 2) < (3 + 4).
    let ast = parse_source("1 + 2 < 3 + 4;").unwrap();

    let Node::ExprStmt { expr, .. } = &ast[0] else {
        panic!("expected expression statement");
    };
    let Node::Binary {
        left, op, right, ..
    } = expr.as_ref()
    else {
        panic!("expected binary expression");
    };
    assert_eq!(*op, BinOp::Less);
    assert!(matches!(left.as_ref(), Node::Binary { op: BinOp::Plus, .. }));
    assert!(matches!(
        right.as_ref(),
        Node::Binary { op: BinOp::Plus, .. }
    ));
}

#[test]
fn test_parse_logical_precedence() {
    // a || b && c parses as a || (b && c).
    let ast = parse_source("a || b && c;").unwrap();

    let Node::ExprStmt { expr, .. } = &ast[0] else {
        panic!("expected expression statement");
    };
    let Node::Binary { op, right, .. } = expr.as_ref() else {
        panic!("expected binary expression");
    };
    assert_eq!(*op, BinOp::Or);
    assert!(matches!(right.as_ref(), Node::Binary { op: BinOp::And, .. }));
}

#[test]
fn test_parse_grouping_overrides_precedence() {
    let ast = parse_source("(1 + 2) * 3;").unwrap();

    let Node::ExprStmt { expr, .. } = &ast[0] else {
        panic!("expected expression statement");
    };
    let Node::Binary { left, op, .. } = expr.as_ref() else {
        panic!("expected binary expression");
    };
    assert_eq!(*op, BinOp::Multiply);
    assert!(matches!(left.as_ref(), Node::Grouping { .. }));
}

#[test]
fn test_parse_var_decl() {
    let ast = parse_source("let answer = 42;").unwrap();

    assert_eq!(ast.len(), 1);
    let Node::Let { name, init, .. } = &ast[0] else {
        panic!("expected let statement");
    };
    assert_eq!(name, "answer");
    assert!(matches!(
        init.as_ref(),
        Node::Literal {
            value: Literal::Int(42),
            ..
        }
    ));
}

#[test]
fn test_parse_var_decl_missing_identifier() {
    let result = parse_source("let = 42;");

    assert!(result.is_err());
}

#[test]
fn test_parse_var_decl_missing_semicolon() {
    let result = parse_source("let x = 1");

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().get_error_name(),
        "UnexpectedEndOfInput"
    );
}

#[test]
fn test_parse_assignment_statement() {
    let ast = parse_source("x = 1;").unwrap();

    let Node::Assign { name, value, .. } = &ast[0] else {
        panic!("expected assignment statement");
    };
    assert_eq!(name, "x");
    assert!(matches!(
        value.as_ref(),
        Node::Literal {
            value: Literal::Int(1),
            ..
        }
    ));
}

#[test]
fn test_parse_block_statement() {
    let ast = parse_source("{ 1; 2; }").unwrap();

    let Node::Block { stmts, .. } = &ast[0] else {
        panic!("expected block statement");
    };
    assert_eq!(stmts.len(), 2);
}

#[test]
fn test_parse_unterminated_block() {
    let result = parse_source("{ 1;");

    assert!(result.is_err());
}

#[test]
fn test_parse_if_statement() {
    let ast = parse_source("if x > 0 { 1; }").unwrap();

    let Node::If {
        cond,
        then,
        else_,
        is_expr,
        ..
    } = &ast[0]
    else {
        panic!("expected if statement");
    };
    assert!(!is_expr);
    assert!(matches!(cond.as_ref(), Node::Binary { .. }));
    assert!(matches!(then.as_ref(), Node::Block { .. }));
    assert!(else_.is_none());
}

#[test]
fn test_parse_if_else_statement() {
    let ast = parse_source("if x > 0 { 1; } else { 2; }").unwrap();

    let Node::If { else_, .. } = &ast[0] else {
        panic!("expected if statement");
    };
    assert!(matches!(
        else_.as_deref(),
        Some(Node::Block { .. })
    ));
}

#[test]
fn test_parse_else_if_chain() {
    let ast = parse_source("if a { 1; } else if b { 2; } else { 3; }").unwrap();

    let Node::If { else_, .. } = &ast[0] else {
        panic!("expected if statement");
    };
    let Some(Node::If {
        else_: nested_else, ..
    }) = else_.as_deref()
    else {
        panic!("expected nested if in else branch");
    };
    assert!(nested_else.is_some());
}

#[test]
fn test_parse_conditional_expression_statement() {
    let ast = parse_source("if x > 0 do 1 else 2;").unwrap();

    let Node::ExprStmt { expr, .. } = &ast[0] else {
        panic!("expected expression statement");
    };
    let Node::If {
        is_expr, else_, ..
    } = expr.as_ref()
    else {
        panic!("expected conditional expression");
    };
    assert!(is_expr);
    assert!(else_.is_some());
}

#[test]
fn test_parse_conditional_expression_as_operand() {
    let ast = parse_source("let y = if x do 1 else 2;").unwrap();

    let Node::Let { init, .. } = &ast[0] else {
        panic!("expected let statement");
    };
    assert!(matches!(init.as_ref(), Node::If { is_expr: true, .. }));
}

#[test]
fn test_parse_conditional_expression_requires_else() {
    let result = parse_source("let y = if x do 1;");

    assert!(result.is_err());
}

#[test]
fn test_parse_unexpected_token() {
    let result = parse_source("+ 1;");

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "UnexpectedToken");
}

#[test]
fn test_parse_missing_close_paren() {
    let result = parse_source("(1 + 2;");

    assert!(result.is_err());
}

#[test]
fn test_parse_error_position() {
    let source = "let x = 1;\nlet y = ;";
    let result = parse_source(source);

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().get_position().to_string(),
        "2"
    );
}

#[test]
fn test_parse_multiple_statements() {
    let ast = parse_source("let x = 1; x + 1; { x; }").unwrap();

    assert_eq!(ast.len(), 3);
    assert!(matches!(ast[0], Node::Let { .. }));
    assert!(matches!(ast[1], Node::ExprStmt { .. }));
    assert!(matches!(ast[2], Node::Block { .. }));
}
