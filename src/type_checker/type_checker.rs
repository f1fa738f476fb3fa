use std::{collections::HashMap, fmt::Display};

use crate::{
    ast::ast::{BinOp, Literal, Node},
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// The closed set of checked value types.
///
/// `Str` participates only in literal synthesis and the equality rule;
/// arithmetic, comparison and logical operators reject it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Int,
    Float,
    Bool,
    Str,
    Void,
}

impl ValueType {
    pub fn is_numeric(&self) -> bool {
        matches!(self, ValueType::Int | ValueType::Float)
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Bool => "bool",
            ValueType::Str => "string",
            ValueType::Void => "void",
        };
        write!(f, "{}", name)
    }
}

/// A declared variable. `is_const` is always false today: mutability
/// syntax does not exist yet.
#[derive(Debug, Clone)]
pub struct Variable {
    pub name: String,
    pub var_type: ValueType,
    pub is_const: bool,
}

/// One lexical environment: name → declared variable.
#[derive(Debug, Default)]
pub struct Scope {
    names: HashMap<String, Variable>,
}

impl Scope {
    pub fn new() -> Self {
        Scope {
            names: HashMap::new(),
        }
    }

    pub fn declare_variable(
        &mut self,
        name: String,
        var_type: ValueType,
        line: u32,
    ) -> Result<(), Error> {
        if self.names.contains_key(&name) {
            return Err(Error::new(
                ErrorImpl::VariableAlreadyDeclared { variable: name },
                Position::Line(line),
            ));
        }
        self.names.insert(
            name.clone(),
            Variable {
                name,
                var_type,
                is_const: false,
            },
        );
        Ok(())
    }

    pub fn get_variable(&self, name: &str) -> Option<&Variable> {
        self.names.get(name)
    }
}

/// Checker context, created once per compilation and discarded when the
/// pass completes. The scope stack is the enclosing chain; declaration
/// and lookup act only on the innermost scope, and no scope is pushed
/// per block, so block-local shadowing does not exist.
pub struct TypeChecker {
    scopes: Vec<Scope>,
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker {
            scopes: vec![Scope::new()],
        }
    }

    fn current_scope(&mut self) -> &mut Scope {
        // The stack is never empty: the root scope is created in new().
        self.scopes.last_mut().unwrap()
    }

    fn get_variable(&self, name: &str) -> Option<&Variable> {
        self.scopes.last().unwrap().get_variable(name)
    }
}

impl Default for TypeChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates the AST, aborting on the first type error. The AST itself
/// is never mutated; this is purely a validation pass.
pub fn type_check(stmts: &[Node]) -> Result<(), Error> {
    let mut checker = TypeChecker::new();
    for stmt in stmts {
        check_node(&mut checker, stmt)?;
    }
    Ok(())
}

/// Computes the synthesized type of a single node.
pub fn check_node(checker: &mut TypeChecker, node: &Node) -> Result<ValueType, Error> {
    match node {
        Node::Literal { value, .. } => Ok(match value {
            Literal::Int(_) => ValueType::Int,
            Literal::Float(_) => ValueType::Float,
            Literal::Bool(_) => ValueType::Bool,
            Literal::Str(_) => ValueType::Str,
        }),
        Node::Binary {
            left,
            op,
            right,
            line,
        } => {
            let left_type = check_node(checker, left)?;
            let right_type = check_node(checker, right)?;
            check_binary(*op, left_type, right_type, *line)
        }
        Node::Grouping { expr, .. } => check_node(checker, expr),
        Node::ExprStmt { expr, .. } => check_node(checker, expr),
        Node::Block { stmts, .. } => {
            for stmt in stmts {
                check_node(checker, stmt)?;
            }
            Ok(ValueType::Void)
        }
        Node::If {
            cond,
            then,
            else_,
            is_expr,
            line,
        } => {
            let cond_type = check_node(checker, cond)?;
            if cond_type != ValueType::Bool {
                return Err(Error::new(
                    ErrorImpl::ConditionTypeMismatch {
                        received: cond_type.to_string(),
                    },
                    Position::Line(cond.line()),
                ));
            }

            let then_type = check_node(checker, then)?;
            let else_type = match else_ {
                Some(else_) => Some(check_node(checker, else_)?),
                None => None,
            };

            if *is_expr {
                // Both branches are mandatory in the expression form.
                if else_type != Some(then_type) {
                    return Err(Error::new(
                        ErrorImpl::BranchTypeMismatch {
                            then_type: then_type.to_string(),
                            else_type: else_type
                                .map(|t| t.to_string())
                                .unwrap_or_else(|| String::from("none")),
                        },
                        Position::Line(*line),
                    ));
                }
                return Ok(then_type);
            }
            Ok(ValueType::Void)
        }
        Node::Let { name, init, line } => {
            let init_type = check_node(checker, init)?;
            checker
                .current_scope()
                .declare_variable(name.clone(), init_type, *line)?;
            Ok(ValueType::Void)
        }
        Node::Ident { name, line } => match checker.get_variable(name) {
            Some(variable) => Ok(variable.var_type),
            None => Err(Error::new(
                ErrorImpl::VariableNotDeclared {
                    variable: name.clone(),
                },
                Position::Line(*line),
            )),
        },
        // Unfinished extension: parsed, never checked or generated.
        Node::Assign { line, .. } => Err(Error::new(
            ErrorImpl::NotImplementedError,
            Position::Line(*line),
        )),
    }
}

fn check_binary(
    op: BinOp,
    left: ValueType,
    right: ValueType,
    line: u32,
) -> Result<ValueType, Error> {
    let mismatch = || {
        Err(Error::new(
            ErrorImpl::OperandTypeMismatch {
                operator: op.to_string(),
                left: left.to_string(),
                right: right.to_string(),
            },
            Position::Line(line),
        ))
    };

    match op {
        BinOp::Plus | BinOp::Minus | BinOp::Multiply | BinOp::Divide => {
            if left.is_numeric() && left == right {
                Ok(left)
            } else {
                mismatch()
            }
        }
        BinOp::Greater | BinOp::GreaterEqual | BinOp::Less | BinOp::LessEqual => {
            if left.is_numeric() && left == right {
                Ok(ValueType::Bool)
            } else {
                mismatch()
            }
        }
        BinOp::Equal | BinOp::NotEqual => {
            if left == right {
                Ok(ValueType::Bool)
            } else {
                mismatch()
            }
        }
        BinOp::And | BinOp::Or => {
            if left == ValueType::Bool && right == ValueType::Bool {
                Ok(ValueType::Bool)
            } else {
                mismatch()
            }
        }
    }
}
