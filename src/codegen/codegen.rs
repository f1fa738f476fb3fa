use crate::{
    ast::ast::{BinOp, Literal, Node},
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Output buffer for the one-pass, syntax-directed emission.
pub struct CodeGenerator {
    buff: String,
}

impl CodeGenerator {
    fn append(&mut self, text: &str) {
        self.buff.push_str(text);
    }
}

/// Lowers a checked AST into JavaScript statement text. Every top-level
/// statement's emitted text is followed by a newline. Performs no
/// semantic validation of its own.
pub fn generate(stmts: &[Node]) -> Result<String, Error> {
    let mut backend = CodeGenerator {
        buff: String::new(),
    };

    for stmt in stmts {
        generate_node(&mut backend, stmt)?;
        backend.append("\n");
    }

    Ok(backend.buff)
}

fn generate_node(b: &mut CodeGenerator, node: &Node) -> Result<(), Error> {
    match node {
        Node::Literal { value, .. } => {
            match value {
                Literal::Int(value) => b.append(&value.to_string()),
                Literal::Float(value) => b.append(&value.to_string()),
                Literal::Bool(value) => b.append(&value.to_string()),
                // No escape sequences exist, so the inner text can be
                // re-quoted verbatim.
                Literal::Str(text) => b.append(&format!("\"{}\"", text)),
            }
            Ok(())
        }
        Node::Binary {
            left, op, right, ..
        } => {
            generate_node(b, left)?;
            // Equality maps to the strict forms to avoid implicit
            // coercion in the emitted text.
            b.append(match op {
                BinOp::Plus => " + ",
                BinOp::Minus => " - ",
                BinOp::Multiply => "*",
                BinOp::Divide => "/",
                BinOp::Greater => " > ",
                BinOp::GreaterEqual => " >= ",
                BinOp::Less => " < ",
                BinOp::LessEqual => " <= ",
                BinOp::Equal => " === ",
                BinOp::NotEqual => " !== ",
                BinOp::And => " && ",
                BinOp::Or => " || ",
            });
            generate_node(b, right)
        }
        Node::Grouping { expr, .. } => {
            b.append("(");
            generate_node(b, expr)?;
            b.append(")");
            Ok(())
        }
        Node::ExprStmt { expr, .. } => {
            generate_node(b, expr)?;
            b.append(";");
            Ok(())
        }
        Node::Block { stmts, .. } => {
            b.append("{");
            for stmt in stmts {
                generate_node(b, stmt)?;
            }
            b.append("}");
            Ok(())
        }
        Node::If {
            cond,
            then,
            else_,
            is_expr,
            ..
        } => {
            if *is_expr {
                b.append("(");
                generate_node(b, cond)?;
                b.append(") ? (");
                generate_node(b, then)?;
                b.append(") : (");
                // The parser guarantees an else branch on the
                // expression form.
                match else_ {
                    Some(else_) => generate_node(b, else_)?,
                    None => {
                        return Err(unhandled(node));
                    }
                }
                b.append(")");
            } else {
                b.append("if (");
                generate_node(b, cond)?;
                b.append(") ");
                generate_node(b, then)?;
                if let Some(else_) = else_ {
                    b.append(" else ");
                    generate_node(b, else_)?;
                }
            }
            Ok(())
        }
        Node::Ident { name, .. } => {
            b.append(name);
            Ok(())
        }
        Node::Let { name, init, .. } => {
            b.append("var ");
            b.append(name);
            b.append(" = ");
            generate_node(b, init)?;
            b.append(";");
            Ok(())
        }
        // A node with no emission rule reaching this stage is a defect
        // in an earlier stage, not a user-facing error.
        Node::Assign { .. } => Err(unhandled(node)),
    }
}

fn unhandled(node: &Node) -> Error {
    Error::new(
        ErrorImpl::UnhandledNode {
            node: String::from(node.name()),
        },
        Position::Line(node.line()),
    )
}
