use std::fmt::Display;

/// Literal payload of a `Node::Literal`.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

/// Binary operators, lowest binding (`Or`) to highest (`Divide`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Plus,
    Minus,
    Multiply,
    Divide,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    Equal,
    NotEqual,
    And,
    Or,
}

impl Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            BinOp::Plus => "+",
            BinOp::Minus => "-",
            BinOp::Multiply => "*",
            BinOp::Divide => "/",
            BinOp::Greater => ">",
            BinOp::GreaterEqual => ">=",
            BinOp::Less => "<",
            BinOp::LessEqual => "<=",
            BinOp::Equal => "==",
            BinOp::NotEqual => "!=",
            BinOp::And => "&&",
            BinOp::Or => "||",
        };
        write!(f, "{}", text)
    }
}

/// The AST: a closed sum type, one variant per construct, each carrying
/// the 1-based source line it originates from.
///
/// `Assign` is an unfinished extension: the parser produces it, but the
/// type checker rejects it and the code generator has no rule for it.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Literal {
        value: Literal,
        line: u32,
    },
    Binary {
        left: Box<Node>,
        op: BinOp,
        right: Box<Node>,
        line: u32,
    },
    Grouping {
        expr: Box<Node>,
        line: u32,
    },
    ExprStmt {
        expr: Box<Node>,
        line: u32,
    },
    Block {
        stmts: Vec<Node>,
        line: u32,
    },
    If {
        cond: Box<Node>,
        then: Box<Node>,
        else_: Option<Box<Node>>,
        is_expr: bool,
        line: u32,
    },
    Ident {
        name: String,
        line: u32,
    },
    Let {
        name: String,
        init: Box<Node>,
        line: u32,
    },
    Assign {
        name: String,
        value: Box<Node>,
        line: u32,
    },
}

impl Node {
    /// The source line the node originates from.
    pub fn line(&self) -> u32 {
        match self {
            Node::Literal { line, .. }
            | Node::Binary { line, .. }
            | Node::Grouping { line, .. }
            | Node::ExprStmt { line, .. }
            | Node::Block { line, .. }
            | Node::If { line, .. }
            | Node::Ident { line, .. }
            | Node::Let { line, .. }
            | Node::Assign { line, .. } => *line,
        }
    }

    /// Short name of the variant, used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Node::Literal { .. } => "Literal",
            Node::Binary { .. } => "Binary",
            Node::Grouping { .. } => "Grouping",
            Node::ExprStmt { .. } => "ExprStmt",
            Node::Block { .. } => "Block",
            Node::If { .. } => "If",
            Node::Ident { .. } => "Ident",
            Node::Let { .. } => "Let",
            Node::Assign { .. } => "Assign",
        }
    }
}
