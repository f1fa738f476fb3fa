use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("do", TokenKind::Do);
        map.insert("let", TokenKind::Let);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Int,
    Float,
    String,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Semicolon,
    Comma,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    True,
    False,
    If,
    Else,
    Do,
    Let,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Literal payload carried by value-bearing tokens. Numeric literals
/// store their parsed value; identifiers and strings their text.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Int(i64),
    Float(f64),
    Str(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<TokenValue>,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} ({:?})", self.kind, value),
            None => write!(f, "{} ()", self.kind),
        }
    }
}

impl Token {
    /// Returns the source text of the token: the carried payload for
    /// value-bearing tokens, the fixed lexeme otherwise.
    pub fn lexeme(&self) -> String {
        match &self.value {
            Some(TokenValue::Str(text)) => text.clone(),
            Some(TokenValue::Int(value)) => value.to_string(),
            Some(TokenValue::Float(value)) => value.to_string(),
            None => String::from(match self.kind {
                TokenKind::EOF => "EOF",
                TokenKind::OpenBracket => "[",
                TokenKind::CloseBracket => "]",
                TokenKind::OpenCurly => "{",
                TokenKind::CloseCurly => "}",
                TokenKind::OpenParen => "(",
                TokenKind::CloseParen => ")",
                TokenKind::Assignment => "=",
                TokenKind::Equals => "==",
                TokenKind::Not => "!",
                TokenKind::NotEquals => "!=",
                TokenKind::Less => "<",
                TokenKind::LessEquals => "<=",
                TokenKind::Greater => ">",
                TokenKind::GreaterEquals => ">=",
                TokenKind::Or => "||",
                TokenKind::And => "&&",
                TokenKind::Semicolon => ";",
                TokenKind::Comma => ",",
                TokenKind::Plus => "+",
                TokenKind::Dash => "-",
                TokenKind::Slash => "/",
                TokenKind::Star => "*",
                TokenKind::True => "true",
                TokenKind::False => "false",
                TokenKind::If => "if",
                TokenKind::Else => "else",
                TokenKind::Do => "do",
                TokenKind::Let => "let",
                // Value-bearing kinds always carry a payload.
                TokenKind::Int | TokenKind::Float | TokenKind::String | TokenKind::Identifier => {
                    "<literal>"
                }
            }),
        }
    }
}
