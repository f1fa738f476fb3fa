use crate::{
    ast::ast::{BinOp, Literal, Node},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{TokenKind, TokenValue},
    Position,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Node, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    if token_kind == TokenKind::EOF {
        return Err(Error::new(ErrorImpl::UnexpectedEndOfInput, Position::Eof));
    }
    let Some(&nud_fn) = parser.get_nud_lookup().get(&token_kind) else {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().lexeme(),
            },
            parser.get_position(),
        ));
    };

    let mut left = nud_fn(parser)?;

    // While the current token binds tighter than `bp`, keep folding into
    // the left-hand side. Same-tier operators do not bind tighter, which
    // is what makes every binary tier left-associative.
    while *parser
        .get_bp_lookup()
        .get(&parser.current_token_kind())
        .unwrap_or(&BindingPower::Default)
        > bp
    {
        let token_kind = parser.current_token_kind();
        let Some(&led_fn) = parser.get_led_lookup().get(&token_kind) else {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: parser.current_token().lexeme(),
                },
                parser.get_position(),
            ));
        };

        let next_bp = parser.get_bp_lookup()[&token_kind];
        left = led_fn(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Node, Error> {
    let token = parser.advance().clone();
    let line = token.line;

    match (token.kind, token.value) {
        (TokenKind::Int, Some(TokenValue::Int(value))) => Ok(Node::Literal {
            value: Literal::Int(value),
            line,
        }),
        (TokenKind::Float, Some(TokenValue::Float(value))) => Ok(Node::Literal {
            value: Literal::Float(value),
            line,
        }),
        (TokenKind::String, Some(TokenValue::Str(text))) => Ok(Node::Literal {
            value: Literal::Str(text),
            line,
        }),
        (TokenKind::True, _) => Ok(Node::Literal {
            value: Literal::Bool(true),
            line,
        }),
        (TokenKind::False, _) => Ok(Node::Literal {
            value: Literal::Bool(false),
            line,
        }),
        (TokenKind::Identifier, Some(TokenValue::Str(name))) => Ok(Node::Ident { name, line }),
        (kind, _) => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: kind.to_string(),
            },
            Position::Line(line),
        )),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Node, bp: BindingPower) -> Result<Node, Error> {
    let operator_token = parser.advance().clone();
    let op = bin_op_for(operator_token.kind).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnexpectedToken {
                token: operator_token.lexeme(),
            },
            Position::Line(operator_token.line),
        )
    })?;

    let right = parse_expr(parser, bp)?;

    Ok(Node::Binary {
        left: Box::new(left),
        op,
        right: Box::new(right),
        line: operator_token.line,
    })
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Node, Error> {
    let line = parser.advance().line;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(Node::Grouping {
        expr: Box::new(expr),
        line,
    })
}

/// Expression-if at the conditional tier:
/// `if <cond> do <expr> else <expr>` with both branches mandatory.
pub fn parse_conditional_expr(parser: &mut Parser) -> Result<Node, Error> {
    let line = parser.advance().line;

    let cond = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Do)?;
    let then = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Else)?;
    let else_ = parse_expr(parser, BindingPower::Default)?;

    Ok(Node::If {
        cond: Box::new(cond),
        then: Box::new(then),
        else_: Some(Box::new(else_)),
        is_expr: true,
        line,
    })
}

fn bin_op_for(kind: TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::Plus => Some(BinOp::Plus),
        TokenKind::Dash => Some(BinOp::Minus),
        TokenKind::Star => Some(BinOp::Multiply),
        TokenKind::Slash => Some(BinOp::Divide),
        TokenKind::Greater => Some(BinOp::Greater),
        TokenKind::GreaterEquals => Some(BinOp::GreaterEqual),
        TokenKind::Less => Some(BinOp::Less),
        TokenKind::LessEquals => Some(BinOp::LessEqual),
        TokenKind::Equals => Some(BinOp::Equal),
        TokenKind::NotEquals => Some(BinOp::NotEqual),
        TokenKind::And => Some(BinOp::And),
        TokenKind::Or => Some(BinOp::Or),
        _ => None,
    }
}
