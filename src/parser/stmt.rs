use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Node, Error> {
    if let Some(&stmt_fn) = parser.get_stmt_lookup().get(&parser.current_token_kind()) {
        return stmt_fn(parser);
    }

    // `ident = expr ;` is the unfinished assignment extension. Parsed
    // here so later stages can reject it with a precise line.
    if parser.current_token_kind() == TokenKind::Identifier
        && parser.peek_kind(1) == TokenKind::Assignment
    {
        return parse_assign_stmt(parser);
    }

    let expr = parse_expr(parser, BindingPower::Default)?;
    let line = expr.line();

    parser.expect(TokenKind::Semicolon)?;

    Ok(Node::ExprStmt {
        expr: Box::new(expr),
        line,
    })
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let start_token = parser.advance().clone();

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().lexeme(),
            message: String::from("expected identifier during variable declaration"),
        },
        parser.get_position(),
    );
    let name = parser
        .expect_error(TokenKind::Identifier, Some(error))?
        .lexeme();

    parser.expect(TokenKind::Assignment)?;
    let init = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Node::Let {
        name,
        init: Box::new(init),
        line: start_token.line,
    })
}

pub fn parse_assign_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let ident = parser.advance().clone();
    parser.advance(); // =

    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Node::Assign {
        name: ident.lexeme(),
        value: Box::new(value),
        line: ident.line,
    })
}

/// `if` at statement position. A braced body makes it the statement
/// form (`else` optional, branch is any statement, no terminator);
/// otherwise `do` is required and the expression form is parsed, wrapped
/// into an expression statement, and terminated by `;`.
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let line = parser.advance().line;

    let cond = parse_expr(parser, BindingPower::Default)?;

    if parser.current_token_kind() != TokenKind::OpenCurly {
        parser.expect(TokenKind::Do)?;
        let then = parse_expr(parser, BindingPower::Default)?;
        parser.expect(TokenKind::Else)?;
        let else_ = parse_expr(parser, BindingPower::Default)?;
        parser.expect(TokenKind::Semicolon)?;

        let if_node = Node::If {
            cond: Box::new(cond),
            then: Box::new(then),
            else_: Some(Box::new(else_)),
            is_expr: true,
            line,
        };
        return Ok(Node::ExprStmt {
            expr: Box::new(if_node),
            line,
        });
    }

    let then = parse_block_stmt(parser)?;

    let else_ = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    Ok(Node::If {
        cond: Box::new(cond),
        then: Box::new(then),
        else_,
        is_expr: false,
        line,
    })
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let line = parser.advance().line;

    let mut statements = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly {
        statements.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Node::Block {
        stmts: statements,
        line,
    })
}
