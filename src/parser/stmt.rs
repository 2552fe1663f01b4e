use tracing::debug;

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// `statement (';' statement)*`. Empty statements are dropped; at least one
/// statement must remain.
pub fn parse_statement_sequence(parser: &mut Parser) -> Result<Node, Error> {
    let start = parser.get_position();
    let mut body = Vec::new();

    if let Some(statement) = parse_statement(parser)? {
        debug!(kind = statement.kind_name(), "parsed statement");
        body.push(statement);
    }

    while parser.current_token_kind() == TokenKind::Semi {
        parser.eat(TokenKind::Semi)?;

        if let Some(statement) = parse_statement(parser)? {
            debug!(kind = statement.kind_name(), "parsed statement");
            body.push(statement);
        }
    }

    if body.is_empty() {
        return Err(Error::new(ErrorImpl::EmptyProgram, start));
    }

    Ok(Node::StatementSequence(body))
}

/// Returns `None` for an empty statement (`;` or end of input).
pub fn parse_statement(parser: &mut Parser) -> Result<Option<Node>, Error> {
    match parser.current_token_kind() {
        TokenKind::Id => Ok(Some(parse_identifier_statement(parser)?)),
        TokenKind::Semi | TokenKind::EOF => Ok(None),
        _ => Err(parser.unexpected(&TokenKind::Id.to_string())),
    }
}

pub fn parse_identifier_statement(parser: &mut Parser) -> Result<Node, Error> {
    if parser.current_token().value == "var" {
        parse_variable_definition(parser)
    } else {
        parse_variable_or_call(parser)
    }
}

/// `var IDENT = expr`
pub fn parse_variable_definition(parser: &mut Parser) -> Result<Node, Error> {
    parser.eat(TokenKind::Id)?;
    let name = parser.eat(TokenKind::Id)?.value;
    parser.eat(TokenKind::Equals)?;
    let value = parse_expr(parser)?;

    Ok(Node::definition(name, value))
}

/// An identifier, or a call when `(` follows it.
pub fn parse_variable_or_call(parser: &mut Parser) -> Result<Node, Error> {
    let name = parser.eat(TokenKind::Id)?.value;

    if parser.current_token_kind() == TokenKind::LParen {
        return parse_function_call(parser);
    }

    Ok(Node::reference(name))
}

/// `'(' [expr (',' expr)*] ')'`, called with the function name as the
/// previously consumed token.
pub fn parse_function_call(parser: &mut Parser) -> Result<Node, Error> {
    let name = parser.prev_token().value.clone();
    parser.eat(TokenKind::LParen)?;

    let mut arguments = Vec::new();

    if parser.current_token_kind() != TokenKind::RParen {
        arguments.push(parse_expr(parser)?);

        while parser.current_token_kind() == TokenKind::Comma {
            parser.eat(TokenKind::Comma)?;
            arguments.push(parse_expr(parser)?);
        }
    }

    parser.eat(TokenKind::RParen)?;

    Ok(Node::call(name, arguments))
}
