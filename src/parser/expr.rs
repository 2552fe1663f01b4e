use crate::{
    ast::ast::{BinaryOperator, Node},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{parser::Parser, stmt::parse_variable_or_call};

/// Lowest precedence level: `term (('+' | '-') term)*`, left associative.
///
/// A string or boolean literal is a complete expression on its own and does
/// not take part in arithmetic.
pub fn parse_expr(parser: &mut Parser) -> Result<Node, Error> {
    parser.enter_nested()?;
    let expr = parse_sum(parser);
    parser.leave_nested();

    expr
}

fn parse_sum(parser: &mut Parser) -> Result<Node, Error> {
    match parser.current_token_kind() {
        TokenKind::String => return parse_string(parser),
        TokenKind::Bool => return parse_boolean(parser),
        _ => {}
    }

    let mut left = parse_term(parser)?;

    while matches!(parser.current_token_kind(), TokenKind::Plus | TokenKind::Minus) {
        left = parse_binary_tail(parser, left, parse_term)?;
    }

    Ok(left)
}

/// `factor (('*' | '/') factor)*`, left associative.
pub fn parse_term(parser: &mut Parser) -> Result<Node, Error> {
    let mut left = parse_factor(parser)?;

    while matches!(parser.current_token_kind(), TokenKind::Mul | TokenKind::Div) {
        left = parse_binary_tail(parser, left, parse_factor)?;
    }

    Ok(left)
}

// Consumes the operator at the cursor and folds `left op operand` into one node.
fn parse_binary_tail(
    parser: &mut Parser,
    left: Node,
    operand: fn(&mut Parser) -> Result<Node, Error>,
) -> Result<Node, Error> {
    let operator_kind = parser.current_token_kind();
    let operator = BinaryOperator::from_token_kind(operator_kind)
        .ok_or_else(|| parser.unexpected("operator"))?;
    parser.eat(operator_kind)?;

    let right = operand(parser)?;

    Ok(Node::binary(operator, left, right))
}

/// Integer literal, identifier (or call), or a parenthesised expression.
pub fn parse_factor(parser: &mut Parser) -> Result<Node, Error> {
    match parser.current_token_kind() {
        TokenKind::Int => parse_number(parser),
        TokenKind::Id => parse_variable_or_call(parser),
        TokenKind::LParen => {
            parser.eat(TokenKind::LParen)?;
            let expr = parse_expr(parser)?;
            parser.eat(TokenKind::RParen)?;

            Ok(expr)
        }
        _ => Err(Error::new(
            ErrorImpl::ExpectedExpression {
                token: parser.current_token_text(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_number(parser: &mut Parser) -> Result<Node, Error> {
    let token = parser.eat(TokenKind::Int)?;

    token
        .value
        .parse::<i64>()
        .map(Node::IntLiteral)
        .map_err(|_| {
            Error::new(
                ErrorImpl::NumberParseError {
                    token: token.value.clone(),
                },
                token.span.start.clone(),
            )
        })
}

pub fn parse_string(parser: &mut Parser) -> Result<Node, Error> {
    let token = parser.eat(TokenKind::String)?;

    Ok(Node::StringLiteral(token.value))
}

pub fn parse_boolean(parser: &mut Parser) -> Result<Node, Error> {
    let token = parser.eat(TokenKind::Bool)?;

    Ok(Node::BoolLiteral(token.value == "true"))
}
