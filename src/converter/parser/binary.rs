use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    converter::{
        lexer::{Spanned, Token},
        parser::{core::ParseResult, operand::parse_operand},
    },
    error::ParseError,
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Returns
/// The parsed tree, or `None` if the chain is a single absent operand.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Expr>>
    where I: Iterator<Item = &'a Spanned>
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some(&&(token, column)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && op.is_additive()
        {
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Some(combine(op, column, left, right)?);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*` and `/`.
///
/// The rule is: `multiplicative := operand (("*" | "/") operand)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Expr>>
    where I: Iterator<Item = &'a Spanned>
{
    let mut left = parse_operand(tokens)?;
    loop {
        if let Some(&&(token, column)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && op.is_multiplicative()
        {
            tokens.next();
            let right = parse_operand(tokens)?;
            left = Some(combine(op, column, left, right)?);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Joins two operands under `op`, failing if either one is absent.
fn combine(op: BinaryOperator,
           column: usize,
           left: Option<Expr>,
           right: Option<Expr>)
           -> ParseResult<Expr> {
    match (left, right) {
        (Some(left), Some(right)) => Ok(Expr::binary(op, left, right)),
        _ => Err(ParseError::MissingOperand { operator: op.symbol(),
                                              column }),
    }
}

/// Maps a token to its corresponding binary operator.
///
/// # Example
/// ```
/// use prefixer::{
///     ast::BinaryOperator,
///     converter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(Token::Slash), Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
