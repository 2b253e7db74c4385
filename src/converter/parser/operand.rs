use std::iter::Peekable;

use crate::{
    ast::Expr,
    converter::{
        lexer::{Spanned, Token},
        parser::core::{ParseResult, parse_expression},
    },
    error::ParseError,
};

/// Parses a single operand.
///
/// Grammar:
/// ```text
///     operand := <end of input> | ")"
///              | "(" expression ")"
///              | number
///              | identifier
/// ```
/// End of input and a closing parenthesis yield `None` without consuming
/// anything; this is how empty groups such as `()` collapse to nothing.
///
/// # Errors
/// - `UnbalancedParenthesis` if a group is not followed by `)`.
/// - `NumberTooLarge` if the literal does not fit in an `i64`.
/// - `UnexpectedToken` if the next token is an operator.
pub fn parse_operand<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Expr>>
    where I: Iterator<Item = &'a Spanned>
{
    let Some(&&(token, column)) = tokens.peek() else {
        return Ok(None);
    };

    match token {
        Token::RParen => Ok(None),
        Token::LParen => {
            tokens.next();
            parse_grouping(tokens, column)
        },
        Token::Number(value) => {
            tokens.next();
            Ok(Some(Expr::number(value)))
        },
        Token::NumberTooLarge => Err(ParseError::NumberTooLarge { column }),
        Token::Identifier(name) => {
            tokens.next();
            Ok(Some(Expr::identifier(name)))
        },
        tok => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                 column }),
    }
}

/// Parses the inside of a group whose `(` at `column` was just consumed.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, column: usize) -> ParseResult<Option<Expr>>
    where I: Iterator<Item = &'a Spanned>
{
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::UnbalancedParenthesis { column }),
    }
}
