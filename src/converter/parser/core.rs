use std::iter::Peekable;

use crate::{
    ast::Expr,
    converter::{lexer::Spanned, parser::binary::parse_additive},
    error::ParseError,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a token sequence into an expression tree.
///
/// Returns `Ok(None)` when there is no expression at all: empty input or
/// parentheses enclosing nothing, such as `()` or `(())`. Tokens left over
/// after a complete expression are ignored.
///
/// # Errors
/// - `UnbalancedParenthesis` if a group is not closed.
/// - `MissingOperand` if an operator lacks an operand.
/// - `UnexpectedToken` if an operator appears where an operand belongs.
///
/// # Example
/// ```
/// use prefixer::converter::{lexer::tokenize_spanned, parser::parse};
///
/// let tree = parse(&tokenize_spanned("a + b * c")).unwrap().unwrap();
/// assert_eq!(tree.to_string(), "+ a * b c");
///
/// assert_eq!(parse(&tokenize_spanned("(())")).unwrap(), None);
/// assert!(parse(&tokenize_spanned("(1")).is_err());
/// ```
pub fn parse(tokens: &[Spanned]) -> ParseResult<Option<Expr>> {
    let mut iter = tokens.iter().peekable();
    parse_expression(&mut iter)
}

/// Parses a full expression.
///
/// It begins at the lowest-precedence level, addition, and descends through
/// the precedence hierarchy.
///
/// Grammar: `expression := additive`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Expr>>
    where I: Iterator<Item = &'a Spanned>
{
    parse_additive(tokens)
}
