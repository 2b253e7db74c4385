//! # prefixer
//!
//! prefixer converts infix arithmetic expressions into prefix notation.
//! It tokenizes a line of text, parses it into an expression tree that honors
//! operator precedence, and can fold constant subexpressions before printing.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    converter::{
        lexer::tokenize_spanned,
        parser::{ParseResult, parse},
        printer::stringify,
        reducer::reduce,
    },
};

/// Defines the expression tree.
///
/// This module declares the `Expr` enum, its leaf `Operand`s and the
/// `BinaryOperator`s joining them. Trees are built by the parser, rewritten by
/// the reducer and rendered by their `Display` implementation.
pub mod ast;
/// Orchestrates the conversion of a line of text.
///
/// # Responsibilities
/// - Tokenizes raw text.
/// - Parses tokens into an expression tree.
/// - Folds constant subtrees and renders trees in prefix notation.
pub mod converter;
/// Provides the error type raised while parsing.
///
/// Errors carry the column where the problem was detected so callers can
/// point at it.
pub mod error;

/// Parses a line of infix text into an expression tree.
///
/// Returns `Ok(None)` for a line with no expression, such as `""` or `"()"`.
///
/// # Example
/// ```
/// use prefixer::{ast::{BinaryOperator, Expr}, to_prefix};
///
/// let tree = to_prefix("2 * 5 + 1").unwrap();
/// let expected = Expr::binary(BinaryOperator::Add,
///                             Expr::binary(BinaryOperator::Mul, Expr::number(2), Expr::number(5)),
///                             Expr::number(1));
/// assert_eq!(tree, Some(expected));
/// ```
pub fn to_prefix(line: &str) -> ParseResult<Option<Expr>> {
    parse(&tokenize_spanned(line))
}

/// Parses a line of infix text and folds its constant subtrees.
///
/// # Example
/// ```
/// use prefixer::to_prefix_reduced;
///
/// let tree = to_prefix_reduced("(3 + 2) * 5").unwrap();
/// assert_eq!(tree.and_then(|t| t.as_number()), Some(25));
/// ```
pub fn to_prefix_reduced(line: &str) -> ParseResult<Option<Expr>> {
    Ok(to_prefix(line)?.map(reduce))
}

/// Returns the prefix text for a single line of input.
///
/// When `reduce` is set, constant subexpressions are folded first. A line
/// with no expression produces an empty string.
///
/// # Errors
/// Returns the parse error if the line is malformed.
///
/// # Examples
/// ```
/// use prefixer::get_result;
///
/// assert_eq!(get_result("a * (b + c)", false).unwrap(), "* a + b c");
/// assert_eq!(get_result("a + 1 * 2", true).unwrap(), "+ a 2");
/// assert_eq!(get_result("", true).unwrap(), "");
///
/// // The group is never closed.
/// assert!(get_result("(1 + 2", false).is_err());
/// ```
pub fn get_result(line: &str, reduce: bool) -> ParseResult<String> {
    let expr = if reduce {
        to_prefix_reduced(line)?
    } else {
        to_prefix(line)?
    };
    Ok(stringify(expr.as_ref()))
}
