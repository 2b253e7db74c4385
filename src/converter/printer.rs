use crate::ast::Expr;

/// Renders a parse result as prefix text.
///
/// Operators come before their operands, separated by single spaces, with no
/// parentheses. An absent expression renders as the empty string.
///
/// # Example
/// ```
/// use prefixer::{converter::printer::stringify, to_prefix};
///
/// let tree = to_prefix("3 * x + (9 + y) / 4").unwrap();
/// assert_eq!(stringify(tree.as_ref()), "+ * 3 x / + 9 y 4");
/// assert_eq!(stringify(None), "");
/// ```
#[must_use]
pub fn stringify(expr: Option<&Expr>) -> String {
    expr.map_or_else(String::new, ToString::to_string)
}
