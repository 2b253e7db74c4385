use crate::ast::Expr;

/// Folds every subtree whose operands are both numbers into a single number.
///
/// The walk is post-order: children are reduced first, then the node folds
/// if both reduced children are numeric leaves. Identifiers block folding, so
/// the node is kept with its reduced children. Division truncates toward
/// zero. A fold whose result does not exist in `i64` (division by zero,
/// overflow) is skipped, which keeps the function total.
///
/// Reducing an already reduced tree returns it unchanged.
///
/// # Example
/// ```
/// use prefixer::{converter::reducer::reduce, to_prefix};
///
/// let tree = to_prefix("a + (2 * 3)").unwrap().unwrap();
/// assert_eq!(reduce(tree).to_string(), "+ a 6");
///
/// let tree = to_prefix("5 * (3 + 2)").unwrap().unwrap();
/// assert_eq!(reduce(tree).as_number(), Some(25));
/// ```
#[must_use]
pub fn reduce(expr: Expr) -> Expr {
    match expr {
        leaf @ Expr::Leaf(_) => leaf,
        Expr::BinaryOp { op, left, right } => {
            let left = reduce(*left);
            let right = reduce(*right);

            if let (Some(l), Some(r)) = (left.as_number(), right.as_number())
               && let Some(value) = op.apply(l, r)
            {
                return Expr::number(value);
            }

            Expr::binary(op, left, right)
        },
    }
}
