/// A terminal operand of an expression.
///
/// Every leaf of an [`Expr`] holds exactly one of these: either an integer or
/// a single-letter identifier, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// A 64-bit signed integer literal.
    Number(i64),
    /// A single lower-case letter such as `x`.
    Identifier(char),
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(c) => write!(f, "{c}"),
        }
    }
}

/// An expression tree built by the parser.
///
/// Children are owned exclusively by their parent node, so a tree never
/// shares subtrees. The [`Display`](std::fmt::Display) implementation renders
/// the tree in prefix notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A number or identifier.
    Leaf(Operand),
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a numeric leaf.
    #[must_use]
    pub const fn number(value: i64) -> Self {
        Self::Leaf(Operand::Number(value))
    }

    /// Builds an identifier leaf.
    #[must_use]
    pub const fn identifier(name: char) -> Self {
        Self::Leaf(Operand::Identifier(name))
    }

    /// Builds a binary node over two subtrees.
    ///
    /// # Example
    /// ```
    /// use prefixer::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(BinaryOperator::Add, Expr::identifier('a'), Expr::number(1));
    /// assert_eq!(expr.to_string(), "+ a 1");
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Returns the value of a numeric leaf, or `None` for anything else.
    #[must_use]
    pub const fn as_number(&self) -> Option<i64> {
        match self {
            Self::Leaf(Operand::Number(n)) => Some(*n),
            _ => None,
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Leaf(operand) => write!(f, "{operand}"),
            Self::BinaryOp { op, left, right } => write!(f, "{op} {left} {right}"),
        }
    }
}

/// The four supported arithmetic operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// `+` and `-`.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// `*` and `/`.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }

    /// The character this operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Applies the operator to two integers.
    ///
    /// Division truncates toward zero. Returns `None` when the result is not
    /// defined for `i64` (division by zero or overflow).
    ///
    /// # Example
    /// ```
    /// use prefixer::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Div.apply(7, 2), Some(3));
    /// assert_eq!(BinaryOperator::Div.apply(-7, 2), Some(-3));
    /// assert_eq!(BinaryOperator::Div.apply(1, 0), None);
    /// assert_eq!(BinaryOperator::Mul.apply(i64::MAX, 2), None);
    /// ```
    #[must_use]
    pub const fn apply(self, left: i64, right: i64) -> Option<i64> {
        match self {
            Self::Add => left.checked_add(right),
            Self::Sub => left.checked_sub(right),
            Self::Mul => left.checked_mul(right),
            Self::Div => left.checked_div(right),
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
