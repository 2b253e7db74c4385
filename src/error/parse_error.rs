#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing an expression.
pub enum ParseError {
    /// An opening parenthesis `(` was not followed by its closing `)`.
    UnbalancedParenthesis {
        /// Column of the unmatched opening parenthesis.
        column: usize,
    },
    /// An operator is missing its left or right operand, as in `1 +` or
    /// `() * 2`.
    MissingOperand {
        /// The operator lacking an operand.
        operator: char,
        /// Column of the operator.
        column:   usize,
    },
    /// An integer literal does not fit in an `i64`.
    NumberTooLarge {
        /// Column of the literal's first digit.
        column: usize,
    },
    /// Found a token where an operand was required, as in `1 + * 2`.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// Column of the token.
        column: usize,
    },
}

impl ParseError {
    /// Column of the input where the error was detected.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnbalancedParenthesis { column }
            | Self::MissingOperand { column, .. }
            | Self::NumberTooLarge { column }
            | Self::UnexpectedToken { column, .. } => *column,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnbalancedParenthesis { column } => write!(f,
                                                             "Unbalanced parentheses: '(' at column {column} is never closed."),

            Self::MissingOperand { operator, column } => {
                write!(f, "Operator '{operator}' at column {column} is missing an operand.")
            },

            Self::NumberTooLarge { column } => {
                write!(f, "Number at column {column} is too large.")
            },

            Self::UnexpectedToken { token, column } => {
                write!(f, "Unexpected token '{token}' at column {column}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
