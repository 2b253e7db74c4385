/// The lexer module tokenizes a line of text for further parsing.
///
/// The lexer reads the raw text and produces the numbers, identifiers,
/// operators and parentheses it contains, each tagged with its column.
/// Characters outside the grammar are dropped rather than reported.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// # Responsibilities
/// - Honors operator precedence: `*` and `/` bind tighter than `+` and `-`.
/// - Keeps every operator left-associative.
/// - Reports unbalanced parentheses and operators without operands.
pub mod parser;
/// Renders expression trees in prefix notation.
pub mod printer;
/// Folds constant subtrees of a parsed expression.
pub mod reducer;
