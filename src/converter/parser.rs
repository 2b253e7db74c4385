/// Entry points and the top level of the grammar.
pub mod core;

/// Additive and multiplicative operator chains.
pub mod binary;

/// Numbers, identifiers and parenthesized groups.
pub mod operand;

pub use self::core::{ParseResult, parse};
