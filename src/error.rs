/// Parsing errors.
///
/// Defines every error the parser can raise. Tokenizing never fails and
/// reducing never fails, so this is the only error type of the crate.
pub mod parse_error;

pub use parse_error::ParseError;
