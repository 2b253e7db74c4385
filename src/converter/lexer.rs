use logos::Logos;

/// Represents a lexical token of an infix arithmetic expression.
///
/// Whitespace is skipped by the lexer. Any character that matches none of the
/// variants (upper-case letters, punctuation, ...) is reported by `logos` as an
/// error slice, which [`tokenize`] and [`tokenize_spanned`] drop.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Integer literal tokens, such as `42`. A run of digits always becomes a
    /// single token; the digit rule lives on [`Token::NumberTooLarge`].
    Number(i64),
    /// A run of digits that does not fit in an `i64`.
    #[regex(r"[0-9]+", lex_number)]
    NumberTooLarge,
    /// Single lower-case letter identifiers, such as `x`.
    #[regex(r"[a-z]", parse_identifier)]
    Identifier(char),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs, feeds and line breaks.
    #[regex(r"[ \t\f\r\n]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::NumberTooLarge => write!(f, "<number too large>"),
            Self::Identifier(c) => write!(f, "{c}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Ignored => Ok(()),
        }
    }
}

/// A token paired with the byte column of its first character.
pub type Spanned = (Token, usize);

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Token::Number`: The parsed value.
/// - `Token::NumberTooLarge`: If the digit run does not fit in an `i64`.
fn lex_number(lex: &logos::Lexer<Token>) -> Token {
    lex.slice().parse().map_or(Token::NumberTooLarge, Token::Number)
}

fn parse_identifier(lex: &logos::Lexer<Token>) -> Option<char> {
    lex.slice().chars().next()
}

/// Splits a line of text into tokens, remembering where each one starts.
///
/// Never fails: slices the lexer cannot match are left out of the result, and
/// a digit run too large for an `i64` becomes [`Token::NumberTooLarge`] so the
/// parser can report it.
///
/// # Example
/// ```
/// use prefixer::converter::lexer::{Token, tokenize_spanned};
///
/// let tokens = tokenize_spanned("12 * x");
/// assert_eq!(tokens, vec![(Token::Number(12), 0), (Token::Star, 3), (Token::Identifier('x'), 5)]);
/// ```
#[must_use]
pub fn tokenize_spanned(source: &str) -> Vec<Spanned> {
    Token::lexer(source).spanned()
                        .filter_map(|(token, span)| token.ok().map(|tok| (tok, span.start)))
                        .collect()
}

/// Splits a line of text into tokens.
///
/// Digit runs are coalesced into a single [`Token::Number`]; characters that
/// are not part of the grammar are silently dropped.
///
/// # Example
/// ```
/// use prefixer::converter::lexer::{Token, tokenize};
///
/// assert_eq!(tokenize("(10 + b) !"),
///            vec![Token::LParen,
///                 Token::Number(10),
///                 Token::Plus,
///                 Token::Identifier('b'),
///                 Token::RParen]);
/// assert!(tokenize("").is_empty());
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_spanned(source).into_iter()
                            .map(|(token, _)| token)
                            .collect()
}
