use std::fs;

use prefixer::{
    ast::{BinaryOperator, Expr},
    converter::{
        lexer::{Token, tokenize},
        reducer::reduce,
    },
    error::ParseError,
    get_result, to_prefix, to_prefix_reduced,
};
use walkdir::WalkDir;

#[test]
fn fixture_cases_match() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "in"))
    {
        let path = entry.path();
        let input =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (reduce, extension) in [(false, "out"), (true, "reduced.out")] {
            let expected_path = path.with_extension(extension);
            let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                               panic!("Failed to read {expected_path:?}: {e}")
                           });
            let expected: Vec<&str> = expected.lines().collect();
            let actual: Vec<String> =
                input.lines()
                     .map(|line| {
                         get_result(line.trim(), reduce).unwrap_or_else(|e| {
                                                            panic!("{path:?}: '{line}' failed: {e}")
                                                        })
                     })
                     .collect();

            assert_eq!(actual, expected, "{expected_path:?} does not match");
            count += 1;
        }
    }

    assert!(count > 0, "No fixture cases found in tests/cases");
}

fn assert_prefix(src: &str, expected: &str) {
    match get_result(src, false) {
        Ok(actual) => assert_eq!(actual, expected, "prefix of '{src}'"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_reduced(src: &str, expected: &str) {
    match get_result(src, true) {
        Ok(actual) => assert_eq!(actual, expected, "reduced prefix of '{src}'"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str) -> ParseError {
    match to_prefix(src) {
        Ok(expr) => panic!("'{src}' parsed to {expr:?} but was expected to fail"),
        Err(e) => e,
    }
}

fn num(value: i64) -> Expr {
    Expr::number(value)
}

fn id(name: char) -> Expr {
    Expr::identifier(name)
}

fn bin(op: char, left: Expr, right: Expr) -> Expr {
    let op = match op {
        '+' => BinaryOperator::Add,
        '-' => BinaryOperator::Sub,
        '*' => BinaryOperator::Mul,
        '/' => BinaryOperator::Div,
        other => panic!("not an operator: {other}"),
    };
    Expr::binary(op, left, right)
}

#[test]
fn tokenizer_coalesces_digits_and_drops_noise() {
    assert_eq!(tokenize("999"), vec![Token::Number(999)]);
    assert_eq!(tokenize("  12ab "),
               vec![Token::Number(12), Token::Identifier('a'), Token::Identifier('b')]);
    assert_eq!(tokenize("A + b; 1"),
               vec![Token::Plus, Token::Identifier('b'), Token::Number(1)]);
    assert_eq!(tokenize("(x*y)/z-1"),
               vec![Token::LParen,
                    Token::Identifier('x'),
                    Token::Star,
                    Token::Identifier('y'),
                    Token::RParen,
                    Token::Slash,
                    Token::Identifier('z'),
                    Token::Minus,
                    Token::Number(1)]);
    assert!(tokenize(" \t ").is_empty());
}

#[test]
fn tokenizer_marks_numbers_too_large_for_i64() {
    assert_eq!(tokenize("99999999999999999999 + 1"),
               vec![Token::NumberTooLarge, Token::Plus, Token::Number(1)]);
    assert_eq!(tokenize("9223372036854775807"), vec![Token::Number(i64::MAX)]);
}

#[test]
fn oversized_number_is_rejected() {
    assert_eq!(assert_failure("( 99999999999999999999 )"),
               ParseError::NumberTooLarge { column: 2 });
    assert!(get_result("( 99999999999999999999 )", true).is_err());
    assert_eq!(assert_failure("99999999999999999999 * 2"),
               ParseError::NumberTooLarge { column: 0 });
    assert_eq!(assert_failure("1 + 99999999999999999999").to_string(),
               "Number at column 4 is too large.");
}

#[test]
fn oversized_number_stops_the_expression_like_any_trailing_token() {
    assert_prefix("a 99999999999999999999 + b", "a");
}

#[test]
fn single_operands() {
    assert_eq!(to_prefix("10").unwrap(), Some(num(10)));
    assert_eq!(to_prefix("( z )").unwrap(), Some(id('z')));
    assert_eq!(to_prefix("( ( ( 1 ) ) )").unwrap(), Some(num(1)));
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(to_prefix("a + b * c").unwrap(),
               Some(bin('+', id('a'), bin('*', id('b'), id('c')))));
    assert_eq!(to_prefix("a * b + c").unwrap(),
               Some(bin('+', bin('*', id('a'), id('b')), id('c'))));
    assert_eq!(to_prefix("a - b / c * d").unwrap(),
               Some(bin('-', id('a'), bin('*', bin('/', id('b'), id('c')), id('d')))));
}

#[test]
fn operators_are_left_associative() {
    assert_eq!(to_prefix("a + b + c").unwrap(),
               Some(bin('+', bin('+', id('a'), id('b')), id('c'))));
    assert_eq!(to_prefix("a * b * c").unwrap(),
               Some(bin('*', bin('*', id('a'), id('b')), id('c'))));
    assert_eq!(to_prefix("a - b + c").unwrap(),
               Some(bin('+', bin('-', id('a'), id('b')), id('c'))));
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(to_prefix("a * (b + c)").unwrap(),
               Some(bin('*', id('a'), bin('+', id('b'), id('c')))));
    assert_prefix("5 + ( 3 + 2 )", "+ 5 + 3 2");
    assert_prefix("( 3 * 2 ) * 5", "* * 3 2 5");
}

#[test]
fn concrete_scenarios() {
    assert_eq!(to_prefix("2 * 5 + 1").unwrap(),
               Some(bin('+', bin('*', num(2), num(5)), num(1))));
    assert_eq!(to_prefix("3 * x + (9 + y) / 4").unwrap(),
               Some(bin('+',
                        bin('*', num(3), id('x')),
                        bin('/', bin('+', num(9), id('y')), num(4)))));
    assert_eq!(to_prefix_reduced("5 * (3 + 2)").unwrap(), Some(num(25)));
    assert_eq!(to_prefix_reduced("a + (2 * 3)").unwrap(),
               Some(bin('+', id('a'), num(6))));
}

#[test]
fn empty_input_is_absent() {
    for src in ["", "   ", "()", "(())", "( ( ) )", ")"] {
        assert_eq!(to_prefix(src).unwrap(), None, "'{src}'");
        assert_eq!(to_prefix_reduced(src).unwrap(), None, "'{src}'");
    }
    assert_prefix("()", "");
}

#[test]
fn trailing_tokens_are_ignored() {
    assert_prefix("1 2", "1");
    assert_prefix("a + b c * d", "+ a b");
    assert_prefix("(a) )", "a");
}

#[test]
fn unclosed_group_is_unbalanced() {
    assert_eq!(assert_failure("(1"), ParseError::UnbalancedParenthesis { column: 0 });
    assert_eq!(assert_failure("2 * (a + (b - 1)"),
               ParseError::UnbalancedParenthesis { column: 4 });
    assert_eq!(assert_failure("("), ParseError::UnbalancedParenthesis { column: 0 });
    assert_eq!(assert_failure("(1 2)"), ParseError::UnbalancedParenthesis { column: 0 });
}

#[test]
fn operator_without_operand_is_rejected() {
    assert_eq!(assert_failure("1 +"),
               ParseError::MissingOperand { operator: '+', column: 2 });
    assert_eq!(assert_failure("() * 2"),
               ParseError::MissingOperand { operator: '*', column: 3 });
    assert_eq!(assert_failure("(a - )"),
               ParseError::MissingOperand { operator: '-', column: 3 });
}

#[test]
fn operator_in_operand_position_is_rejected() {
    assert_eq!(assert_failure("1 + + 2"),
               ParseError::UnexpectedToken { token: "+".to_string(),
                                             column: 4 });
    assert_eq!(assert_failure("* 2"),
               ParseError::UnexpectedToken { token: "*".to_string(),
                                             column: 0 });
}

#[test]
fn errors_render_with_their_column() {
    let error = assert_failure("a + (b");
    assert_eq!(error.column(), 4);
    assert_eq!(error.to_string(),
               "Unbalanced parentheses: '(' at column 4 is never closed.");
}

#[test]
fn reduce_folds_constants() {
    assert_reduced("999", "999");
    assert_reduced("1 + 2 + 3", "6");
    assert_reduced("3 * 2 * 4", "24");
    assert_reduced("(3 + 2) * 5", "25");
    assert_reduced("1 - 5", "-4");
}

#[test]
fn reduce_keeps_identifiers() {
    assert_reduced("z", "z");
    assert_reduced("a - 1", "- a 1");
    assert_reduced("1 / a", "/ 1 a");
    assert_reduced("( 2 * 3 ) + a", "+ 6 a");
    assert_reduced("a * 2 * 3", "* * a 2 3");
    assert_reduced("2 * 3 * a", "* 6 a");
}

#[test]
fn division_truncates_toward_zero() {
    assert_reduced("7 / 2", "3");
    assert_reduced("(1 - 8) / 2", "-3");
    assert_reduced("1 / 3", "0");
}

#[test]
fn undefined_folds_are_left_in_place() {
    assert_reduced("4 / 0", "/ 4 0");
    assert_reduced("(2 + 2) / (1 - 1)", "/ 4 0");
    assert_reduced("9223372036854775807 + 1", "+ 9223372036854775807 1");
}

#[test]
fn reduce_is_idempotent_on_scenarios() {
    for src in ["3 * x + (9 + y) / 4", "a + (2 * 3)", "4 / 0", "5 * (3 + 2)"] {
        let once = reduce(to_prefix(src).unwrap().unwrap());
        assert_eq!(reduce(once.clone()), once, "'{src}'");
    }
}
