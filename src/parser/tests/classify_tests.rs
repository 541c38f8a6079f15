//! Тесты для второго прохода: классификация и склейка чисел

use crate::common::test_utils::{kinds, values};
use crate::dialects::Dialect;
use crate::parser::{classify, classify_word, is_numeric, scan, TokenKind, TokenList};

fn pass2(input: &str, dialect: Dialect) -> TokenList {
    let classifier = dialect.classifier();
    let mut raw = scan(input, classifier.quoting());
    classify(&mut raw, classifier)
}

#[test]
fn test_classify_word_precedence() {
    let std_sql = Dialect::StandardSql.classifier();
    assert_eq!(classify_word("select", std_sql), TokenKind::Keyword);
    assert_eq!(classify_word("<>", std_sql), TokenKind::Operator);
    assert_eq!(classify_word("3.14", std_sql), TokenKind::Numeric);
    assert_eq!(classify_word("orders", std_sql), TokenKind::Identifier);
    assert_eq!(classify_word("@@", std_sql), TokenKind::Other);
}

#[test]
fn test_numeric_before_identifier() {
    // В MySQL `1e5` также является допустимым идентификатором
    let mysql = Dialect::MySql.classifier();
    assert_eq!(classify_word("1e5", mysql), TokenKind::Numeric);
    assert_eq!(classify_word("1st", mysql), TokenKind::Identifier);
}

#[test]
fn test_is_numeric() {
    for text in ["1", "-1", "+1.5", ".5", "1.", "1E", "1e10", "1E+10", "1.5e-3", "007"] {
        assert!(is_numeric(text), "{}", text);
    }
    for text in ["", "+", ".", "-.", "1.2.3", "1E5E3", "1e5e", "1E+", "E5", "12a", "1 2", "١"] {
        assert!(!is_numeric(text), "{}", text);
    }
}

#[test]
fn test_exponent_merge() {
    let tokens = pass2("1E+10", Dialect::StandardSql);
    assert_eq!(values(&tokens), vec!["1E+10"]);
    assert_eq!(kinds(&tokens), vec![TokenKind::Numeric]);

    let tokens = pass2("x = 2.5e-3", Dialect::PostgreSql);
    assert_eq!(values(&tokens), vec!["x", "=", "2.5e-3"]);
}

#[test]
fn test_exponent_merge_requires_adjacency() {
    let tokens = pass2("1E +10", Dialect::StandardSql);
    assert_eq!(values(&tokens), vec!["1E", "+", "10"]);
    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Numeric, TokenKind::Operator, TokenKind::Numeric]
    );
}

#[test]
fn test_sign_fold_after_keyword_operator_comma() {
    let tokens = pass2("SELECT -1", Dialect::StandardSql);
    assert_eq!(values(&tokens), vec!["SELECT", "-1"]);
    assert_eq!(tokens.tokens()[1].kind, TokenKind::Numeric);
    assert_eq!(tokens.tokens()[1].leading_whitespace, " ");

    assert_eq!(
        values(&pass2("a = -1", Dialect::StandardSql)),
        vec!["a", "=", "-1"]
    );
    assert_eq!(
        values(&pass2("x, +2", Dialect::StandardSql)),
        vec!["x", ",", "+2"]
    );
}

#[test]
fn test_binary_minus_is_not_folded() {
    assert_eq!(values(&pass2("a-1", Dialect::StandardSql)), vec!["a", "-", "1"]);
    assert_eq!(values(&pass2("a - 1", Dialect::StandardSql)), vec!["a", "-", "1"]);
    assert_eq!(
        values(&pass2("(-1)", Dialect::StandardSql)),
        vec!["(", "-", "1", ")"]
    );
    // Пробел между знаком и числом
    assert_eq!(
        values(&pass2("SELECT - 1", Dialect::StandardSql)),
        vec!["SELECT", "-", "1"]
    );
}

#[test]
fn test_structural_kinds_pass_through() {
    let tokens = pass2("'select' -- from\n/* where */", Dialect::StandardSql);
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::SingleQuoted,
            TokenKind::LineComment,
            TokenKind::BlockComment
        ]
    );
}

#[test]
fn test_pound_comment_normalized() {
    let tokens = pass2("# note\nSELECT 1", Dialect::MariaDb);
    assert_eq!(tokens.tokens()[0].kind, TokenKind::LineComment);
    assert_eq!(tokens.tokens()[0].value, "# note");
    assert_eq!(tokens.tokens()[1].kind, TokenKind::Keyword);
}

#[test]
fn test_trailing_whitespace_moves_out() {
    let tokens = pass2("a \n", Dialect::StandardSql);
    assert_eq!(values(&tokens), vec!["a"]);
    assert_eq!(tokens.trailing_whitespace(), " \n");
    assert_eq!(tokens.to_source(), "a \n");
}

#[test]
fn test_classification_is_idempotent() {
    let inputs = [
        "SELECT -1, +2.5E+3 FROM t WHERE a<=b",
        "x = 1E -5 -- tail\n",
        "a-1 * -b / (-1)",
        "# c\nSELECT `a` FROM b  ",
        "1E+10 + 1e-5",
    ];
    for dialect in Dialect::all() {
        for input in inputs {
            let once = pass2(input, *dialect);
            let twice = classify(&mut once.clone(), dialect.classifier());
            assert_eq!(once, twice, "{} / {:?}", dialect, input);
        }
    }
}
