//! Общие утилиты для тестирования

use crate::dialects::Dialect;
use crate::parser::{tokenize, TokenKind, TokenList};

/// Возвращает значения токенов
pub fn values(tokens: &TokenList) -> Vec<&str> {
    tokens.iter().map(|t| t.value.as_str()).collect()
}

/// Возвращает виды токенов
pub fn kinds(tokens: &TokenList) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

/// Токенизирует текст и возвращает пары (вид, значение)
pub fn lex(input: &str, dialect: Dialect) -> Vec<(TokenKind, String)> {
    tokenize(input, dialect)
        .iter()
        .map(|t| (t.kind, t.value.clone()))
        .collect()
}

/// Короткий конструктор ожидаемой пары
pub fn tok(kind: TokenKind, value: &str) -> (TokenKind, String) {
    (kind, value.to_string())
}
