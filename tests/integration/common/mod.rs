//! Общие утилиты для интеграционных тестов

use rand::{rngs::StdRng, RngExt, SeedableRng};
use sqllex::{tokenize, Dialect, TokenKind, TokenList};

/// Фрагменты, из которых собираются случайные SQL тексты
const FRAGMENTS: &[&str] = &[
    "SELECT", "FROM", "WHERE", "a", "b.c", "1", "-2.5", "1E", "+", "-", "10", "<=", "<>",
    "||", "::", ":=", "(", ")", ",", ";", "'str'", "'it''s'", "'open", "\"q\"", "`bt`",
    "[br]", "-- line", "/* block */", "/* open", "#x", "?", ":p", "$1", "<<lbl>>", "lbl:",
    "\\", "é", "¬=", "@", "%", "*", "\n", "\r\n", "\t", " ", "  ",
];

/// Детерминированный генератор случайных SQL текстов
pub struct SqlGenerator {
    rng: StdRng,
}

impl SqlGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Склеивает `parts` случайных фрагментов, иногда без пробелов
    pub fn generate(&mut self, parts: usize) -> String {
        let mut text = String::new();
        for _ in 0..parts {
            let fragment = FRAGMENTS[self.rng.random_range(0..FRAGMENTS.len())];
            text.push_str(fragment);
            if self.rng.random_range(0..3) == 0 {
                text.push(' ');
            }
        }
        text
    }
}

/// Значения токенов
pub fn values(tokens: &TokenList) -> Vec<String> {
    tokens.iter().map(|t| t.value.clone()).collect()
}

/// Пары (вид, значение)
pub fn lex(input: &str, dialect: Dialect) -> Vec<(TokenKind, String)> {
    tokenize(input, dialect)
        .iter()
        .map(|t| (t.kind, t.value.clone()))
        .collect()
}

pub fn tok(kind: TokenKind, value: &str) -> (TokenKind, String) {
    (kind, value.to_string())
}

/// Первый токен заданного вида
pub fn first_of(tokens: &TokenList, kind: TokenKind) -> Option<String> {
    tokens
        .iter()
        .find(|t| t.kind == kind)
        .map(|t| t.value.clone())
}
