//! Лексический анализатор SQL для sqllex
//!
//! Токенизация выполняется в три прохода:
//!
//! 1. [`lexer`]: грубое разбиение по кавычкам, комментариям, пробелам,
//!    границам и операторным символам;
//! 2. [`classify`]: классификация по словарям диалекта и склейка чисел;
//! 3. [`residual`]: разрезание оставшегося текста по операторам, метки и
//!    параметры привязки.
//!
//! После третьего прохода каждому токену назначается позиция в исходном тексте.

pub mod classify;
pub mod cursor;
pub mod lexer;
pub mod residual;
pub mod token;
pub mod tokens;

#[cfg(test)]
pub mod tests;

use crate::dialects::{Dialect, DialectClassifier};

// Переэкспортируем основные типы
pub use classify::{classify, classify_word, is_numeric};
pub use cursor::CharCursor;
pub use lexer::{scan, Lexer};
pub use residual::{find_operator, is_bind_parameter, split_residual};
pub use token::{Position, Token, TokenKind};
pub use tokens::{TokenList, TokenReader, TokenWriter};

/// Токенизирует текст по правилам диалекта
pub fn tokenize(input: &str, dialect: Dialect) -> TokenList {
    tokenize_with(input, dialect.classifier())
}

/// Токенизирует текст с произвольным классификатором диалекта
pub fn tokenize_with(input: &str, dialect: &dyn DialectClassifier) -> TokenList {
    log::debug!(
        "Tokenizing {} bytes as {}",
        input.len(),
        dialect.dialect()
    );

    let mut raw = scan(input, dialect.quoting());
    log::trace!("Pass 1 produced {} tokens", raw.len());

    let mut classified = classify(&mut raw, dialect);
    log::trace!("Pass 2 produced {} tokens", classified.len());

    let mut tokens = split_residual(&mut classified, dialect);
    log::trace!("Pass 3 produced {} tokens", tokens.len());

    assign_positions(&mut tokens);
    log::debug!("Tokenized into {} tokens", tokens.len());
    tokens
}

/// Назначает каждому токену позицию начала его значения
fn assign_positions(tokens: &mut TokenList) {
    let mut position = Position::start();
    for token in tokens.tokens_mut() {
        position.advance_str(&token.leading_whitespace);
        token.position = position;
        position.advance_str(&token.value);
    }
}
