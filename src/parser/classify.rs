//! Второй проход: семантическая классификация
//!
//! Токены без структурного вида получают вид по словарям диалекта:
//! ключевое слово, оператор, число, идентификатор или `Other`. Числа в
//! экспоненциальной записи, разорванные знаком на первом проходе,
//! склеиваются обратно, а унарный знак присоединяется к числу.

use crate::dialects::DialectClassifier;
use crate::parser::token::{Token, TokenKind};
use crate::parser::tokens::{TokenList, TokenReader, TokenWriter};

/// Классифицирует текст токена по словарям диалекта
pub fn classify_word(word: &str, dialect: &dyn DialectClassifier) -> TokenKind {
    if dialect.is_keyword(word) {
        TokenKind::Keyword
    } else if dialect.is_operator(word) {
        TokenKind::Operator
    } else if is_numeric(word) {
        TokenKind::Numeric
    } else if dialect.is_identifier(word) {
        TokenKind::Identifier
    } else {
        TokenKind::Other
    }
}

/// Проверяет, является ли текст числовым литералом.
///
/// Допускаются знак, цифры с одной десятичной точкой и один маркер
/// экспоненты `E`/`e` со своим знаком и цифрами. Голый маркер в конце
/// (`1E`) тоже принимается: такой токен может быть склеен со знаком и
/// цифрами экспоненты.
pub fn is_numeric(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);

    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(pos) => (&unsigned[..pos], Some(&unsigned[pos + 1..])),
        None => (unsigned, None),
    };

    let digits = mantissa.chars().filter(|ch| ch.is_ascii_digit()).count();
    let points = mantissa.chars().filter(|ch| *ch == '.').count();
    if digits == 0 || points > 1 || digits + points != mantissa.len() {
        return false;
    }

    match exponent {
        None => true,
        Some("") => true,
        Some(exp) => {
            let exp_digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !exp_digits.is_empty() && exp_digits.chars().all(|ch| ch.is_ascii_digit())
        }
    }
}

fn ends_with_exponent_marker(text: &str) -> bool {
    text.ends_with(['e', 'E'])
}

fn is_sign(text: &str) -> bool {
    text == "+" || text == "-"
}

fn is_all_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|ch| ch.is_ascii_digit())
}

/// Можно ли присоединить числовой токен к знаку, только что записанному в `out`
fn can_fold_sign(out: &TokenList, token: &Token) -> bool {
    if token.kind != TokenKind::Numeric
        || !token.is_adjacent()
        || token.value.starts_with(['+', '-'])
    {
        return false;
    }

    let sign_before = out
        .peek_token(0)
        .is_some_and(|sign| sign.kind == TokenKind::Operator && is_sign(&sign.value));
    if !sign_before || out.len() < 2 {
        return false;
    }

    out.peek_token(-1).is_some_and(|prev| {
        matches!(prev.kind, TokenKind::Keyword | TokenKind::Operator) || prev.value == ","
    })
}

/// Записывает токен, присоединяя числа к предшествующему унарному знаку
pub(crate) fn emit(out: &mut TokenList, token: Token) {
    if can_fold_sign(out, &token) {
        out.concat(&token.value);
        out.update_type(TokenKind::Numeric);
    } else {
        out.push(token);
    }
}

/// Второй проход над результатом первого
pub fn classify(source: &mut TokenList, dialect: &dyn DialectClassifier) -> TokenList {
    let mut out = TokenList::with_capacity(source.len());
    source.rewind();

    while let Some(mut token) = source.next_token() {
        match token.kind {
            TokenKind::Whitespace => {
                out.push_trailing_whitespace(&token.leading_whitespace);
                out.push_trailing_whitespace(&token.value);
                continue;
            }
            TokenKind::PoundLineComment => token.kind = TokenKind::LineComment,
            kind if kind.is_structural() => {}
            _ => {
                token.kind = classify_word(&token.value, dialect);
                if token.kind == TokenKind::Numeric && ends_with_exponent_marker(&token.value) {
                    merge_exponent(source, &mut token);
                }
            }
        }
        emit(&mut out, token);
    }

    out.push_trailing_whitespace(source.trailing_whitespace());
    out
}

/// Склеивает `1E`, `+` и `10` в одно число `1E+10`
fn merge_exponent(source: &mut TokenList, token: &mut Token) {
    let sign = match source.peek_token(0) {
        Some(sign) if sign.is_adjacent() && is_sign(&sign.value) => sign.value.clone(),
        _ => return,
    };
    let digits = match source.peek_token(1) {
        Some(digits) if digits.is_adjacent() && is_all_digits(&digits.value) => {
            digits.value.clone()
        }
        _ => return,
    };

    token.value.push_str(&sign);
    token.value.push_str(&digits);
    source.next_token();
    source.next_token();
}
