//! Третий проход: разбор остатков
//!
//! Токены `Other`, оставшиеся после классификации, режутся по операторам
//! диалекта (самое длинное совпадение, слева направо). До поиска операторов
//! весь текст проверяется на метку и параметр привязки. Здесь же
//! собираются многотокенные конструкции: метки `<<name>>` и оператор
//! внешнего соединения `(+)`.

use crate::common::constants::is_boundary;
use crate::dialects::DialectClassifier;
use crate::parser::classify::{classify_word, emit};
use crate::parser::token::{Token, TokenKind};
use crate::parser::tokens::{TokenList, TokenReader, TokenWriter};
use std::mem;

/// Проверяет, является ли текст параметром привязки: `?`, `?1`, `:name`, `$1`
pub fn is_bind_parameter(text: &str) -> bool {
    if let Some(rest) = text.strip_prefix('?') {
        return rest.chars().all(|ch| ch.is_ascii_digit());
    }
    [':', '$'].into_iter().any(|marker| {
        text.strip_prefix(marker)
            .is_some_and(|rest| !rest.is_empty() && !rest.contains(marker))
    })
}

/// Ищет самый длинный оператор диалекта внутри текста.
/// Возвращает байтовые границы первого совпадения.
pub fn find_operator(text: &str, dialect: &dyn DialectClassifier) -> Option<(usize, usize)> {
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(pos, _)| pos)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_count = bounds.len() - 1;
    let longest = dialect.max_operator_len().min(char_count);

    for len in (1..=longest).rev() {
        for start in 0..=(char_count - len) {
            let (from, to) = (bounds[start], bounds[start + len]);
            if dialect.is_operator(&text[from..to]) {
                return Some((from, to));
            }
        }
    }
    None
}

/// Вид всего текста целиком, если он распознается без разрезания
fn tag_whole(text: &str, dialect: &dyn DialectClassifier) -> Option<TokenKind> {
    if dialect.is_label(text) {
        return Some(TokenKind::Label);
    }
    if is_bind_parameter(text) {
        return Some(TokenKind::BindParameter);
    }
    match classify_word(text, dialect) {
        TokenKind::Other => None,
        kind => Some(kind),
    }
}

/// Режет текст на фрагменты и записывает их. Ведущие пробелы достаются
/// только первому фрагменту.
fn emit_fragments(
    out: &mut TokenList,
    text: &str,
    mut leading: String,
    dialect: &dyn DialectClassifier,
) {
    let mut rest = text;

    while !rest.is_empty() {
        if let Some(kind) = tag_whole(rest, dialect) {
            emit(out, Token::new(kind, rest).with_whitespace(leading));
            return;
        }

        if let Some(end) = label_prefix(rest, dialect) {
            let label = Token::new(TokenKind::Label, &rest[..end]);
            emit(out, label.with_whitespace(mem::take(&mut leading)));
            rest = &rest[end..];
            continue;
        }

        let Some((from, to)) = find_operator(rest, dialect) else {
            emit(out, Token::new(TokenKind::Other, rest).with_whitespace(leading));
            return;
        };

        if from > 0 {
            emit_fragments(out, &rest[..from], mem::take(&mut leading), dialect);
        }
        let operator = Token::new(TokenKind::Operator, &rest[from..to]);
        emit(out, operator.with_whitespace(mem::take(&mut leading)));
        rest = &rest[to..];
    }
}

/// Длина метки `name:` в начале текста, за которой без пробела идет продолжение
fn label_prefix(text: &str, dialect: &dyn DialectClassifier) -> Option<usize> {
    let end = text.find(':')? + 1;
    (end < text.len() && dialect.is_label(&text[..end])).then_some(end)
}

/// `<<`, идентификатор и `>>` без пробелов между ними. Закрывающий `>>`
/// мог слиться на первом проходе со следующими операторными символами
/// (`>><<`): тогда остаток остается в списке и разбирается дальше.
fn angle_label(
    source: &mut TokenList,
    token: &Token,
    dialect: &dyn DialectClassifier,
) -> Option<Token> {
    if token.value != "<<" {
        return None;
    }
    let name = source.peek_token(0).filter(|name| {
        name.is_adjacent()
            && matches!(
                name.kind,
                TokenKind::Identifier | TokenKind::Keyword | TokenKind::Other
            )
    })?;
    let close = source.peek_token(1)?;
    if !close.value.starts_with(">>") || !close.is_adjacent() {
        return None;
    }
    let rest = close.value[2..].to_string();

    let label = format!("<<{}>>", name.value);
    if !dialect.is_label(&label) {
        return None;
    }
    source.next_token();
    if rest.is_empty() {
        source.next_token();
    } else if let Some(close) = source.peek_token_mut(0) {
        close.value = rest;
        close.kind = TokenKind::Other;
    }
    Some(Token::new(TokenKind::Label, label).with_whitespace(token.leading_whitespace.clone()))
}

/// Оператор внешнего соединения Oracle `(+)`
fn outer_join(
    source: &mut TokenList,
    token: &Token,
    dialect: &dyn DialectClassifier,
) -> Option<Token> {
    if token.value != "(" || !dialect.is_operator("(+)") {
        return None;
    }
    let adjacent = |n: isize, value: &str| {
        source
            .peek_token(n)
            .is_some_and(|next| next.value == value && next.is_adjacent())
    };
    if !(adjacent(0, "+") && adjacent(1, ")")) {
        return None;
    }

    source.next_token();
    source.next_token();
    Some(Token::new(TokenKind::Operator, "(+)").with_whitespace(token.leading_whitespace.clone()))
}

/// Третий проход над результатом второго
pub fn split_residual(source: &mut TokenList, dialect: &dyn DialectClassifier) -> TokenList {
    let mut out = TokenList::with_capacity(source.len());
    source.rewind();

    while let Some(token) = source.next_token() {
        if let Some(label) = angle_label(source, &token, dialect) {
            out.push(label);
            continue;
        }
        if let Some(operator) = outer_join(source, &token, dialect) {
            out.push(operator);
            continue;
        }

        if token.kind != TokenKind::Other || is_boundary(&token.value) {
            emit(&mut out, token);
            continue;
        }

        emit_fragments(&mut out, &token.value, token.leading_whitespace, dialect);
    }

    out.push_trailing_whitespace(source.trailing_whitespace());
    out
}
