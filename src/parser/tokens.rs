//! Накопитель токенов
//!
//! [`TokenList`] одновременно является списком токенов, который строит
//! очередной проход лексера, и курсором по этому списку, из которого читает
//! следующий проход. Обе роли разделены на трейты [`TokenWriter`] и
//! [`TokenReader`], но используют одно хранилище и один индекс: при записи
//! индекс всегда стоит на последнем токене.

use crate::parser::token::{Token, TokenKind};
use serde::Serialize;
use std::fmt;

/// Запись токенов: построение нового списка
pub trait TokenWriter {
    /// Начинает новый токен вида `kind`. Открытый пробельный токен не
    /// добавляет новый слот, а становится ведущими пробелами нового токена.
    fn extend(&mut self, kind: TokenKind);

    /// Добавляет готовый токен как есть
    fn push(&mut self, token: Token);

    /// Дописывает текст в открытый токен; без открытого токена начинает `Other`
    fn concat(&mut self, text: &str);

    fn push_char(&mut self, ch: char);

    /// Гарантирует, что открытый токен имеет вид `kind`
    fn set_type(&mut self, kind: TokenKind);

    /// Меняет вид текущего токена на месте
    fn update_type(&mut self, kind: TokenKind);

    /// Закрывает текущий токен: следующая запись начнет новый
    fn close_token(&mut self);
}

/// Чтение токенов: курсор по готовому списку
pub trait TokenReader {
    /// Токен на расстоянии `n` от курсора (может быть отрицательным)
    fn peek_token(&self, n: isize) -> Option<&Token>;

    /// Возвращает токен под курсором и продвигает курсор
    fn next_token(&mut self) -> Option<Token>;

    /// Возвращает курсор в начало списка
    fn rewind(&mut self);

    fn kind(&self) -> Option<TokenKind> {
        self.kind_n(0)
    }

    fn kind_n(&self, n: isize) -> Option<TokenKind> {
        self.peek_token(n).map(|token| token.kind)
    }

    fn peek(&self) -> Option<&str> {
        self.peek_n(0)
    }

    fn peek_n(&self, n: isize) -> Option<&str> {
        self.peek_token(n).map(|token| token.value.as_str())
    }
}

/// Упорядоченный список токенов с курсором
#[derive(Debug, Clone, Default, Serialize)]
pub struct TokenList {
    tokens: Vec<Token>,
    #[serde(skip)]
    idx: usize,
    /// Последний токен еще накапливает символы
    #[serde(skip)]
    open: bool,
    /// Пробелы после последнего токена
    trailing_whitespace: String,
}

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tokens: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }

    pub fn trailing_whitespace(&self) -> &str {
        &self.trailing_whitespace
    }

    pub(crate) fn push_trailing_whitespace(&mut self, text: &str) {
        self.trailing_whitespace.push_str(text);
    }

    /// Вид открытого токена, если он есть
    pub fn open_kind(&self) -> Option<TokenKind> {
        if self.open {
            self.tokens.last().map(|token| token.kind)
        } else {
            None
        }
    }

    pub fn is_open(&self) -> bool {
        self.open && !self.tokens.is_empty()
    }

    /// Восстанавливает исходный текст: ведущие пробелы и значения всех
    /// токенов по порядку, затем хвостовые пробелы
    pub fn to_source(&self) -> String {
        let mut source = String::new();
        for token in &self.tokens {
            source.push_str(&token.leading_whitespace);
            source.push_str(&token.value);
        }
        source.push_str(&self.trailing_whitespace);
        source
    }

    pub(crate) fn tokens_mut(&mut self) -> &mut [Token] {
        &mut self.tokens
    }

    /// Изменяемый токен на расстоянии `n` от курсора
    pub(crate) fn peek_token_mut(&mut self, n: isize) -> Option<&mut Token> {
        self.idx
            .checked_add_signed(n)
            .and_then(|pos| self.tokens.get_mut(pos))
    }

    /// Открытый токен для дописывания; при необходимости начинает `Other`
    fn open_token(&mut self) -> &mut Token {
        if !self.is_open() {
            self.extend(TokenKind::Other);
        }
        let last = self.tokens.len() - 1;
        &mut self.tokens[last]
    }

    fn seek_last(&mut self) {
        self.idx = self.tokens.len().saturating_sub(1);
    }
}

impl TokenWriter for TokenList {
    fn extend(&mut self, kind: TokenKind) {
        let absorb = self.open && kind != TokenKind::Whitespace;
        match self.tokens.last_mut() {
            Some(last) if absorb && last.kind == TokenKind::Whitespace => {
                last.leading_whitespace = std::mem::take(&mut last.value);
                last.kind = kind;
            }
            _ => self.tokens.push(Token::new(kind, String::new())),
        }
        self.seek_last();
        self.open = true;
    }

    fn push(&mut self, token: Token) {
        self.tokens.push(token);
        self.seek_last();
        self.open = true;
    }

    fn concat(&mut self, text: &str) {
        self.open_token().value.push_str(text);
    }

    fn push_char(&mut self, ch: char) {
        self.open_token().value.push(ch);
    }

    fn set_type(&mut self, kind: TokenKind) {
        if self.open_kind() != Some(kind) {
            self.extend(kind);
        }
    }

    fn update_type(&mut self, kind: TokenKind) {
        if let Some(last) = self.tokens.last_mut() {
            last.kind = kind;
        }
    }

    fn close_token(&mut self) {
        self.open = false;
    }
}

impl TokenReader for TokenList {
    fn peek_token(&self, n: isize) -> Option<&Token> {
        self.idx
            .checked_add_signed(n)
            .and_then(|pos| self.tokens.get(pos))
    }

    fn next_token(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.idx).cloned()?;
        self.idx += 1;
        Some(token)
    }

    fn rewind(&mut self) {
        self.idx = 0;
    }
}

/// Списки равны, если совпадают токены и хвостовые пробелы
impl PartialEq for TokenList {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens && self.trailing_whitespace == other.trailing_whitespace
    }
}

impl Eq for TokenList {}

impl fmt::Display for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            writeln!(f, "{}", token)?;
        }
        Ok(())
    }
}

impl IntoIterator for TokenList {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl FromIterator<Token> for TokenList {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        let mut list = TokenList::new();
        for token in iter {
            list.push(token);
        }
        list.close_token();
        list
    }
}
