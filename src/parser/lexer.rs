//! Первый проход лексического анализатора
//!
//! Разбивает входной текст на грубые токены: строки в кавычках, комментарии,
//! пробельные последовательности, принудительные границы, операторные
//! последовательности и прочий текст. Словари диалекта здесь не
//! используются, только его правила кавычек.

use crate::common::constants::{
    is_whitespace_char, BOUNDARY_CHARS, INACTIVE_QUOTE_CHARS, OPERATOR_CHARS,
};
use crate::dialects::QuoteRules;
use crate::parser::cursor::CharCursor;
use crate::parser::token::TokenKind;
use crate::parser::tokens::{TokenList, TokenWriter};

/// Лексический анализатор первого прохода
pub struct Lexer {
    /// Курсор по исходному тексту
    cursor: CharCursor,
    /// Правила кавычек диалекта
    rules: QuoteRules,
    /// Накопленные токены
    tokens: TokenList,
}

impl Lexer {
    /// Создает лексический анализатор над текстом
    pub fn new(input: &str, rules: QuoteRules) -> Self {
        Self {
            cursor: CharCursor::new(input),
            rules,
            tokens: TokenList::with_capacity(input.len() / 4 + 1),
        }
    }

    /// Сканирует весь текст и возвращает грубые токены
    pub fn scan(mut self) -> TokenList {
        while let Some(ch) = self.cursor.next() {
            match self.tokens.open_kind() {
                Some(kind) if kind.is_quoted() => self.scan_quoted(kind, ch),
                Some(TokenKind::LineComment | TokenKind::PoundLineComment) => {
                    self.scan_line_comment(ch)
                }
                Some(TokenKind::BlockComment) => self.scan_block_comment(ch),
                _ => self.scan_unquoted(ch),
            }
        }
        self.tokens.close_token();
        self.tokens
    }

    /// Символ внутри строки в кавычках
    fn scan_quoted(&mut self, kind: TokenKind, ch: char) {
        self.tokens.push_char(ch);

        if ch == '\\'
            && self.rules.backslash_escapes
            && matches!(kind, TokenKind::SingleQuoted | TokenKind::DoubleQuoted)
        {
            if let Some(escaped) = self.cursor.next() {
                self.tokens.push_char(escaped);
            }
            return;
        }

        if Some(ch) == kind.closing_char() {
            // Удвоенный ограничитель обозначает сам символ
            if self.cursor.peek() == Some(ch) {
                self.consume_next();
            } else {
                self.tokens.close_token();
            }
        }
    }

    /// Символ внутри комментария до конца строки
    fn scan_line_comment(&mut self, ch: char) {
        let line_end = ch == '\n' || (ch == '\r' && self.cursor.peek() == Some('\n'));
        if line_end {
            self.tokens.set_type(TokenKind::Whitespace);
        }
        self.tokens.push_char(ch);
    }

    /// Символ внутри блочного комментария
    fn scan_block_comment(&mut self, ch: char) {
        self.tokens.push_char(ch);
        if ch == '*' && self.cursor.peek() == Some('/') {
            self.consume_next();
            self.tokens.close_token();
        }
    }

    /// Символ вне кавычек и комментариев
    fn scan_unquoted(&mut self, ch: char) {
        let next = self.cursor.peek();

        match ch {
            '\'' => self.start(TokenKind::SingleQuoted, ch),
            '"' => self.start(TokenKind::DoubleQuoted, ch),
            '#' if self.rules.pound_comment => self.start(TokenKind::PoundLineComment, ch),
            '`' if self.rules.backtick => self.start(TokenKind::BacktickQuoted, ch),
            '[' if self.rules.bracket => self.start(TokenKind::BracketQuoted, ch),
            '/' if next == Some('*') => {
                self.start(TokenKind::BlockComment, ch);
                self.consume_next();
            }
            '-' if next == Some('-') => {
                self.start(TokenKind::LineComment, ch);
                self.consume_next();
            }
            _ if is_whitespace_char(ch) => {
                self.tokens.set_type(TokenKind::Whitespace);
                self.tokens.push_char(ch);
            }
            '\\' => {
                self.tokens.set_type(TokenKind::Other);
                self.tokens.push_char(ch);
                self.consume_next();
            }
            _ if BOUNDARY_CHARS.contains(&ch) => {
                self.start(TokenKind::Other, ch);
                self.tokens.close_token();
            }
            ':' if matches!(next, Some(':' | '=')) => {
                self.tokens.set_type(TokenKind::Operator);
                self.tokens.push_char(ch);
                self.consume_next();
            }
            _ if self.is_operator_char(ch) => {
                self.tokens.set_type(TokenKind::Operator);
                self.tokens.push_char(ch);
            }
            _ => {
                self.tokens.set_type(TokenKind::Other);
                self.tokens.push_char(ch);
            }
        }
    }

    /// Начинает новый токен с символа `ch`
    fn start(&mut self, kind: TokenKind, ch: char) {
        self.tokens.extend(kind);
        self.tokens.push_char(ch);
    }

    /// Переносит следующий символ в открытый токен без разбора
    fn consume_next(&mut self) {
        if let Some(ch) = self.cursor.next() {
            self.tokens.push_char(ch);
        }
    }

    fn is_operator_char(&self, ch: char) -> bool {
        if OPERATOR_CHARS.contains(&ch) {
            return true;
        }
        if !INACTIVE_QUOTE_CHARS.contains(&ch) {
            return false;
        }
        match ch {
            '`' => !self.rules.backtick,
            _ => !self.rules.bracket,
        }
    }
}

/// Первый проход: грубое разбиение текста на токены
pub fn scan(input: &str, rules: QuoteRules) -> TokenList {
    Lexer::new(input, rules).scan()
}
