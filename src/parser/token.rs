//! Токены SQL лексера sqllex
//!
//! Определяет закрытый набор видов токенов, которые распознает лексический
//! анализатор, и сам токен: текст, вид и поглощенные ведущие пробелы.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Позиция токена в исходном тексте
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Номер строки, начиная с 1
    pub line: usize,
    /// Номер колонки в символах, начиная с 1
    pub column: usize,
    /// Смещение в байтах от начала входа
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }

    /// Сдвигает позицию за переданный текст
    pub fn advance_str(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset += text.len();
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Виды токенов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Последовательность пробельных символов (только внутри лексера)
    Whitespace,
    /// Идентификатор без кавычек
    Identifier,
    /// Числовой литерал
    Numeric,
    /// Комментарий до конца строки `-- ...`
    LineComment,
    /// Комментарий `# ...` (MySQL/MariaDB); на втором проходе становится `LineComment`
    PoundLineComment,
    /// Блочный комментарий `/* ... */`
    BlockComment,
    /// Строка в одинарных кавычках
    SingleQuoted,
    /// Строка в двойных кавычках
    DoubleQuoted,
    /// Строка в обратных кавычках
    BacktickQuoted,
    /// Строка в квадратных скобках
    BracketQuoted,
    /// Метка процедурного блока: `<<name>>` или `name:`
    Label,
    /// Ключевое слово диалекта
    Keyword,
    /// Оператор диалекта
    Operator,
    /// Параметр привязки: `?`, `:name`, `$1`
    BindParameter,
    /// Неклассифицированный текст
    Other,
}

impl TokenKind {
    /// Имя вида токена
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Whitespace => "Whitespace",
            TokenKind::Identifier => "Identifier",
            TokenKind::Numeric => "Numeric",
            TokenKind::LineComment => "LineComment",
            TokenKind::PoundLineComment => "PoundLineComment",
            TokenKind::BlockComment => "BlockComment",
            TokenKind::SingleQuoted => "SingleQuoted",
            TokenKind::DoubleQuoted => "DoubleQuoted",
            TokenKind::BacktickQuoted => "BacktickQuoted",
            TokenKind::BracketQuoted => "BracketQuoted",
            TokenKind::Label => "Label",
            TokenKind::Keyword => "Keyword",
            TokenKind::Operator => "Operator",
            TokenKind::BindParameter => "BindParameter",
            TokenKind::Other => "Other",
        }
    }

    /// Проверяет, является ли токен строкой в кавычках
    pub fn is_quoted(&self) -> bool {
        matches!(
            self,
            TokenKind::SingleQuoted
                | TokenKind::DoubleQuoted
                | TokenKind::BacktickQuoted
                | TokenKind::BracketQuoted
        )
    }

    /// Проверяет, является ли токен комментарием
    pub fn is_comment(&self) -> bool {
        matches!(
            self,
            TokenKind::LineComment | TokenKind::PoundLineComment | TokenKind::BlockComment
        )
    }

    /// Вид определен структурой текста и не переклассифицируется словарем диалекта
    pub fn is_structural(&self) -> bool {
        self.is_quoted()
            || self.is_comment()
            || matches!(self, TokenKind::Label | TokenKind::BindParameter)
    }

    /// Закрывающий символ для строк в кавычках
    pub fn closing_char(&self) -> Option<char> {
        match self {
            TokenKind::SingleQuoted => Some('\''),
            TokenKind::DoubleQuoted => Some('"'),
            TokenKind::BacktickQuoted => Some('`'),
            TokenKind::BracketQuoted => Some(']'),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Токен со значением, видом и ведущими пробелами
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub leading_whitespace: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            leading_whitespace: String::new(),
            position: Position::default(),
        }
    }

    pub fn with_whitespace(mut self, whitespace: impl Into<String>) -> Self {
        self.leading_whitespace = whitespace.into();
        self
    }

    /// Токен примыкает к предыдущему без пробелов
    pub fn is_adjacent(&self) -> bool {
        self.leading_whitespace.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:  [{}]", self.kind, self.value)
    }
}
