//! Курсор по символам входного текста
//!
//! Входной текст раскладывается на символы; курсор выдает их по одному и
//! позволяет заглядывать вперед на произвольное расстояние. Выход за конец
//! никогда не является ошибкой: вместо символа возвращается `None`.

/// Курсор по символам
#[derive(Debug, Clone, Default)]
pub struct CharCursor {
    /// Исходный текст, разложенный на символы
    input: Vec<char>,
    /// Текущая позиция в тексте
    position: usize,
}

impl CharCursor {
    /// Создает курсор над текстом
    pub fn new(text: &str) -> Self {
        Self {
            input: text.chars().collect(),
            position: 0,
        }
    }

    /// Сбрасывает курсор на новый текст
    pub fn reset(&mut self, text: &str) {
        self.input.clear();
        self.input.extend(text.chars());
        self.position = 0;
    }

    /// Возвращает текущий символ без продвижения позиции
    pub fn peek(&self) -> Option<char> {
        self.peek_n(0)
    }

    /// Возвращает символ на расстоянии `n` от текущей позиции
    pub fn peek_n(&self, n: usize) -> Option<char> {
        self.position
            .checked_add(n)
            .and_then(|pos| self.input.get(pos))
            .copied()
    }

    /// Количество непрочитанных символов
    pub fn remaining(&self) -> usize {
        self.input.len().saturating_sub(self.position)
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

impl Iterator for CharCursor {
    type Item = char;

    /// Возвращает текущий символ и продвигает позицию
    fn next(&mut self) -> Option<char> {
        let ch = self.input.get(self.position).copied()?;
        self.position += 1;
        Some(ch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}
