//! Константы для sqllex

/// Символы, которые всегда образуют отдельный токен
pub const BOUNDARY_CHARS: &[char] = &['(', ')', ',', ';'];

/// Пробельные символы, поглощаемые в ведущие пробелы следующего токена
pub const WHITESPACE_CHARS: &[char] = &[' ', '\t', '\n', '\r'];

/// Символы, из которых складываются операторные последовательности на первом проходе.
/// `` ` ``, `[` и `]` относятся сюда, только если диалект не использует их как кавычки.
pub const OPERATOR_CHARS: &[char] = &[
    '+', '-', '*', '/', '%', '=', '<', '>', '!', '~', '^', '|', '&', '¬', '{', '}',
];

/// Символы-кавычки, которые становятся операторными, когда диалект их не поддерживает
pub const INACTIVE_QUOTE_CHARS: &[char] = &['`', '[', ']'];

/// Имя конфигурационного файла по умолчанию
pub const DEFAULT_CONFIG_FILE: &str = "sqllex.toml";

/// Уровень логирования по умолчанию
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Переменная окружения с именем диалекта
pub const ENV_DIALECT: &str = "SQLLEX_DIALECT";

/// Переменная окружения с форматом вывода
pub const ENV_OUTPUT_FORMAT: &str = "SQLLEX_OUTPUT_FORMAT";

/// Переменная окружения с уровнем логирования
pub const ENV_LOG_LEVEL: &str = "SQLLEX_LOG_LEVEL";

/// Проверяет, является ли символ пробельным
pub fn is_whitespace_char(ch: char) -> bool {
    WHITESPACE_CHARS.contains(&ch)
}

/// Проверяет, является ли строка принудительной границей токена
pub fn is_boundary(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => BOUNDARY_CHARS.contains(&ch),
        _ => false,
    }
}
