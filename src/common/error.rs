//! Обработка ошибок для sqllex
//!
//! Сам токенизатор никогда не завершается ошибкой: некорректный ввод
//! деградирует до токенов вида `Other`. Ошибки возникают только на внешних
//! поверхностях крейта: чтение файлов, конфигурация, сериализация вывода.

use thiserror::Error;

/// Основной тип ошибки для sqllex
#[derive(Error, Debug)]
pub enum Error {
    /// Ошибка I/O операций
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ошибка сериализации/десериализации
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Ошибка конфигурации
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Неизвестное имя диалекта (только при строгом разборе)
    #[error("Unknown SQL dialect: {name}")]
    UnknownDialect { name: String },

    /// Внутренняя ошибка
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Тип результата для sqllex
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Создает ошибку конфигурации
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Создает ошибку неизвестного диалекта
    pub fn unknown_dialect(name: impl Into<String>) -> Self {
        Self::UnknownDialect { name: name.into() }
    }

    /// Создает внутреннюю ошибку
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
