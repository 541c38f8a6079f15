//! Конфигурация для sqllex
//!
//! Предоставляет настройки токенизатора и утилиты командной строки

use crate::common::constants::{
    DEFAULT_LOG_LEVEL, ENV_DIALECT, ENV_LOG_LEVEL, ENV_OUTPUT_FORMAT,
};
use crate::common::error::{Error, Result};
use crate::dialects::Dialect;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Формат вывода токенов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Одна строка на токен: `Kind:  [value]`
    #[default]
    Text,
    /// JSON массив токенов
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::configuration(format!(
                "Unsupported output format: {}",
                s
            ))),
        }
    }
}

/// Основная конфигурация токенизатора
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Диалект SQL по умолчанию
    pub dialect: Dialect,
    /// Формат вывода
    pub output_format: OutputFormat,
    /// Уровень логирования (фильтр env_logger)
    pub log_level: String,
    /// Печатать позиции токенов в текстовом выводе
    pub show_positions: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            output_format: OutputFormat::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            show_positions: false,
        }
    }
}

impl LexerConfig {
    /// Загружает конфигурацию из TOML файла
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::configuration(format!("{}: {}", path.display(), e)))
    }

    /// Сохраняет конфигурацию в TOML файл
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| Error::configuration(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Загружает конфигурацию из переменных окружения
    pub fn from_env() -> Result<Self> {
        let mut config = LexerConfig::default();

        if let Ok(dialect) = std::env::var(ENV_DIALECT) {
            config.dialect = Dialect::from_name(&dialect);
        }

        if let Ok(format) = std::env::var(ENV_OUTPUT_FORMAT) {
            config.output_format = format.parse()?;
        }

        if let Ok(level) = std::env::var(ENV_LOG_LEVEL) {
            config.log_level = level;
        }

        Ok(config)
    }

    /// Объединяет конфигурацию с другой: значения, отличные от умолчаний, побеждают
    pub fn merge(mut self, other: Self) -> Self {
        let defaults = LexerConfig::default();

        if other.dialect != defaults.dialect {
            self.dialect = other.dialect;
        }
        if other.output_format != defaults.output_format {
            self.output_format = other.output_format;
        }
        if other.log_level != defaults.log_level {
            self.log_level = other.log_level;
        }
        if other.show_positions != defaults.show_positions {
            self.show_positions = other.show_positions;
        }

        self
    }

    /// Валидирует конфигурацию
    pub fn validate(&self) -> Result<()> {
        let level = self.log_level.trim();
        if level.is_empty() {
            return Err(Error::configuration("Log level cannot be empty"));
        }

        // Простой уровень должен быть известен log; сложные фильтры env_logger проверит сам
        if !level.contains(['=', ',']) && level.parse::<log::LevelFilter>().is_err() {
            return Err(Error::configuration(format!(
                "Unknown log level: {}",
                level
            )));
        }

        Ok(())
    }
}
