//! CLI интерфейс для sqllex
//!
//! Предоставляет командную строку для токенизации SQL файлов и проверки
//! словарей диалектов

use crate::common::{Error, LexerConfig, OutputFormat, Result, DEFAULT_CONFIG_FILE};
use crate::dialects::Dialect;
use crate::parser::{classify_word, is_bind_parameter, tokenize, TokenKind, TokenList};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use serde::Serialize;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// sqllex - токенизатор SQL с учетом диалектов
#[derive(Parser)]
#[command(name = "sqllex")]
#[command(about = "sqllex - A dialect-aware SQL tokenizer")]
#[command(version)]
pub struct Cli {
    /// Конфигурационный файл
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Уровень детализации логирования
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Разбить SQL на токены
    Tokenize {
        /// Входные файлы; без них читается stdin
        files: Vec<PathBuf>,

        /// Диалект SQL
        #[arg(short, long)]
        dialect: Option<String>,

        /// Формат вывода (text, json)
        #[arg(short, long)]
        format: Option<String>,

        /// Печатать позиции токенов
        #[arg(long)]
        positions: bool,
    },

    /// Показать, как диалект классифицирует слово
    Classify {
        /// Слово или символ
        word: String,

        /// Диалект SQL
        #[arg(short, long)]
        dialect: Option<String>,
    },

    /// Показать поддерживаемые диалекты
    Dialects,

    /// Показать информацию о системе
    Info,
}

/// Результат токенизации одного файла
#[derive(Debug, Serialize)]
pub struct FileTokens {
    /// Путь к файлу
    pub file: String,
    pub tokens: TokenList,
}

/// Токенизирует файлы параллельно; результаты возвращаются в порядке входа
pub fn tokenize_files(files: &[PathBuf], dialect: Dialect) -> Result<Vec<FileTokens>> {
    files
        .par_iter()
        .map(|path| -> Result<FileTokens> {
            let text = std::fs::read_to_string(path)?;
            let tokens = tokenize(&text, dialect);
            log::debug!("{}: {} tokens", path.display(), tokens.len());
            Ok(FileTokens {
                file: path.display().to_string(),
                tokens,
            })
        })
        .collect()
}

impl Cli {
    pub fn init() -> Self {
        Self::parse()
    }

    /// Загружает конфигурацию: файл, затем переменные окружения, затем флаги
    pub fn load_config(&self) -> Result<LexerConfig> {
        let file_config = match &self.config {
            Some(path) => LexerConfig::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    LexerConfig::from_file(default_path)?
                } else {
                    LexerConfig::default()
                }
            }
        };

        let mut config = file_config.merge(LexerConfig::from_env()?);

        if let Some(log_level) = &self.log_level {
            config.log_level = log_level.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Выполняет команду
    pub fn execute<W: Write>(&self, config: &LexerConfig, out: &mut W) -> Result<()> {
        match &self.command {
            Some(Commands::Tokenize {
                files,
                dialect,
                format,
                positions,
            }) => {
                let dialect = resolve_dialect(dialect.as_deref(), config);
                let format = match format {
                    Some(format) => format.parse()?,
                    None => config.output_format,
                };
                let positions = *positions || config.show_positions;
                self.run_tokenize(files, dialect, format, positions, out)
            }
            Some(Commands::Classify { word, dialect }) => {
                let dialect = resolve_dialect(dialect.as_deref(), config);
                self.show_classification(word, dialect, out)
            }
            Some(Commands::Dialects) => self.show_dialects(out),
            Some(Commands::Info) => self.show_info(config, out),
            None => self.show_help(out),
        }
    }

    /// Токенизирует stdin или файлы
    fn run_tokenize<W: Write>(
        &self,
        files: &[PathBuf],
        dialect: Dialect,
        format: OutputFormat,
        positions: bool,
        out: &mut W,
    ) -> Result<()> {
        if files.is_empty() {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            let tokens = tokenize(&text, dialect);
            return write_tokens(&tokens, format, positions, out);
        }

        let results = tokenize_files(files, dialect)?;
        match format {
            OutputFormat::Json if results.len() == 1 => {
                let single = results
                    .first()
                    .ok_or_else(|| Error::internal("tokenizer returned no results"))?;
                write_tokens(&single.tokens, format, positions, out)
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &results)?;
                writeln!(out)?;
                Ok(())
            }
            OutputFormat::Text => {
                let headers = results.len() > 1;
                for result in &results {
                    if headers {
                        writeln!(out, "==> {} <==", result.file)?;
                    }
                    write_tokens(&result.tokens, format, positions, out)?;
                }
                Ok(())
            }
        }
    }

    /// Показывает классификацию слова
    fn show_classification<W: Write>(
        &self,
        word: &str,
        dialect: Dialect,
        out: &mut W,
    ) -> Result<()> {
        let classifier = dialect.classifier();
        let kind = if classifier.is_label(word) {
            TokenKind::Label
        } else if is_bind_parameter(word) {
            TokenKind::BindParameter
        } else {
            classify_word(word, classifier)
        };

        writeln!(out, "word:       {}", word)?;
        writeln!(out, "dialect:    {}", dialect)?;
        writeln!(out, "kind:       {}", kind)?;
        writeln!(out, "keyword:    {}", classifier.is_keyword(word))?;
        writeln!(out, "reserved:   {}", classifier.is_reserved_keyword(word))?;
        writeln!(out, "operator:   {}", classifier.is_operator(word))?;
        writeln!(out, "identifier: {}", classifier.is_identifier(word))?;
        writeln!(out, "label:      {}", classifier.is_label(word))?;
        Ok(())
    }

    /// Показывает диалекты и их правила кавычек
    fn show_dialects<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(
            out,
            "{:<12} {:>8} {:>8} {:>8} {:>10} {:>12}",
            "dialect", "backtick", "bracket", "pound", "backslash", "max operator"
        )?;
        for dialect in Dialect::all() {
            let classifier = dialect.classifier();
            let rules = classifier.quoting();
            writeln!(
                out,
                "{:<12} {:>8} {:>8} {:>8} {:>10} {:>12}",
                dialect.name(),
                rules.backtick,
                rules.bracket,
                rules.pound_comment,
                rules.backslash_escapes,
                classifier.max_operator_len()
            )?;
        }
        Ok(())
    }

    /// Показывает информацию о системе
    fn show_info<W: Write>(&self, config: &LexerConfig, out: &mut W) -> Result<()> {
        writeln!(out, "sqllex {}", crate::VERSION)?;
        writeln!(out, "Default dialect: {}", config.dialect)?;
        writeln!(out, "Output format: {}", config.output_format)?;
        writeln!(out, "OS: {}", std::env::consts::OS)?;
        writeln!(out, "Architecture: {}", std::env::consts::ARCH)?;
        Ok(())
    }

    fn show_help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "sqllex {}", crate::VERSION)?;
        writeln!(out, "Use --help for usage information")?;
        Ok(())
    }
}

/// Диалект из флага или конфигурации
fn resolve_dialect(flag: Option<&str>, config: &LexerConfig) -> Dialect {
    flag.map(Dialect::from_name).unwrap_or(config.dialect)
}

/// Печатает токены в выбранном формате
pub fn write_tokens<W: Write>(
    tokens: &TokenList,
    format: OutputFormat,
    positions: bool,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, tokens)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for token in tokens {
                if positions {
                    writeln!(out, "{}\t{}", token.position, token)?;
                } else {
                    writeln!(out, "{}", token)?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        cli.execute(&LexerConfig::default(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_cli_parsing() {
        let args = vec!["sqllex", "--log-level", "debug", "tokenize", "-d", "pg", "a.sql"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(cli.log_level, Some("debug".to_string()));
        match cli.command {
            Some(Commands::Tokenize { files, dialect, .. }) => {
                assert_eq!(files, vec![PathBuf::from("a.sql")]);
                assert_eq!(dialect, Some("pg".to_string()));
            }
            _ => panic!("Expected tokenize command"),
        }
    }

    #[test]
    fn test_tokenize_files_in_order() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.sql");
        let second = dir.path().join("second.sql");
        std::fs::write(&first, "SELECT 1").unwrap();
        std::fs::write(&second, "DELETE FROM t").unwrap();

        let out = run(&[
            "sqllex",
            "tokenize",
            first.to_str().unwrap(),
            second.to_str().unwrap(),
        ]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].ends_with("first.sql <=="));
        assert_eq!(lines[1], "Keyword:  [SELECT]");
        assert_eq!(lines[2], "Numeric:  [1]");
        assert!(lines[3].ends_with("second.sql <=="));
        assert_eq!(lines[6], "Identifier:  [t]");
    }

    #[test]
    fn test_tokenize_json_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("q.sql");
        std::fs::write(&path, "SELECT a ").unwrap();

        let out = run(&["sqllex", "tokenize", "-f", "json", path.to_str().unwrap()]);
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["tokens"][0]["kind"], "Keyword");
        assert_eq!(json["tokens"][1]["value"], "a");
        assert_eq!(json["tokens"][1]["leading_whitespace"], " ");
        assert_eq!(json["trailing_whitespace"], " ");
    }

    #[test]
    fn test_tokenize_missing_file() {
        let cli = Cli::try_parse_from(["sqllex", "tokenize", "/nonexistent/q.sql"]).unwrap();
        let mut out = Vec::new();
        let result = cli.execute(&LexerConfig::default(), &mut out);
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_classify_command() {
        let out = run(&["sqllex", "classify", "select", "-d", "postgres"]);
        assert!(out.contains("dialect:    PostgreSQL"));
        assert!(out.contains("kind:       Keyword"));
        assert!(out.contains("reserved:   true"));

        let out = run(&["sqllex", "classify", "<<main>>", "-d", "oracle"]);
        assert!(out.contains("kind:       Label"));
    }

    #[test]
    fn test_dialects_command() {
        let out = run(&["sqllex", "dialects"]);
        assert_eq!(out.lines().count(), Dialect::all().len() + 1);
        assert!(out.contains("MariaDB"));
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "dialect = \"SQLite\"\nshow_positions = true\n").unwrap();

        let cli = Cli::try_parse_from([
            "sqllex",
            "--config",
            path.to_str().unwrap(),
            "--log-level",
            "info",
            "info",
        ])
        .unwrap();
        let config = cli.load_config().unwrap();
        assert_eq!(config.dialect, Dialect::Sqlite);
        assert!(config.show_positions);
        assert_eq!(config.log_level, "info");
    }
}
