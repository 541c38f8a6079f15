//! Конфигурация и выбор диалекта

use sqllex::common::{LexerConfig, OutputFormat};
use sqllex::{tokenize, Dialect, Error, Result};
use tempfile::TempDir;

pub fn test_config_file_selects_dialect() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("sqllex.toml");
    std::fs::write(
        &path,
        "dialect = \"mysql\"\noutput_format = \"json\"\nlog_level = \"sqllex=trace\"\n",
    )?;

    let config = LexerConfig::from_file(&path)?;
    config.validate()?;
    assert_eq!(config.dialect, Dialect::MySql);
    assert_eq!(config.output_format, OutputFormat::Json);

    let tokens = tokenize("`a`", config.dialect);
    assert_eq!(tokens.len(), 1);
    Ok(())
}

pub fn test_config_round_trip() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("out.toml");
    let config = LexerConfig {
        dialect: Dialect::Oracle,
        show_positions: true,
        ..LexerConfig::default()
    };
    config.to_file(&path)?;
    assert_eq!(LexerConfig::from_file(&path)?, config);
    Ok(())
}

pub fn test_invalid_config_file() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "dialect = [1, 2]\n")?;

    let result = LexerConfig::from_file(&path);
    assert!(matches!(result, Err(Error::Configuration { .. })));
    Ok(())
}

pub fn test_unknown_dialect_is_not_fatal() -> Result<()> {
    assert_eq!(Dialect::from_name("db2"), Dialect::StandardSql);
    assert!(matches!("db2".parse::<Dialect>(), Err(Error::UnknownDialect { .. })));

    let tokens = tokenize("SELECT 1", Dialect::from_name("db2"));
    assert_eq!(tokens.len(), 2);
    Ok(())
}
