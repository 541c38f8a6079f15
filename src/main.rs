//! Главный исполняемый файл sqllex

use anyhow::Context;
use sqllex::cli::Cli;
use sqllex::common::DEFAULT_LOG_LEVEL;

fn main() -> anyhow::Result<()> {
    let cli = Cli::init();
    let config = cli
        .load_config()
        .context("failed to load configuration")?;

    init_logging(&config.log_level);
    log::debug!("Configuration: {:?}", config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli.execute(&config, &mut out)?;

    Ok(())
}

/// Настраивает env_logger: явный уровень из флага или конфигурации
/// важнее `RUST_LOG`
fn init_logging(level: &str) {
    let filter = if level != DEFAULT_LOG_LEVEL {
        level.to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string())
    };

    let _ = env_logger::Builder::new()
        .parse_filters(&filter)
        .format_timestamp(None)
        .try_init();
}
