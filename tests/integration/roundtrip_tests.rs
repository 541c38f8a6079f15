//! Свойства, которые выполняются для любого входа

use super::common::SqlGenerator;
use sqllex::parser::{classify, scan};
use sqllex::{tokenize, Dialect, Result, TokenKind};

/// Исходный текст восстанавливается байт в байт
pub fn test_random_round_trip() -> Result<()> {
    let mut generator = SqlGenerator::new(42);
    for _ in 0..300 {
        let input = generator.generate(12);
        for dialect in Dialect::all() {
            let tokens = tokenize(&input, *dialect);
            assert_eq!(tokens.to_source(), input, "{} / {:?}", dialect, input);
        }
    }
    Ok(())
}

/// В выходе нет пробельных токенов и пустых значений
pub fn test_random_no_whitespace_tokens() -> Result<()> {
    let mut generator = SqlGenerator::new(7);
    for _ in 0..300 {
        let input = generator.generate(10);
        for dialect in Dialect::all() {
            for token in &tokenize(&input, *dialect) {
                assert_ne!(token.kind, TokenKind::Whitespace, "{:?}", input);
                assert!(!token.value.is_empty(), "{:?}", input);
                assert!(
                    token.leading_whitespace.chars().all(|ch| ch.is_ascii_whitespace()),
                    "{:?}",
                    input
                );
            }
        }
    }
    Ok(())
}

/// Повторная классификация ничего не меняет
pub fn test_random_classification_idempotent() -> Result<()> {
    let mut generator = SqlGenerator::new(2024);
    for _ in 0..200 {
        let input = generator.generate(10);
        for dialect in Dialect::all() {
            let classifier = dialect.classifier();
            let mut raw = scan(&input, classifier.quoting());
            let once = classify(&mut raw, classifier);
            let twice = classify(&mut once.clone(), classifier);
            assert_eq!(once, twice, "{} / {:?}", dialect, input);
        }
    }
    Ok(())
}

/// Позиция токена указывает на начало его значения
pub fn test_random_positions() -> Result<()> {
    let mut generator = SqlGenerator::new(99);
    for _ in 0..200 {
        let input = generator.generate(8);
        for dialect in Dialect::all() {
            for token in &tokenize(&input, *dialect) {
                let start = token.position.offset;
                assert_eq!(&input[start..start + token.value.len()], token.value);

                let line = input[..start].matches('\n').count() + 1;
                assert_eq!(token.position.line, line, "{:?}", input);
            }
        }
    }
    Ok(())
}
