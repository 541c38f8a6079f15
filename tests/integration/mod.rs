//! Интеграционные тесты для sqllex
//!
//! Проверяют токенизацию целиком: все три прохода, словари диалектов,
//! конфигурацию и восстановление исходного текста.

pub mod common;
pub mod config_tests;
pub mod dialect_tests;
pub mod procedural_tests;
pub mod roundtrip_tests;

// Re-export common utilities
pub use common::*;
