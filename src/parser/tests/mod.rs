//! Тесты для лексического анализатора sqllex

pub mod classify_tests;
