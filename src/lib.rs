//! sqllex - токенизатор SQL с учетом диалектов
//!
//! Разбивает SQL и SQL-подобный текст, включая процедурные блоки, на плоскую
//! последовательность типизированных токенов. Поддерживаются стандартный SQL,
//! PostgreSQL, MySQL, MariaDB, SQLite, Oracle и MS-SQL. Это лексер, а не
//! парсер: синтаксическое дерево не строится и корректность SQL не проверяется.
//!
//! ```
//! use sqllex::{tokenize, Dialect, TokenKind};
//!
//! let tokens = tokenize("SELECT a FROM t WHERE b <= -1", Dialect::PostgreSql);
//! assert_eq!(tokens.tokens()[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens.to_source(), "SELECT a FROM t WHERE b <= -1");
//! ```

pub mod cli;
pub mod common;
pub mod dialects;
pub mod parser;

pub use common::error::{Error, Result};
pub use dialects::{Dialect, DialectClassifier, QuoteRules};
pub use parser::{tokenize, tokenize_with, Position, Token, TokenKind, TokenList};

/// Версия библиотеки
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
