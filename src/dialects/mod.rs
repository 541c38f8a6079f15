//! Диалекты SQL
//!
//! Каждый диалект описывает словарь ключевых слов, набор операторов,
//! синтаксис идентификаторов и меток, а также правила кавычек. Лексер
//! обращается к диалекту только через трейт [`DialectClassifier`].

mod mariadb;
mod mssql;
mod mysql;
mod oracle;
mod postgresql;
mod sqlite;
mod standard;

use crate::common::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Debug};

pub use self::mariadb::MariaDbDialect;
pub use self::mssql::MsSqlDialect;
pub use self::mysql::MySqlDialect;
pub use self::oracle::OracleDialect;
pub use self::postgresql::PostgreSqlDialect;
pub use self::sqlite::SqliteDialect;
pub use self::standard::StandardSqlDialect;

/// Поддерживаемые диалекты SQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Dialect {
    #[default]
    StandardSql,
    PostgreSql,
    Sqlite,
    MySql,
    Oracle,
    MsSql,
    MariaDb,
}

impl Dialect {
    /// Все диалекты в порядке объявления
    pub fn all() -> &'static [Dialect] {
        &[
            Dialect::StandardSql,
            Dialect::PostgreSql,
            Dialect::Sqlite,
            Dialect::MySql,
            Dialect::Oracle,
            Dialect::MsSql,
            Dialect::MariaDb,
        ]
    }

    /// Каноническое имя диалекта
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::StandardSql => "StandardSQL",
            Dialect::PostgreSql => "PostgreSQL",
            Dialect::Sqlite => "SQLite",
            Dialect::MySql => "MySQL",
            Dialect::Oracle => "Oracle",
            Dialect::MsSql => "MSSQL",
            Dialect::MariaDb => "MariaDB",
        }
    }

    /// Ищет диалект по имени или псевдониму без учета регистра
    pub fn lookup(name: &str) -> Option<Dialect> {
        let dialect = match name.trim().to_lowercase().as_str() {
            "standardsql" | "standard" | "ansi" | "sql" => Dialect::StandardSql,
            "postgresql" | "postgres" | "pg" | "pgsql" => Dialect::PostgreSql,
            "sqlite" | "sqlite3" => Dialect::Sqlite,
            "mysql" => Dialect::MySql,
            "oracle" | "plsql" => Dialect::Oracle,
            "mssql" | "sqlserver" | "tsql" => Dialect::MsSql,
            "mariadb" | "maria" => Dialect::MariaDb,
            _ => return None,
        };
        Some(dialect)
    }

    /// Разбирает имя диалекта; неизвестное имя дает `StandardSql`
    pub fn from_name(name: &str) -> Dialect {
        match Dialect::lookup(name) {
            Some(dialect) => dialect,
            None => {
                log::warn!("Unknown SQL dialect '{}', using StandardSQL", name);
                Dialect::StandardSql
            }
        }
    }

    /// Классификатор, реализующий таблицы диалекта
    pub fn classifier(&self) -> &'static dyn DialectClassifier {
        match self {
            Dialect::StandardSql => &StandardSqlDialect,
            Dialect::PostgreSql => &PostgreSqlDialect,
            Dialect::Sqlite => &SqliteDialect,
            Dialect::MySql => &MySqlDialect,
            Dialect::Oracle => &OracleDialect,
            Dialect::MsSql => &MsSqlDialect,
            Dialect::MariaDb => &MariaDbDialect,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Dialect::lookup(s).ok_or_else(|| Error::unknown_dialect(s))
    }
}

impl From<String> for Dialect {
    fn from(name: String) -> Self {
        Dialect::from_name(&name)
    }
}

impl From<Dialect> for String {
    fn from(dialect: Dialect) -> Self {
        dialect.name().to_string()
    }
}

/// Какие кавычки и комментарии диалект распознает на первом проходе
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct QuoteRules {
    /// `` `name` ``
    pub backtick: bool,
    /// `[name]`
    pub bracket: bool,
    /// `# comment`
    pub pound_comment: bool,
    /// `\'` внутри строк
    pub backslash_escapes: bool,
}

/// Таблицы классификации диалекта
pub trait DialectClassifier: Debug + Send + Sync {
    /// Диалект, который реализует классификатор
    fn dialect(&self) -> Dialect;

    /// Является ли слово ключевым (без учета регистра)
    fn is_keyword(&self, word: &str) -> bool;

    /// Является ли слово зарезервированным ключевым словом
    fn is_reserved_keyword(&self, word: &str) -> bool;

    /// Является ли текст оператором диалекта (точное совпадение)
    fn is_operator(&self, text: &str) -> bool;

    /// Длина самого длинного оператора в символах
    fn max_operator_len(&self) -> usize;

    /// Может ли символ начинать идентификатор без кавычек
    fn is_identifier_start(&self, ch: char) -> bool;

    /// Может ли символ продолжать идентификатор без кавычек
    fn is_identifier_part(&self, ch: char) -> bool;

    /// Является ли текст идентификатором без кавычек. Точка допускается
    /// после первого символа для составных имен.
    fn is_identifier(&self, text: &str) -> bool {
        let mut chars = text.chars();
        match chars.next() {
            Some(first) if self.is_identifier_start(first) => {
                chars.all(|ch| ch == '.' || self.is_identifier_part(ch))
            }
            _ => false,
        }
    }

    /// Является ли текст меткой процедурного блока
    fn is_label(&self, text: &str) -> bool;

    fn quoting(&self) -> QuoteRules {
        QuoteRules::default()
    }
}

/// Словарь ключевых слов: слово в верхнем регистре -> зарезервировано
pub(crate) type KeywordMap = HashMap<&'static str, bool>;

pub(crate) fn keyword_map(entries: &[(&'static str, bool)]) -> KeywordMap {
    entries.iter().copied().collect()
}

pub(crate) fn lookup_keyword(map: &KeywordMap, word: &str) -> Option<bool> {
    if word.is_empty() {
        return None;
    }
    map.get(word.to_uppercase().as_str()).copied()
}

pub(crate) fn operator_set(operators: &[&'static str]) -> HashSet<&'static str> {
    operators.iter().copied().collect()
}

pub(crate) fn max_operator_len(operators: &[&str]) -> usize {
    operators
        .iter()
        .map(|op| op.chars().count())
        .max()
        .unwrap_or(0)
}

/// Метка вида `<<name>>`
pub(crate) fn is_angle_label<D: DialectClassifier + ?Sized>(dialect: &D, text: &str) -> bool {
    text.chars().count() >= 5
        && text
            .strip_prefix("<<")
            .and_then(|rest| rest.strip_suffix(">>"))
            .is_some_and(|name| dialect.is_identifier(name))
}

/// Метка вида `name:`
pub(crate) fn is_colon_label<D: DialectClassifier + ?Sized>(dialect: &D, text: &str) -> bool {
    text.strip_suffix(':')
        .is_some_and(|name| !name.is_empty() && dialect.is_identifier(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_names() {
        for dialect in Dialect::all() {
            assert_eq!(Dialect::from_name(dialect.name()), *dialect);
            assert_eq!(dialect.name().parse::<Dialect>().unwrap(), *dialect);
            assert_eq!(dialect.classifier().dialect(), *dialect);
        }
    }

    #[test]
    fn test_dialect_aliases() {
        assert_eq!(Dialect::from_name("postgres"), Dialect::PostgreSql);
        assert_eq!(Dialect::from_name("PG"), Dialect::PostgreSql);
        assert_eq!(Dialect::from_name("sqlserver"), Dialect::MsSql);
        assert_eq!(Dialect::from_name("ansi"), Dialect::StandardSql);
        assert_eq!(Dialect::from_name(" mariadb "), Dialect::MariaDb);
    }

    #[test]
    fn test_unknown_dialect() {
        assert_eq!(Dialect::from_name("Informix"), Dialect::StandardSql);
        assert!(matches!(
            "Informix".parse::<Dialect>(),
            Err(Error::UnknownDialect { .. })
        ));
    }

    #[test]
    fn test_dialect_serde() {
        let json = serde_json::to_string(&Dialect::MsSql).unwrap();
        assert_eq!(json, "\"MSSQL\"");
        let parsed: Dialect = serde_json::from_str("\"sqlite\"").unwrap();
        assert_eq!(parsed, Dialect::Sqlite);
    }

    #[test]
    fn test_quoting_rules() {
        assert!(Dialect::MySql.classifier().quoting().backtick);
        assert!(Dialect::MySql.classifier().quoting().pound_comment);
        assert!(Dialect::Sqlite.classifier().quoting().backtick);
        assert!(Dialect::Sqlite.classifier().quoting().bracket);
        assert!(Dialect::MsSql.classifier().quoting().bracket);
        assert!(!Dialect::MsSql.classifier().quoting().backtick);
        assert_eq!(
            Dialect::PostgreSql.classifier().quoting(),
            QuoteRules::default()
        );
    }

    #[test]
    fn test_keywords_case_insensitive() {
        for dialect in Dialect::all() {
            let classifier = dialect.classifier();
            assert!(classifier.is_keyword("SELECT"), "{}", dialect);
            assert!(classifier.is_keyword("select"), "{}", dialect);
            assert!(!classifier.is_keyword("customer_name"), "{}", dialect);
            assert!(!classifier.is_keyword(""), "{}", dialect);
        }
    }

    #[test]
    fn test_max_operator_len() {
        assert_eq!(max_operator_len(&["+", "<=>", "¬="]), 3);
        assert_eq!(max_operator_len(&[]), 0);
        for dialect in Dialect::all() {
            assert!(dialect.classifier().max_operator_len() >= 2);
        }
    }

    #[test]
    fn test_label_helpers() {
        let pg = Dialect::PostgreSql.classifier();
        assert!(is_angle_label(pg, "<<outer>>"));
        assert!(!is_angle_label(pg, "<<>>"));
        assert!(!is_angle_label(pg, "<<1x>>"));

        let mssql = Dialect::MsSql.classifier();
        assert!(is_colon_label(mssql, "retry:"));
        assert!(!is_colon_label(mssql, ":"));
        assert!(!is_colon_label(mssql, "retry"));
    }
}
