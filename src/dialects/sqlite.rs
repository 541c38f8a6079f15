//! Диалект SQLite

use super::{
    keyword_map, lookup_keyword, max_operator_len, operator_set, Dialect, DialectClassifier,
    KeywordMap, QuoteRules,
};
use lazy_static::lazy_static;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteDialect;

lazy_static! {
    static ref KEYWORD_MAP: KeywordMap = keyword_map(KEYWORDS);
    static ref OPERATOR_SET: HashSet<&'static str> = operator_set(OPERATORS);
    static ref MAX_OPERATOR_LEN: usize = max_operator_len(OPERATORS);
}

impl DialectClassifier for SqliteDialect {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    fn is_keyword(&self, word: &str) -> bool {
        lookup_keyword(&KEYWORD_MAP, word).is_some()
    }

    fn is_reserved_keyword(&self, word: &str) -> bool {
        lookup_keyword(&KEYWORD_MAP, word).unwrap_or(false)
    }

    fn is_operator(&self, text: &str) -> bool {
        OPERATOR_SET.contains(text)
    }

    fn max_operator_len(&self) -> usize {
        *MAX_OPERATOR_LEN
    }

    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_ascii_alphabetic() || ch == '_'
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_ascii_alphanumeric() || ch == '_'
    }

    /// SQLite не знает процедурных меток
    fn is_label(&self, _text: &str) -> bool {
        false
    }

    fn quoting(&self) -> QuoteRules {
        QuoteRules {
            backtick: true,
            bracket: true,
            ..QuoteRules::default()
        }
    }
}

const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "~", "&", "|", "||", "<<", ">>", "=", "==", "<", ">", "<=",
    ">=", "<>", "!=",
];


/// Ключевые слова SQLite: слово -> зарезервировано
const KEYWORDS: &[(&str, bool)] = &[
    ("ABORT", false),
    ("ACTION", false),
    ("ADD", false),
    ("AFTER", false),
    ("ALL", false),
    ("ALTER", false),
    ("ANALYZE", false),
    ("AND", false),
    ("AS", false),
    ("ASC", false),
    ("ATTACH", false),
    ("AUTOINCREMENT", false),
    ("BEFORE", false),
    ("BEGIN", false),
    ("BETWEEN", false),
    ("BY", false),
    ("CASCADE", false),
    ("CASE", false),
    ("CAST", false),
    ("CHECK", false),
    ("COLLATE", false),
    ("COLUMN", false),
    ("COMMIT", false),
    ("CONFLICT", false),
    ("CONSTRAINT", false),
    ("CREATE", false),
    ("CROSS", false),
    ("CURRENT", false),
    ("CURRENT_DATE", false),
    ("CURRENT_TIME", false),
    ("CURRENT_TIMESTAMP", false),
    ("DATABASE", false),
    ("DEFAULT", false),
    ("DEFERRABLE", false),
    ("DEFERRED", false),
    ("DELETE", false),
    ("DESC", false),
    ("DETACH", false),
    ("DISTINCT", false),
    ("DO", false),
    ("DROP", false),
    ("EACH", false),
    ("ELSE", false),
    ("END", false),
    ("ESCAPE", false),
    ("EXCEPT", false),
    ("EXCLUDE", false),
    ("EXCLUSIVE", false),
    ("EXISTS", false),
    ("EXPLAIN", false),
    ("FAIL", false),
    ("FILTER", false),
    ("FIRST", false),
    ("FOLLOWING", false),
    ("FOR", false),
    ("FOREIGN", false),
    ("FROM", false),
    ("FULL", false),
    ("GLOB", false),
    ("GROUP", false),
    ("GROUPS", false),
    ("HAVING", false),
    ("IF", false),
    ("IGNORE", false),
    ("IMMEDIATE", false),
    ("IN", false),
    ("INDEX", false),
    ("INDEXED", false),
    ("INITIALLY", false),
    ("INNER", false),
    ("INSERT", false),
    ("INSTEAD", false),
    ("INTERSECT", false),
    ("INTO", false),
    ("IS", false),
    ("ISNULL", false),
    ("JOIN", false),
    ("KEY", false),
    ("LAST", false),
    ("LEFT", false),
    ("LIKE", false),
    ("LIMIT", false),
    ("MATCH", false),
    ("NATURAL", false),
    ("NO", false),
    ("NOT", false),
    ("NOTHING", false),
    ("NOTNULL", false),
    ("NULL", false),
    ("NULLS", false),
    ("OF", false),
    ("OFFSET", false),
    ("ON", false),
    ("OR", false),
    ("ORDER", false),
    ("OTHERS", false),
    ("OUTER", false),
    ("OVER", false),
    ("PARTITION", false),
    ("PLAN", false),
    ("PRAGMA", false),
    ("PRECEDING", false),
    ("PRIMARY", false),
    ("QUERY", false),
    ("RAISE", false),
    ("RANGE", false),
    ("RECURSIVE", false),
    ("REFERENCES", false),
    ("REGEXP", false),
    ("REINDEX", false),
    ("RELEASE", false),
    ("RENAME", false),
    ("REPLACE", false),
    ("RESTRICT", false),
    ("RIGHT", false),
    ("ROLLBACK", false),
    ("ROW", false),
    ("ROWS", false),
    ("SAVEPOINT", false),
    ("SELECT", false),
    ("SET", false),
    ("TABLE", false),
    ("TEMP", false),
    ("TEMPORARY", false),
    ("THEN", false),
    ("TIES", false),
    ("TO", false),
    ("TRANSACTION", false),
    ("TRIGGER", false),
    ("UNBOUNDED", false),
    ("UNION", false),
    ("UNIQUE", false),
    ("UPDATE", false),
    ("USING", false),
    ("VACUUM", false),
    ("VALUES", false),
    ("VIEW", false),
    ("VIRTUAL", false),
    ("WHEN", false),
    ("WHERE", false),
    ("WINDOW", false),
    ("WITH", false),
    ("WITHOUT", false),
];
