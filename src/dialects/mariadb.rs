//! Диалект MariaDB
//!
//! Словарь ключевых слов используется также диалектом MySQL.

use super::{
    is_colon_label, keyword_map, lookup_keyword, max_operator_len, operator_set, Dialect,
    DialectClassifier, KeywordMap, QuoteRules,
};
use lazy_static::lazy_static;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default)]
pub struct MariaDbDialect;

lazy_static! {
    pub(super) static ref KEYWORD_MAP: KeywordMap = keyword_map(KEYWORDS);
    static ref OPERATOR_SET: HashSet<&'static str> = operator_set(OPERATORS);
    static ref MAX_OPERATOR_LEN: usize = max_operator_len(OPERATORS);
}

/// Символ идентификатора MySQL/MariaDB: ASCII буквы и цифры, `_`, `$`
/// и расширенный диапазон U+0080..U+FFFF
pub(super) fn is_extended_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '$' || ('\u{80}'..='\u{ffff}').contains(&ch)
}

/// Идентификатор может начинаться с цифры, но не может состоять только из цифр
pub(super) fn is_extended_identifier(text: &str) -> bool {
    !text.is_empty()
        && !text.starts_with('.')
        && text
            .chars()
            .all(|ch| ch == '.' || is_extended_identifier_char(ch))
        && !text.chars().all(|ch| ch.is_ascii_digit())
}

impl DialectClassifier for MariaDbDialect {
    fn dialect(&self) -> Dialect {
        Dialect::MariaDb
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
        is_extended_identifier_char(ch)
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        is_extended_identifier_char(ch)
    }

    fn is_identifier(&self, text: &str) -> bool {
        is_extended_identifier(text)
    }

    fn is_label(&self, text: &str) -> bool {
        is_colon_label(self, text)
    }

    fn quoting(&self) -> QuoteRules {
        QuoteRules {
            backtick: true,
            bracket: false,
            pound_comment: true,
            backslash_escapes: true,
        }
    }
}

const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "=", "<", ">", "<=", ">=", "<>", "!=", "<=>", "!", "&&", "||",
    ":=", "&", "|", "^", "~", "<<", ">>",
];


/// Ключевые слова MariaDB: слово -> зарезервировано
const KEYWORDS: &[(&str, bool)] = &[
    ("ACCESSIBLE", false),
    ("ACTION", false),
    ("ADD", false),
    ("ALL", false),
    ("ALTER", false),
    ("ANALYZE", false),
    ("AND", false),
    ("AS", false),
    ("ASC", false),
    ("ASENSITIVE", false),
    ("BEFORE", false),
    ("BETWEEN", false),
    ("BIGINT", false),
    ("BINARY", false),
    ("BIT", false),
    ("BLOB", false),
    ("BODY", false),
    ("BOTH", false),
    ("BY", false),
    ("CALL", false),
    ("CASCADE", false),
    ("CASE", false),
    ("CHANGE", false),
    ("CHAR", false),
    ("CHARACTER", false),
    ("CHECK", false),
    ("COLLATE", false),
    ("COLUMN", false),
    ("CONDITION", false),
    ("CONSTRAINT", false),
    ("CONTINUE", false),
    ("CONVERT", false),
    ("CREATE", false),
    ("CROSS", false),
    ("CURRENT_DATE", false),
    ("CURRENT_ROLE", false),
    ("CURRENT_TIME", false),
    ("CURRENT_TIMESTAMP", false),
    ("CURRENT_USER", false),
    ("CURSOR", false),
    ("DATABASE", false),
    ("DATABASES", false),
    ("DATE", false),
    ("DAY_HOUR", false),
    ("DAY_MICROSECOND", false),
    ("DAY_MINUTE", false),
    ("DAY_SECOND", false),
    ("DEC", false),
    ("DECIMAL", false),
    ("DECLARE", false),
    ("DEFAULT", false),
    ("DELAYED", false),
    ("DELETE", false),
    ("DESC", false),
    ("DESCRIBE", false),
    ("DETERMINISTIC", false),
    ("DISTINCT", false),
    ("DISTINCTROW", false),
    ("DIV", false),
    ("DOUBLE", false),
    ("DO_DOMAIN_IDS", false),
    ("DROP", false),
    ("DUAL", false),
    ("EACH", false),
    ("ELSE", false),
    ("ELSEIF", false),
    ("ELSIF", false),
    ("ENCLOSED", false),
    ("ENUM", false),
    ("ESCAPED", false),
    ("EXCEPT", false),
    ("EXISTS", false),
    ("EXIT", false),
    ("EXPLAIN", false),
    ("FALSE", false),
    ("FETCH", false),
    ("FLOAT", false),
    ("FLOAT4", false),
    ("FLOAT8", false),
    ("FOR", false),
    ("FORCE", false),
    ("FOREIGN", false),
    ("FROM", false),
    ("FULLTEXT", false),
    ("GENERAL", false),
    ("GOTO", false),
    ("GRANT", false),
    ("GROUP", false),
    ("HAVING", false),
    ("HIGH_PRIORITY", false),
    ("HISTORY", false),
    ("HOUR_MICROSECOND", false),
    ("HOUR_MINUTE", false),
    ("HOUR_SECOND", false),
    ("IF", false),
    ("IGNORE", false),
    ("IGNORE_DOMAIN_IDS", false),
    ("IGNORE_SERVER_IDS", false),
    ("IN", false),
    ("INDEX", false),
    ("INFILE", false),
    ("INNER", false),
    ("INOUT", false),
    ("INSENSITIVE", false),
    ("INSERT", false),
    ("INT", false),
    ("INT1", false),
    ("INT2", false),
    ("INT3", false),
    ("INT4", false),
    ("INT8", false),
    ("INTEGER", false),
    ("INTERSECT", false),
    ("INTERVAL", false),
    ("INTO", false),
    ("IS", false),
    ("ITERATE", false),
    ("JOIN", false),
    ("KEY", false),
    ("KEYS", false),
    ("KILL", false),
    ("LEADING", false),
    ("LEAVE", false),
    ("LEFT", false),
    ("LIKE", false),
    ("LIMIT", false),
    ("LINEAR", false),
    ("LINES", false),
    ("LOAD", false),
    ("LOCALTIME", false),
    ("LOCALTIMESTAMP", false),
    ("LOCK", false),
    ("LONG", false),
    ("LONGBLOB", false),
    ("LONGTEXT", false),
    ("LOOP", false),
    ("LOW_PRIORITY", false),
    ("MASTER_HEARTBEAT_PERIOD", false),
    ("MASTER_SSL_VERIFY_SERVER_CERT", false),
    ("MATCH", false),
    ("MAXVALUE", false),
    ("MEDIUMBLOB", false),
    ("MEDIUMINT", false),
    ("MEDIUMTEXT", false),
    ("MIDDLEINT", false),
    ("MINUTE_MICROSECOND", false),
    ("MINUTE_SECOND", false),
    ("MOD", false),
    ("MODIFIES", false),
    ("NATURAL", false),
    ("NO", false),
    ("NOT", false),
    ("NO_WRITE_TO_BINLOG", false),
    ("NULL", false),
    ("NUMERIC", false),
    ("ON", false),
    ("OPTIMIZE", false),
    ("OPTION", false),
    ("OPTIONALLY", false),
    ("OR", false),
    ("ORDER", false),
    ("OTHERS", false),
    ("OUT", false),
    ("OUTER", false),
    ("OUTFILE", false),
    ("OVER", false),
    ("PACKAGE", false),
    ("PAGE_CHECKSUM", false),
    ("PARSE_VCOL_EXPR", false),
    ("PARTITION", false),
    ("PERIOD", false),
    ("PRECISION", false),
    ("PRIMARY", false),
    ("PROCEDURE", false),
    ("PURGE", false),
    ("RAISE", false),
    ("RANGE", false),
    ("READ", false),
    ("READS", false),
    ("READ_WRITE", false),
    ("REAL", false),
    ("RECURSIVE", false),
    ("REFERENCES", false),
    ("REF_SYSTEM_ID", false),
    ("REGEXP", false),
    ("RELEASE", false),
    ("RENAME", false),
    ("REPEAT", false),
    ("REPLACE", false),
    ("REQUIRE", false),
    ("RESIGNAL", false),
    ("RESTRICT", false),
    ("RETURN", false),
    ("RETURNING", false),
    ("REVOKE", false),
    ("RIGHT", false),
    ("RLIKE", false),
    ("ROWS", false),
    ("ROWTYPE", false),
    ("SCHEMA", false),
    ("SCHEMAS", false),
    ("SECOND_MICROSECOND", false),
    ("SELECT", false),
    ("SENSITIVE", false),
    ("SEPARATOR", false),
    ("SET", false),
    ("SHOW", false),
    ("SIGNAL", false),
    ("SLOW", false),
    ("SMALLINT", false),
    ("SPATIAL", false),
    ("SPECIFIC", false),
    ("SQL", false),
    ("SQLEXCEPTION", false),
    ("SQLSTATE", false),
    ("SQLWARNING", false),
    ("SQL_BIG_RESULT", false),
    ("SQL_CALC_FOUND_ROWS", false),
    ("SQL_SMALL_RESULT", false),
    ("SSL", false),
    ("STARTING", false),
    ("STATS_AUTO_RECALC", false),
    ("STATS_PERSISTENT", false),
    ("STATS_SAMPLE_PAGES", false),
    ("STRAIGHT_JOIN", false),
    ("SYSTEM", false),
    ("SYSTEM_TIME", false),
    ("TABLE", false),
    ("TERMINATED", false),
    ("TEXT", false),
    ("THEN", false),
    ("TIME", false),
    ("TIMESTAMP", false),
    ("TINYBLOB", false),
    ("TINYINT", false),
    ("TINYTEXT", false),
    ("TO", false),
    ("TRAILING", false),
    ("TRIGGER", false),
    ("TRUE", false),
    ("UNDO", false),
    ("UNION", false),
    ("UNIQUE", false),
    ("UNLOCK", false),
    ("UNSIGNED", false),
    ("UPDATE", false),
    ("USAGE", false),
    ("USE", false),
    ("USING", false),
    ("UTC_DATE", false),
    ("UTC_TIME", false),
    ("UTC_TIMESTAMP", false),
    ("VALUES", false),
    ("VARBINARY", false),
    ("VARCHAR", false),
    ("VARCHARACTER", false),
    ("VARYING", false),
    ("VERSIONING", false),
    ("WHEN", false),
    ("WHERE", false),
    ("WHILE", false),
    ("WINDOW", false),
    ("WITH", false),
    ("WITHOUT", false),
    ("WRITE", false),
    ("XOR", false),
    ("YEAR_MONTH", false),
    ("ZEROFILL", false),
];
