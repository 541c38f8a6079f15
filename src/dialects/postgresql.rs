//! Диалект PostgreSQL

use super::{
    is_angle_label, keyword_map, lookup_keyword, max_operator_len, operator_set, Dialect,
    DialectClassifier, KeywordMap,
};
use lazy_static::lazy_static;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default)]
pub struct PostgreSqlDialect;

lazy_static! {
    static ref KEYWORD_MAP: KeywordMap = keyword_map(KEYWORDS);
    static ref OPERATOR_SET: HashSet<&'static str> = operator_set(OPERATORS);
    static ref MAX_OPERATOR_LEN: usize = max_operator_len(OPERATORS);
}

impl DialectClassifier for PostgreSqlDialect {
    fn dialect(&self) -> Dialect {
        Dialect::PostgreSql
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
        ch.is_ascii_alphanumeric() || ch == '_' || ch == '$'
    }

    /// `<<name>>` перед блоком PL/pgSQL
    fn is_label(&self, text: &str) -> bool {
        is_angle_label(self, text)
    }
}

const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "^", "@", "#", "&", "|", "~", "!", "!!", "=", "<", ">", "<=",
    ">=", "<>", "!=", "<<", ">>", "||", "|/", "||/", "~*", "!~", "!~*", ":=", "::",
];


/// Ключевые слова PostgreSQL: слово -> зарезервировано
const KEYWORDS: &[(&str, bool)] = &[
    ("ABORT", false),
    ("ABSOLUTE", false),
    ("ACCESS", false),
    ("ACTION", false),
    ("ADD", false),
    ("ADMIN", false),
    ("AFTER", false),
    ("AGGREGATE", false),
    ("ALL", true),
    ("ALSO", false),
    ("ALTER", false),
    ("ALWAYS", false),
    ("ANALYSE", true),
    ("ANALYZE", true),
    ("AND", true),
    ("ANY", true),
    ("ARRAY", true),
    ("AS", true),
    ("ASC", true),
    ("ASSERTION", false),
    ("ASSIGNMENT", false),
    ("ASYMMETRIC", true),
    ("AT", false),
    ("ATTACH", false),
    ("ATTRIBUTE", false),
    ("AUTHORIZATION", true),
    ("BACKWARD", false),
    ("BEFORE", false),
    ("BEGIN", false),
    ("BETWEEN", false),
    ("BIGINT", false),
    ("BINARY", true),
    ("BIT", false),
    ("BOOLEAN", false),
    ("BOTH", true),
    ("BY", false),
    ("CACHE", false),
    ("CALL", false),
    ("CALLED", false),
    ("CASCADE", false),
    ("CASCADED", false),
    ("CASE", true),
    ("CAST", true),
    ("CATALOG", false),
    ("CHAIN", false),
    ("CHAR", false),
    ("CHARACTER", false),
    ("CHARACTERISTICS", false),
    ("CHECK", true),
    ("CHECKPOINT", false),
    ("CLASS", false),
    ("CLOSE", false),
    ("CLUSTER", false),
    ("COALESCE", false),
    ("COLLATE", true),
    ("COLLATION", true),
    ("COLUMN", true),
    ("COLUMNS", false),
    ("COMMENT", false),
    ("COMMENTS", false),
    ("COMMIT", false),
    ("COMMITTED", false),
    ("CONCURRENTLY", true),
    ("CONFIGURATION", false),
    ("CONFLICT", false),
    ("CONNECTION", false),
    ("CONSTRAINT", true),
    ("CONSTRAINTS", false),
    ("CONTENT", false),
    ("CONTINUE", false),
    ("CONVERSION", false),
    ("COPY", false),
    ("COST", false),
    ("CREATE", true),
    ("CROSS", true),
    ("CSV", false),
    ("CUBE", false),
    ("CURRENT", false),
    ("CURRENT_CATALOG", true),
    ("CURRENT_DATE", true),
    ("CURRENT_ROLE", true),
    ("CURRENT_SCHEMA", true),
    ("CURRENT_TIME", true),
    ("CURRENT_TIMESTAMP", true),
    ("CURRENT_USER", true),
    ("CURSOR", false),
    ("CYCLE", false),
    ("DATA", false),
    ("DATABASE", false),
    ("DAY", false),
    ("DEALLOCATE", false),
    ("DEC", false),
    ("DECIMAL", false),
    ("DECLARE", false),
    ("DEFAULT", true),
    ("DEFAULTS", false),
    ("DEFERRABLE", true),
    ("DEFERRED", false),
    ("DEFINER", false),
    ("DELETE", false),
    ("DELIMITER", false),
    ("DELIMITERS", false),
    ("DEPENDS", false),
    ("DESC", true),
    ("DETACH", false),
    ("DICTIONARY", false),
    ("DISABLE", false),
    ("DISCARD", false),
    ("DISTINCT", true),
    ("DO", true),
    ("DOCUMENT", false),
    ("DOMAIN", false),
    ("DOUBLE", false),
    ("DROP", false),
    ("EACH", false),
    ("ELSE", true),
    ("ENABLE", false),
    ("ENCODING", false),
    ("ENCRYPTED", false),
    ("END", true),
    ("ENUM", false),
    ("ESCAPE", false),
    ("EVENT", false),
    ("EXCEPT", true),
    ("EXCLUDE", false),
    ("EXCLUDING", false),
    ("EXCLUSIVE", false),
    ("EXECUTE", false),
    ("EXISTS", false),
    ("EXPLAIN", false),
    ("EXTENSION", false),
    ("EXTERNAL", false),
    ("EXTRACT", false),
    ("FALSE", true),
    ("FAMILY", false),
    ("FETCH", true),
    ("FILTER", false),
    ("FIRST", false),
    ("FLOAT", false),
    ("FOLLOWING", false),
    ("FOR", true),
    ("FORCE", false),
    ("FOREIGN", true),
    ("FORWARD", false),
    ("FREEZE", true),
    ("FROM", true),
    ("FULL", true),
    ("FUNCTION", false),
    ("FUNCTIONS", false),
    ("GENERATED", false),
    ("GLOBAL", false),
    ("GRANT", true),
    ("GRANTED", false),
    ("GREATEST", false),
    ("GROUP", true),
    ("GROUPING", false),
    ("GROUPS", false),
    ("HANDLER", false),
    ("HAVING", true),
    ("HEADER", false),
    ("HOLD", false),
    ("HOUR", false),
    ("IDENTITY", false),
    ("IF", false),
    ("ILIKE", true),
    ("IMMEDIATE", false),
    ("IMMUTABLE", false),
    ("IMPLICIT", false),
    ("IMPORT", false),
    ("IN", true),
    ("INCLUDE", false),
    ("INCLUDING", false),
    ("INCREMENT", false),
    ("INDEX", false),
    ("INDEXES", false),
    ("INHERIT", false),
    ("INHERITS", false),
    ("INITIALLY", true),
    ("INLINE", false),
    ("INNER", true),
    ("INOUT", false),
    ("INPUT", false),
    ("INSENSITIVE", false),
    ("INSERT", false),
    ("INSTEAD", false),
    ("INT", false),
    ("INTEGER", false),
    ("INTERSECT", true),
    ("INTERVAL", false),
    ("INTO", true),
    ("INVOKER", false),
    ("IS", true),
    ("ISNULL", true),
    ("ISOLATION", false),
    ("JOIN", true),
    ("KEY", false),
    ("LABEL", false),
    ("LANGUAGE", false),
    ("LARGE", false),
    ("LAST", false),
    ("LATERAL", true),
    ("LEADING", true),
    ("LEAKPROOF", false),
    ("LEAST", false),
    ("LEFT", true),
    ("LEVEL", false),
    ("LIKE", true),
    ("LIMIT", true),
    ("LISTEN", false),
    ("LOAD", false),
    ("LOCAL", false),
    ("LOCALTIME", true),
    ("LOCALTIMESTAMP", true),
    ("LOCATION", false),
    ("LOCK", false),
    ("LOCKED", false),
    ("LOGGED", false),
    ("MAPPING", false),
    ("MATCH", false),
    ("MATERIALIZED", false),
    ("MAXVALUE", false),
    ("METHOD", false),
    ("MINUTE", false),
    ("MINVALUE", false),
    ("MODE", false),
    ("MONTH", false),
    ("MOVE", false),
    ("NAME", false),
    ("NAMES", false),
    ("NATIONAL", false),
    ("NATURAL", true),
    ("NCHAR", false),
    ("NEW", false),
    ("NEXT", false),
    ("NO", false),
    ("NONE", false),
    ("NOT", true),
    ("NOTHING", false),
    ("NOTIFY", false),
    ("NOTNULL", true),
    ("NOWAIT", false),
    ("NULL", true),
    ("NULLIF", false),
    ("NULLS", false),
    ("NUMERIC", false),
    ("OBJECT", false),
    ("OF", false),
    ("OFF", false),
    ("OFFSET", true),
    ("OIDS", false),
    ("OLD", false),
    ("ON", true),
    ("ONLY", true),
    ("OPERATOR", false),
    ("OPTION", false),
    ("OPTIONS", false),
    ("OR", true),
    ("ORDER", true),
    ("ORDINALITY", false),
    ("OTHERS", false),
    ("OUT", false),
    ("OUTER", true),
    ("OVER", false),
    ("OVERLAPS", true),
    ("OVERLAY", false),
    ("OVERRIDING", false),
    ("OWNED", false),
    ("OWNER", false),
    ("PARALLEL", false),
    ("PARSER", false),
    ("PARTIAL", false),
    ("PARTITION", false),
    ("PASSING", false),
    ("PASSWORD", false),
    ("PLACING", true),
    ("PLANS", false),
    ("POLICY", false),
    ("POSITION", false),
    ("PRECEDING", false),
    ("PRECISION", false),
    ("PREPARE", false),
    ("PREPARED", false),
    ("PRESERVE", false),
    ("PRIMARY", true),
    ("PRIOR", false),
    ("PRIVILEGES", false),
    ("PROCEDURAL", false),
    ("PROCEDURE", false),
    ("PROCEDURES", false),
    ("PROGRAM", false),
    ("PUBLICATION", false),
    ("QUOTE", false),
    ("RANGE", false),
    ("READ", false),
    ("REAL", false),
    ("REASSIGN", false),
    ("RECHECK", false),
    ("RECURSIVE", false),
    ("REF", false),
    ("REFERENCES", true),
    ("REFERENCING", false),
    ("REFRESH", false),
    ("REINDEX", false),
    ("RELATIVE", false),
    ("RELEASE", false),
    ("RENAME", false),
    ("REPEATABLE", false),
    ("REPLACE", false),
    ("REPLICA", false),
    ("RESET", false),
    ("RESTART", false),
    ("RESTRICT", false),
    ("RETURNING", true),
    ("RETURNS", false),
    ("REVOKE", false),
    ("RIGHT", true),
    ("ROLE", false),
    ("ROLLBACK", false),
    ("ROLLUP", false),
    ("ROUTINE", false),
    ("ROUTINES", false),
    ("ROW", false),
    ("ROWS", false),
    ("RULE", false),
    ("SAVEPOINT", false),
    ("SCHEMA", false),
    ("SCHEMAS", false),
    ("SCROLL", false),
    ("SEARCH", false),
    ("SECOND", false),
    ("SECURITY", false),
    ("SELECT", true),
    ("SEQUENCE", false),
    ("SEQUENCES", false),
    ("SERIALIZABLE", false),
    ("SERVER", false),
    ("SESSION", false),
    ("SESSION_USER", true),
    ("SET", false),
    ("SETOF", false),
    ("SETS", false),
    ("SHARE", false),
    ("SHOW", false),
    ("SIMILAR", true),
    ("SIMPLE", false),
    ("SKIP", false),
    ("SMALLINT", false),
    ("SNAPSHOT", false),
    ("SOME", true),
    ("SQL", false),
    ("STABLE", false),
    ("STANDALONE", false),
    ("START", false),
    ("STATEMENT", false),
    ("STATISTICS", false),
    ("STDIN", false),
    ("STDOUT", false),
    ("STORAGE", false),
    ("STORED", false),
    ("STRICT", false),
    ("STRIP", false),
    ("SUBSCRIPTION", false),
    ("SUBSTRING", false),
    ("SUPPORT", false),
    ("SYMMETRIC", true),
    ("SYSID", false),
    ("SYSTEM", false),
    ("TABLE", true),
    ("TABLES", false),
    ("TABLESAMPLE", true),
    ("TABLESPACE", false),
    ("TEMP", false),
    ("TEMPLATE", false),
    ("TEMPORARY", false),
    ("TEXT", false),
    ("THEN", true),
    ("TIES", false),
    ("TIME", false),
    ("TIMESTAMP", false),
    ("TO", true),
    ("TRAILING", true),
    ("TRANSACTION", false),
    ("TRANSFORM", false),
    ("TREAT", false),
    ("TRIGGER", false),
    ("TRIM", false),
    ("TRUE", true),
    ("TRUNCATE", false),
    ("TRUSTED", false),
    ("TYPE", false),
    ("TYPES", false),
    ("UNBOUNDED", false),
    ("UNCOMMITTED", false),
    ("UNENCRYPTED", false),
    ("UNION", true),
    ("UNIQUE", true),
    ("UNKNOWN", false),
    ("UNLISTEN", false),
    ("UNLOGGED", false),
    ("UNTIL", false),
    ("UPDATE", false),
    ("USER", true),
    ("USING", true),
    ("VACUUM", false),
    ("VALID", false),
    ("VALIDATE", false),
    ("VALIDATOR", false),
    ("VALUE", false),
    ("VALUES", false),
    ("VARCHAR", false),
    ("VARIADIC", true),
    ("VARYING", false),
    ("VERBOSE", true),
    ("VERSION", false),
    ("VIEW", false),
    ("VIEWS", false),
    ("VOLATILE", false),
    ("WHEN", true),
    ("WHERE", true),
    ("WHITESPACE", false),
    ("WINDOW", true),
    ("WITH", true),
    ("WITHIN", false),
    ("WITHOUT", false),
    ("WORK", false),
    ("WRAPPER", false),
    ("WRITE", false),
    ("XML", false),
    ("XMLATTRIBUTES", false),
    ("XMLCONCAT", false),
    ("XMLELEMENT", false),
    ("XMLEXISTS", false),
    ("XMLFOREST", false),
    ("XMLNAMESPACES", false),
    ("XMLPARSE", false),
    ("XMLPI", false),
    ("XMLROOT", false),
    ("XMLSERIALIZE", false),
    ("XMLTABLE", false),
    ("YEAR", false),
    ("YES", false),
    ("ZONE", false),
];
