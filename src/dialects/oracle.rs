//! Диалект Oracle
//!
//! PL/SQL метки имеют вид `<<name>>`, внешнее соединение записывается как `(+)`.

use super::{
    is_angle_label, keyword_map, lookup_keyword, max_operator_len, operator_set, Dialect,
    DialectClassifier, KeywordMap,
};
use lazy_static::lazy_static;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default)]
pub struct OracleDialect;

lazy_static! {
    static ref KEYWORD_MAP: KeywordMap = keyword_map(KEYWORDS);
    static ref OPERATOR_SET: HashSet<&'static str> = operator_set(OPERATORS);
    static ref MAX_OPERATOR_LEN: usize = max_operator_len(OPERATORS);
}

impl DialectClassifier for OracleDialect {
    fn dialect(&self) -> Dialect {
        Dialect::Oracle
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
        ch.is_ascii_alphabetic()
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_ascii_alphanumeric() || matches!(ch, '_' | '#' | '$')
    }

    fn is_label(&self, text: &str) -> bool {
        is_angle_label(self, text)
    }
}

const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "=", "<", ">", "<=", ">=", "<>", "!=", "^=", "¬=", "||", ":=",
    "(+)",
];


/// Ключевые слова Oracle: слово -> зарезервировано
const KEYWORDS: &[(&str, bool)] = &[
    ("ABORT", false),
    ("ACCEPT", false),
    ("ACCESS", true),
    ("ADD", true),
    ("ADMIN", false),
    ("AFTER", false),
    ("ALL", true),
    ("ALLOCATE", false),
    ("ALTER", true),
    ("ANALYZE", false),
    ("AND", true),
    ("ANY", true),
    ("ARCHIVE", false),
    ("ARCHIVELOG", false),
    ("ARRAY", false),
    ("ARRAYLEN", true),
    ("AS", true),
    ("ASC", true),
    ("ASSERT", false),
    ("ASSIGN", false),
    ("AT", false),
    ("AUDIT", true),
    ("AUTHORIZATION", false),
    ("AVG", false),
    ("BACKUP", false),
    ("BASE_TABLE", false),
    ("BECOME", false),
    ("BEFORE", false),
    ("BEGIN", false),
    ("BETWEEN", true),
    ("BINARY_INTEGER", false),
    ("BLOCK", false),
    ("BODY", false),
    ("BOOLEAN", false),
    ("BY", true),
    ("CACHE", false),
    ("CANCEL", false),
    ("CASCADE", false),
    ("CASE", false),
    ("CHANGE", false),
    ("CHAR", true),
    ("CHARACTER", false),
    ("CHAR_BASE", false),
    ("CHECK", true),
    ("CHECKPOINT", false),
    ("CLOSE", false),
    ("CLUSTER", true),
    ("CLUSTERS", false),
    ("COBOL", false),
    ("COLAUTH", false),
    ("COLUMN", true),
    ("COLUMNS", false),
    ("COMMENT", true),
    ("COMMIT", false),
    ("COMPILE", false),
    ("COMPRESS", true),
    ("CONNECT", true),
    ("CONSTANT", false),
    ("CONSTRAINT", false),
    ("CONSTRAINTS", false),
    ("CONTENTS", false),
    ("CONTINUE", false),
    ("CONTROLFILE", false),
    ("COUNT", false),
    ("CRASH", false),
    ("CREATE", true),
    ("CURRENT", true),
    ("CURRVAL", false),
    ("CURSOR", false),
    ("CYCLE", false),
    ("DATABASE", false),
    ("DATAFILE", false),
    ("DATA_BASE", false),
    ("DATE", true),
    ("DBA", false),
    ("DEBUGOFF", false),
    ("DEBUGON", false),
    ("DEC", false),
    ("DECIMAL", true),
    ("DECLARE", false),
    ("DEFAULT", true),
    ("DEFINITION", false),
    ("DELAY", false),
    ("DELETE", true),
    ("DELTA", false),
    ("DESC", true),
    ("DIGITS", false),
    ("DISABLE", false),
    ("DISMOUNT", false),
    ("DISPOSE", false),
    ("DISTINCT", true),
    ("DO", false),
    ("DOUBLE", false),
    ("DROP", true),
    ("DUMP", false),
    ("EACH", false),
    ("ELSE", true),
    ("ELSIF", false),
    ("ENABLE", false),
    ("END", false),
    ("ENTRY", false),
    ("ESCAPE", false),
    ("EVENTS", false),
    ("EXCEPT", false),
    ("EXCEPTION", false),
    ("EXCEPTIONS", false),
    ("EXCEPTION_INIT", false),
    ("EXCLUSIVE", true),
    ("EXEC", false),
    ("EXECUTE", false),
    ("EXISTS", true),
    ("EXIT", false),
    ("EXPLAIN", false),
    ("EXTENT", false),
    ("EXTERNALLY", false),
    ("FALSE", false),
    ("FETCH", false),
    ("FILE", true),
    ("FLOAT", true),
    ("FLUSH", false),
    ("FOR", true),
    ("FORCE", false),
    ("FOREIGN", false),
    ("FORM", false),
    ("FORTRAN", false),
    ("FOUND", false),
    ("FREELIST", false),
    ("FREELISTS", false),
    ("FROM", true),
    ("FUNCTION", false),
    ("GENERIC", false),
    ("GO", false),
    ("GOTO", false),
    ("GRANT", true),
    ("GROUP", true),
    ("GROUPS", false),
    ("HAVING", true),
    ("IDENTIFIED", true),
    ("IF", false),
    ("IMMEDIATE", true),
    ("IN", true),
    ("INCLUDING", false),
    ("INCREMENT", true),
    ("INDEX", true),
    ("INDEXES", false),
    ("INDICATOR", false),
    ("INITIAL", true),
    ("INITRANS", false),
    ("INSERT", true),
    ("INSTANCE", false),
    ("INT", false),
    ("INTEGER", true),
    ("INTERSECT", true),
    ("INTO", true),
    ("IS", true),
    ("KEY", false),
    ("LANGUAGE", false),
    ("LAYER", false),
    ("LEVEL", true),
    ("LIKE", true),
    ("LIMITED", false),
    ("LINK", false),
    ("LISTS", false),
    ("LOCK", true),
    ("LOGFILE", false),
    ("LONG", true),
    ("LOOP", false),
    ("MANAGE", false),
    ("MANUAL", false),
    ("MAX", false),
    ("MAXDATAFILES", false),
    ("MAXEXTENTS", true),
    ("MAXINSTANCES", false),
    ("MAXLOGFILES", false),
    ("MAXLOGHISTORY", false),
    ("MAXLOGMEMBERS", false),
    ("MAXTRANS", false),
    ("MAXVALUE", false),
    ("MIN", false),
    ("MINEXTENTS", false),
    ("MINUS", true),
    ("MINVALUE", false),
    ("MLSLABEL", false),
    ("MOD", false),
    ("MODE", true),
    ("MODIFY", true),
    ("MODULE", false),
    ("MOUNT", false),
    ("NATURAL", false),
    ("NEW", false),
    ("NEXT", false),
    ("NEXTVAL", false),
    ("NOARCHIVELOG", false),
    ("NOAUDIT", true),
    ("NOCACHE", false),
    ("NOCOMPRESS", true),
    ("NOCYCLE", false),
    ("NOMAXVALUE", false),
    ("NOMINVALUE", false),
    ("NONE", false),
    ("NOORDER", false),
    ("NORESETLOGS", false),
    ("NORMAL", false),
    ("NOSORT", false),
    ("NOT", true),
    ("NOTFOUND", true),
    ("NOWAIT", true),
    ("NULL", true),
    ("NUMBER", true),
    ("NUMBER_BASE", false),
    ("NUMERIC", false),
    ("OF", true),
    ("OFF", false),
    ("OFFLINE", true),
    ("OLD", false),
    ("ON", true),
    ("ONLINE", true),
    ("ONLY", false),
    ("OPEN", false),
    ("OPTIMAL", false),
    ("OPTION", true),
    ("OR", true),
    ("ORDER", true),
    ("OTHERS", false),
    ("OUT", false),
    ("OWN", false),
    ("PACKAGE", false),
    ("PARALLEL", false),
    ("PARTITION", false),
    ("PCTFREE", true),
    ("PCTINCREASE", false),
    ("PCTUSED", false),
    ("PLAN", false),
    ("PLI", false),
    ("POSITIVE", false),
    ("PRAGMA", false),
    ("PRECISION", false),
    ("PRIMARY", false),
    ("PRIOR", true),
    ("PRIVATE", false),
    ("PRIVILEGES", true),
    ("PROCEDURE", false),
    ("PROFILE", false),
    ("PUBLIC", true),
    ("QUOTA", false),
    ("RAISE", false),
    ("RANGE", false),
    ("RAW", true),
    ("READ", false),
    ("REAL", false),
    ("RECORD", false),
    ("RECOVER", false),
    ("REFERENCES", false),
    ("REFERENCING", false),
    ("RELEASE", false),
    ("REMR", false),
    ("RENAME", true),
    ("RESETLOGS", false),
    ("RESOURCE", true),
    ("RESTRICTED", false),
    ("RETURN", false),
    ("REUSE", false),
    ("REVERSE", false),
    ("REVOKE", true),
    ("ROLE", false),
    ("ROLES", false),
    ("ROLLBACK", false),
    ("ROW", true),
    ("ROWID", true),
    ("ROWLABEL", true),
    ("ROWNUM", true),
    ("ROWS", true),
    ("ROWTYPE", false),
    ("RUN", false),
    ("SAVEPOINT", false),
    ("SCHEMA", false),
    ("SCN", false),
    ("SECTION", false),
    ("SEGMENT", false),
    ("SELECT", true),
    ("SEPARATE", false),
    ("SEQUENCE", false),
    ("SESSION", true),
    ("SET", true),
    ("SHARE", true),
    ("SHARED", false),
    ("SIZE", true),
    ("SMALLINT", true),
    ("SNAPSHOT", false),
    ("SOME", false),
    ("SORT", false),
    ("SPACE", false),
    ("SQL", false),
    ("SQLBUF", true),
    ("SQLCODE", false),
    ("SQLERRM", false),
    ("SQLERROR", false),
    ("SQLSTATE", false),
    ("START", true),
    ("STATEMENT", false),
    ("STATEMENT_ID", false),
    ("STATISTICS", false),
    ("STDDEV", false),
    ("STOP", false),
    ("STORAGE", false),
    ("SUBTYPE", false),
    ("SUCCESSFUL", true),
    ("SUM", false),
    ("SWITCH", false),
    ("SYNONYM", true),
    ("SYSDATE", true),
    ("SYSTEM", false),
    ("TABAUTH", false),
    ("TABLE", true),
    ("TABLES", false),
    ("TABLESPACE", false),
    ("TASK", false),
    ("TEMPORARY", false),
    ("TERMINATE", false),
    ("THEN", true),
    ("THREAD", false),
    ("TIME", false),
    ("TO", true),
    ("TRACING", false),
    ("TRANSACTION", false),
    ("TRIGGER", true),
    ("TRIGGERS", false),
    ("TRUE", false),
    ("TRUNCATE", false),
    ("TYPE", false),
    ("UID", true),
    ("UNDER", false),
    ("UNION", true),
    ("UNIQUE", true),
    ("UNLIMITED", false),
    ("UNTIL", false),
    ("UPDATE", true),
    ("USE", false),
    ("USER", true),
    ("USING", false),
    ("VALIDATE", true),
    ("VALUES", true),
    ("VARCHAR", true),
    ("VARCHAR2", true),
    ("VARIANCE", false),
    ("VIEW", true),
    ("VIEWS", false),
    ("WHEN", false),
    ("WHENEVER", true),
    ("WHERE", true),
    ("WHILE", false),
    ("WITH", true),
    ("WORK", false),
    ("WRITE", false),
    ("XOR", false),
];
