//! Диалект MySQL
//!
//! Использует словарь ключевых слов MariaDB и добавляет JSON операторы `->` и `->>`.

use super::mariadb::{is_extended_identifier, is_extended_identifier_char, KEYWORD_MAP};
use super::{
    is_colon_label, lookup_keyword, max_operator_len, operator_set, Dialect, DialectClassifier,
    QuoteRules,
};
use lazy_static::lazy_static;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlDialect;

lazy_static! {
    static ref OPERATOR_SET: HashSet<&'static str> = operator_set(OPERATORS);
    static ref MAX_OPERATOR_LEN: usize = max_operator_len(OPERATORS);
}

const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "=", "<", ">", "<=", ">=", "<>", "!=", "<=>", "!", "&&", "||",
    ":=", "&", "|", "^", "~", "<<", ">>", "->", "->>",
];

impl DialectClassifier for MySqlDialect {
    fn dialect(&self) -> Dialect {
        Dialect::MySql
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialects::MariaDbDialect;

    #[test]
    fn test_mysql_shares_mariadb_keywords() {
        let mysql = MySqlDialect;
        let maria = MariaDbDialect;
        for word in ["select", "DIV", "straight_join", "orders"] {
            assert_eq!(mysql.is_keyword(word), maria.is_keyword(word), "{}", word);
        }
    }

    #[test]
    fn test_mysql_json_operators() {
        let mysql = MySqlDialect;
        assert!(mysql.is_operator("->"));
        assert!(mysql.is_operator("->>"));
        assert!(mysql.is_operator("<=>"));
        assert!(!MariaDbDialect.is_operator("->"));
    }
}
