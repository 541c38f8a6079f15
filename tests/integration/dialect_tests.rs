//! Различия между диалектами на реальных запросах

use super::common::{first_of, lex, tok, values};
use sqllex::{tokenize, Dialect, Result, TokenKind};

pub fn test_postgresql_query() -> Result<()> {
    let sql = "SELECT o.id::text, o.total * -1 FROM orders o WHERE o.note !~* 'x' AND o.id = $1;";
    let tokens = tokenize(sql, Dialect::PostgreSql);

    assert_eq!(
        values(&tokens),
        vec![
            "SELECT", "o.id", "::", "text", ",", "o.total", "*", "-1", "FROM", "orders", "o",
            "WHERE", "o.note", "!~*", "'x'", "AND", "o.id", "=", "$1", ";",
        ]
    );
    assert_eq!(first_of(&tokens, TokenKind::BindParameter), Some("$1".into()));
    assert_eq!(first_of(&tokens, TokenKind::Numeric), Some("-1".into()));
    assert_eq!(tokens.to_source(), sql);
    Ok(())
}

pub fn test_mysql_query() -> Result<()> {
    let sql = "# report\nSELECT `order id`, data->>'$.k' FROM t WHERE a <=> b AND s = 'it\\'s';";
    let tokens = tokenize(sql, Dialect::MySql);

    assert_eq!(tokens.tokens()[0].kind, TokenKind::LineComment);
    assert_eq!(tokens.tokens()[0].value, "# report");
    assert_eq!(first_of(&tokens, TokenKind::BacktickQuoted), Some("`order id`".into()));
    assert!(values(&tokens).contains(&"->>".to_string()));
    assert!(values(&tokens).contains(&"<=>".to_string()));
    assert!(values(&tokens).contains(&"'it\\'s'".to_string()));
    assert_eq!(tokens.to_source(), sql);
    Ok(())
}

pub fn test_mariadb_shares_quoting_with_mysql() -> Result<()> {
    let sql = "SELECT `a` FROM t # tail";
    let mysql: Vec<_> = lex(sql, Dialect::MySql).into_iter().map(|(kind, _)| kind).collect();
    let mariadb: Vec<_> = lex(sql, Dialect::MariaDb).into_iter().map(|(kind, _)| kind).collect();
    assert_eq!(mysql, mariadb);
    Ok(())
}

pub fn test_mssql_query() -> Result<()> {
    let sql = "SELECT [first name] FROM #people WHERE @limit >= 10 AND x !< 3";
    assert_eq!(
        lex(sql, Dialect::MsSql),
        vec![
            tok(TokenKind::Keyword, "SELECT"),
            tok(TokenKind::BracketQuoted, "[first name]"),
            tok(TokenKind::Keyword, "FROM"),
            tok(TokenKind::Identifier, "#people"),
            tok(TokenKind::Keyword, "WHERE"),
            tok(TokenKind::Identifier, "@limit"),
            tok(TokenKind::Operator, ">="),
            tok(TokenKind::Numeric, "10"),
            tok(TokenKind::Keyword, "AND"),
            tok(TokenKind::Identifier, "x"),
            tok(TokenKind::Operator, "!<"),
            tok(TokenKind::Numeric, "3"),
        ]
    );
    Ok(())
}

pub fn test_sqlite_quoting() -> Result<()> {
    let sql = "SELECT [a], `b`, \"c\" FROM t WHERE x == ?1";
    let tokens = tokenize(sql, Dialect::Sqlite);
    let quoted: Vec<TokenKind> = tokens
        .iter()
        .map(|t| t.kind)
        .filter(|kind| kind.is_quoted())
        .collect();
    assert_eq!(
        quoted,
        vec![
            TokenKind::BracketQuoted,
            TokenKind::BacktickQuoted,
            TokenKind::DoubleQuoted
        ]
    );
    assert!(values(&tokens).contains(&"==".to_string()));
    assert_eq!(first_of(&tokens, TokenKind::BindParameter), Some("?1".into()));
    Ok(())
}

pub fn test_oracle_query() -> Result<()> {
    let sql = "SELECT e.name_col FROM emp e, dept d WHERE e.dept_id = d.id(+) AND e.sal ¬= :min_sal";
    let tokens = tokenize(sql, Dialect::Oracle);

    assert!(values(&tokens).contains(&"(+)".to_string()));
    assert!(values(&tokens).contains(&"¬=".to_string()));
    assert_eq!(first_of(&tokens, TokenKind::BindParameter), Some(":min_sal".into()));
    assert_eq!(tokens.to_source(), sql);
    Ok(())
}

pub fn test_same_text_different_dialects() -> Result<()> {
    // `#` - комментарий только в MySQL/MariaDB
    assert_eq!(lex("#x", Dialect::MySql), vec![tok(TokenKind::LineComment, "#x")]);
    assert_eq!(lex("#x", Dialect::MsSql), vec![tok(TokenKind::Identifier, "#x")]);

    // Квадратные скобки - кавычки только в MS-SQL и SQLite
    assert_eq!(
        lex("[x]", Dialect::MsSql),
        vec![tok(TokenKind::BracketQuoted, "[x]")]
    );
    assert_eq!(values(&tokenize("[x]", Dialect::PostgreSql)), vec!["[", "x", "]"]);
    Ok(())
}
