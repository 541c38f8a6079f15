//! Процедурные блоки: метки, присваивания, параметры

use super::common::{first_of, lex, tok};
use sqllex::{tokenize, Dialect, Result, TokenKind};

pub fn test_plpgsql_block() -> Result<()> {
    let sql = "<<main>>\nDECLARE\n  cnt integer := 0;\nBEGIN\n  cnt := cnt + 1;\nEND main;\n";
    let tokens = tokenize(sql, Dialect::PostgreSql);

    assert_eq!(tokens.tokens()[0].kind, TokenKind::Label);
    assert_eq!(tokens.tokens()[0].value, "<<main>>");
    let assignments = tokens.iter().filter(|t| t.value == ":=").count();
    assert_eq!(assignments, 2);
    assert_eq!(tokens.trailing_whitespace(), "\n");
    assert_eq!(tokens.to_source(), sql);
    Ok(())
}

pub fn test_plsql_block() -> Result<()> {
    let sql = "BEGIN\n  <<outer_loop>>\n  LOOP\n    v_total := v_total + 1.5E-2;\n  END LOOP outer_loop;\nEND;";
    let tokens = tokenize(sql, Dialect::Oracle);

    assert_eq!(first_of(&tokens, TokenKind::Label), Some("<<outer_loop>>".into()));
    assert_eq!(first_of(&tokens, TokenKind::Numeric), Some("1.5E-2".into()));
    let label = tokens.iter().find(|t| t.kind == TokenKind::Label);
    assert_eq!(label.map(|t| t.leading_whitespace.as_str()), Some("\n  "));
    assert_eq!(label.map(|t| t.position.line), Some(2));
    Ok(())
}

pub fn test_mysql_labeled_loop() -> Result<()> {
    let sql = "read_loop: LOOP\n  FETCH cur INTO v;\n  LEAVE read_loop;\nEND LOOP;";
    let kinds: Vec<(TokenKind, String)> = lex(sql, Dialect::MySql);

    assert_eq!(kinds[0], tok(TokenKind::Label, "read_loop:"));
    assert_eq!(kinds[1], tok(TokenKind::Keyword, "LOOP"));
    assert!(kinds.contains(&tok(TokenKind::Identifier, "read_loop")));
    Ok(())
}

pub fn test_mssql_procedure() -> Result<()> {
    let sql = "retry:\nSET @n += 1; -- bump\nIF @n < 3 GOTO retry;";
    let tokens = tokenize(sql, Dialect::MsSql);

    assert_eq!(tokens.tokens()[0].kind, TokenKind::Label);
    assert!(tokens.iter().any(|t| t.value == "+=" && t.kind == TokenKind::Operator));
    assert_eq!(first_of(&tokens, TokenKind::LineComment), Some("-- bump".into()));
    assert_eq!(tokens.to_source(), sql);
    Ok(())
}
