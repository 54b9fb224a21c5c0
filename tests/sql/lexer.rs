//! Integration tests for the SQL lexer

use toolbox_sql::{Lexer, Token, TokenKind, WordClass, classify};

fn significant(source: &str) -> Vec<Token> {
    Lexer::tokenize(source)
        .into_iter()
        .filter(|t| !t.is_trivia())
        .collect()
}

#[test]
fn orm_query_tokens() {
    let sql = "SELECT `main_table`.* FROM `catalog_product` AS `main_table` LIMIT 50";
    let tokens = significant(sql);
    let texts: Vec<&str> = tokens.iter().map(|t| t.text(sql)).collect();
    assert_eq!(
        texts,
        vec![
            "SELECT",
            "`main_table`",
            ".",
            "*",
            "FROM",
            "`catalog_product`",
            "AS",
            "`main_table`",
            "LIMIT",
            "50"
        ]
    );
    assert_eq!(tokens[3].kind, TokenKind::Operator);
    assert_eq!(tokens[6].kind, TokenKind::Word(WordClass::Reserved));
    assert_eq!(tokens[9].kind, TokenKind::Number);
}

#[test]
fn spans_cover_source_without_gaps() {
    let sql = "select a -- note\nfrom t where b = 'x''y'";
    let tokens = Lexer::tokenize(sql);
    let mut position = 0;
    for token in &tokens {
        assert_eq!(token.span.start, position);
        position = token.span.end;
    }
    assert_eq!(position, sql.len());
}

#[test]
fn compound_keywords_are_one_token() {
    let sql = "group by sku order by 1";
    let words: Vec<&str> = significant(sql)
        .iter()
        .filter(|t| t.kind == TokenKind::Word(WordClass::TopLevel))
        .map(|t| t.text(sql))
        .collect();
    assert_eq!(words, vec!["group by", "order by"]);
}

#[test]
fn next_token_ends_with_eof() {
    let mut lexer = Lexer::new("x");
    assert_eq!(lexer.next_token().kind, TokenKind::Word(WordClass::Identifier));
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn keyword_classes() {
    assert_eq!(classify("WHERE"), WordClass::TopLevel);
    assert_eq!(classify("OR"), WordClass::Newline);
    assert_eq!(classify("RAND"), WordClass::Function);
    assert_eq!(classify("LIKE"), WordClass::Reserved);
    assert_eq!(classify("ENTITY_ID"), WordClass::Identifier);
}
