use crate::prototxt::PrototxtError;
use crate::prototxt::lexer::{Lexer, TokenKind};

fn kinds(text: &str) -> Vec<TokenKind> {
    Lexer::new(text)
        .tokenize()
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn test_tokenize_basic_field() {
    assert_eq!(
        kinds("value: -2.0 # 注释\n"),
        vec![
            TokenKind::Ident("value".to_string()),
            TokenKind::Symbol(':'),
            TokenKind::Number("-2.0".to_string()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_tokenize_numbers() {
    assert_eq!(
        kinds("1e-5 .5 +3 0x1F -inf 1.0f"),
        vec![
            TokenKind::Number("1e-5".to_string()),
            TokenKind::Number(".5".to_string()),
            TokenKind::Number("+3".to_string()),
            TokenKind::Number("0x1F".to_string()),
            TokenKind::Number("-inf".to_string()),
            TokenKind::Number("1.0f".to_string()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_tokenize_strings_and_escapes() {
    assert_eq!(
        kinds(r#"'a\'b' "c\n\x41\101""#),
        vec![
            TokenKind::Str("a'b".to_string()),
            TokenKind::Str("c\nAA".to_string()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_token_positions() {
    let tokens = Lexer::new("name: \"x\"\n  layer {").tokenize().unwrap();
    assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
    assert_eq!((tokens[2].line, tokens[2].column), (1, 7));
    assert_eq!((tokens[3].line, tokens[3].column), (2, 3));
    assert_eq!((tokens[4].line, tokens[4].column), (2, 9));
}

#[test]
fn test_tokenize_errors() {
    assert_eq!(
        Lexer::new("name: \"abc\n\"").tokenize().unwrap_err(),
        PrototxtError::UnterminatedString { line: 1, column: 7 }
    );
    assert_eq!(
        Lexer::new("a: 1\nb: @").tokenize().unwrap_err(),
        PrototxtError::UnexpectedChar {
            line: 2,
            column: 4,
            found: '@',
        }
    );
    assert_eq!(
        Lexer::new(r#"s: "\q""#).tokenize().unwrap_err(),
        PrototxtError::InvalidEscape {
            line: 1,
            column: 6,
            found: 'q',
        }
    );
}
