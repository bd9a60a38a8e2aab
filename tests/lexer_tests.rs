// tests/lexer_tests.rs

use sift_lang::ast::{Literal, TokenKind};
use sift_lang::lexer::{Lexer, scan};

fn kinds(source: &str) -> Vec<TokenKind> {
    scan(source).unwrap().into_iter().map(|t| t.kind).collect()
}

// ============================================================================
// Single Character Tokens
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        ("(", TokenKind::LeftParen),
        (")", TokenKind::RightParen),
        ("[", TokenKind::LeftBracket),
        ("]", TokenKind::RightBracket),
        (",", TokenKind::Comma),
        (".", TokenKind::Dot),
        ("-", TokenKind::Minus),
        ("!", TokenKind::Bang),
        ("<", TokenKind::Less),
        (">", TokenKind::Greater),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, expected, "Failed for input: {}", input);
        assert_eq!(token.lexeme, input);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    }
}

// ============================================================================
// Two Character Tokens
// ============================================================================

#[test]
fn test_two_char_tokens() {
    let test_cases = vec![
        ("==", TokenKind::EqualEqual),
        ("!=", TokenKind::BangEqual),
        ("<=", TokenKind::LessEqual),
        (">=", TokenKind::GreaterEqual),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, expected, "Failed for input: {}", input);
        assert_eq!(token.lexeme, input);
    }
}

#[test]
fn test_operators_without_spaces() {
    assert_eq!(
        kinds("!a!=b"),
        vec![
            TokenKind::Bang,
            TokenKind::Identifier,
            TokenKind::BangEqual,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_numbers() {
    let tokens = scan("42 2.75").unwrap();
    assert_eq!(tokens[0].literal, Some(Literal::Number(42.0)));
    assert_eq!(tokens[1].literal, Some(Literal::Number(2.75)));
    assert_eq!(tokens[1].lexeme, "2.75");
}

#[test]
fn test_trailing_dot_is_not_part_of_number() {
    assert_eq!(kinds("1."), vec![TokenKind::Number, TokenKind::Dot, TokenKind::Eof]);
}

#[test]
fn test_strings() {
    let tokens = scan(r#""hello world""#).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, r#""hello world""#);
    assert_eq!(tokens[0].literal, Some(Literal::String("hello world".into())));
}

#[test]
fn test_multiline_string_advances_line() {
    let tokens = scan("\"a\nb\" x").unwrap();
    assert_eq!(tokens[0].literal, Some(Literal::String("a\nb".into())));
    assert_eq!(tokens[1].line, 2);
}

// ============================================================================
// Identifiers and Keywords
// ============================================================================

#[test]
fn test_identifiers() {
    let tokens = scan("ner_entities _private age2").unwrap();
    for token in &tokens[..3] {
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.literal, None);
    }
    assert_eq!(tokens[0].lexeme, "ner_entities");
}

#[test]
fn test_keywords() {
    assert_eq!(
        kinds("and or nil true false andy"),
        vec![
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Nil,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

// ============================================================================
// Line Tracking
// ============================================================================

#[test]
fn test_line_numbers() {
    let tokens = scan("a\n\nb\nc").unwrap();
    let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 3, 4, 4]);
}

#[test]
fn test_empty_source() {
    let tokens = scan("   ").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_arithmetic_is_rejected() {
    for op in ["+", "*", "/"] {
        let err = scan(&format!("1 {} 2", op)).unwrap_err();
        assert_eq!(err.message, format!("unexpected character {}", op));
        assert_eq!(err.line, 1);
    }
}

#[test]
fn test_lone_equals() {
    let err = scan("a = 1").unwrap_err();
    assert_eq!(err.to_string(), "[line 1] Error: unexpected character = (did you mean '=='?)");
}

#[test]
fn test_unterminated_string() {
    let err = scan("\"abc\n").unwrap_err();
    assert_eq!(err.message, "Unterminated string.");
    assert_eq!(err.line, 2);
}

#[test]
fn test_error_line() {
    let err = scan("a\nb\n#").unwrap_err();
    assert_eq!(err.to_string(), "[line 3] Error: unexpected character #");
}
