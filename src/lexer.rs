use crate::ast::{Literal, Token, TokenKind};
use crate::error::ScanError;

/// Single-pass scanner over the code points of a source text.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    start: usize,
    line: usize,
}

/// Scan a whole source text into tokens, ending with [`TokenKind::Eof`].
pub fn scan(source: &str) -> Result<Vec<Token>, ScanError> {
    Lexer::new(source).tokenize()
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            start: 0,
            line: 1,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Consume the current char if it is `expected`.
    fn eat(&mut self, expected: char) -> bool {
        if self.current_char() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn lexeme(&self) -> String {
        self.input[self.start..self.position].iter().collect()
    }

    fn token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.lexeme(), None, self.line)
    }

    fn error(&self, message: impl Into<String>) -> ScanError {
        ScanError {
            line: self.line,
            message: message.into(),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if !ch.is_whitespace() {
                break;
            }
            if ch == '\n' {
                self.line += 1;
            }
            self.advance();
        }
    }

    fn read_identifier(&mut self) -> Token {
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                self.advance();
            } else {
                break;
            }
        }

        let text = self.lexeme();
        let kind = TokenKind::keyword(&text).unwrap_or(TokenKind::Identifier);
        Token::new(kind, text, None, self.line)
    }

    fn read_string(&mut self) -> Result<Token, ScanError> {
        self.advance(); // Consume opening quote

        while let Some(ch) = self.current_char() {
            if ch == '"' {
                break;
            }
            if ch == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.current_char().is_none() {
            return Err(self.error("Unterminated string."));
        }
        self.advance(); // Consume closing quote

        let value: String = self.input[self.start + 1..self.position - 1].iter().collect();
        Ok(Token::new(
            TokenKind::String,
            self.lexeme(),
            Some(Literal::String(value)),
            self.line,
        ))
    }

    fn read_number(&mut self) -> Result<Token, ScanError> {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.current_char() == Some('.') && self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // Consume '.'
            while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let text = self.lexeme();
        let value = text
            .parse::<f64>()
            .map_err(|e| self.error(format!("invalid number {}: {}", text, e)))?;
        Ok(Token::new(TokenKind::Number, text, Some(Literal::Number(value)), self.line))
    }

    /// Scan the next token, or the end-of-input token once the source is exhausted.
    pub fn next_token(&mut self) -> Result<Token, ScanError> {
        self.skip_whitespace();
        self.start = self.position;

        let Some(ch) = self.current_char() else {
            return Ok(Token::eof(self.line));
        };

        let kind = match ch {
            '"' => return self.read_string(),
            c if c.is_ascii_digit() => return self.read_number(),
            c if c.is_alphabetic() || c == '_' => return Ok(self.read_identifier()),
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '-' => TokenKind::Minus,
            '!' => {
                self.advance();
                let kind = if self.eat('=') { TokenKind::BangEqual } else { TokenKind::Bang };
                return Ok(self.token(kind));
            }
            '=' => {
                self.advance();
                if !self.eat('=') {
                    return Err(self.error("unexpected character = (did you mean '=='?)"));
                }
                return Ok(self.token(TokenKind::EqualEqual));
            }
            '<' => {
                self.advance();
                let kind = if self.eat('=') { TokenKind::LessEqual } else { TokenKind::Less };
                return Ok(self.token(kind));
            }
            '>' => {
                self.advance();
                let kind = if self.eat('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                return Ok(self.token(kind));
            }
            other => return Err(self.error(format!("unexpected character {}", other))),
        };

        self.advance();
        Ok(self.token(kind))
    }

    /// Scan the remaining input, stopping at the first lexical error.
    pub fn tokenize(mut self) -> Result<Vec<Token>, ScanError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }
        tracing::debug!(count = tokens.len(), "scanned tokens");
        Ok(tokens)
    }
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("and or nil true false");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::And);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Or);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Nil);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::True);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::False);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
}

#[test]
fn test_call_with_comparison() {
    let kinds: Vec<TokenKind> = scan(r#"field("x") >= 5"#)
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::LeftParen,
            TokenKind::String,
            TokenKind::RightParen,
            TokenKind::GreaterEqual,
            TokenKind::Number,
            TokenKind::Eof,
        ]
    );
}
