use std::fmt;

use crate::ast::Literal;

/// Classification of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Delimiters
    /// Left parenthesis for grouping or function calls
    LeftParen,

    /// Right parenthesis
    RightParen,

    /// Left bracket opening an array literal
    LeftBracket,

    /// Right bracket
    RightBracket,

    /// Comma for separating arguments or array elements
    Comma,

    /// Dot
    ///
    /// Scanned but not used by any grammar rule.
    Dot,

    // Operators
    /// Numeric negation (prefix)
    Minus,

    /// Logical negation (prefix)
    Bang,

    /// Inequality operator
    BangEqual,

    /// Equality operator
    EqualEqual,

    /// Greater than
    Greater,

    /// Greater than or equal
    GreaterEqual,

    /// Less than
    Less,

    /// Less than or equal
    LessEqual,

    // Literals
    /// Variable or function name
    ///
    /// Starts with a letter, followed by letters, digits, or underscores.
    ///
    /// # Examples
    /// ```text
    /// age
    /// ner_entities
    /// ```
    Identifier,

    /// String literal enclosed in double quotes
    ///
    /// No escape sequences are recognized.
    ///
    /// # Examples
    /// ```text
    /// "hello"
    /// "item #1"
    /// ```
    String,

    /// Decimal number, with an optional single fractional part
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 3.14
    /// ```
    Number,

    // Keywords
    /// Logical AND (word, not symbol)
    And,

    /// Logical OR (word, not symbol)
    Or,

    /// Reserved; has no expression form
    Nil,

    /// Boolean `true`
    True,

    /// Boolean `false`
    False,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Classify an identifier against the keyword table.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        match text {
            "and" => Some(TokenKind::And),
            "or" => Some(TokenKind::Or),
            "nil" => Some(TokenKind::Nil),
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            _ => None,
        }
    }
}

/// A lexical unit: kind, source text, optional literal payload and line.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<Literal>,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, literal: Option<Literal>, line: usize) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
        }
    }

    /// Synthetic end-of-input token.
    pub fn eof(line: usize) -> Self {
        Token::new(TokenKind::Eof, "", None, line)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{:?} {} {}", self.kind, self.lexeme, literal),
            None => write!(f, "{:?} {}", self.kind, self.lexeme),
        }
    }
}
