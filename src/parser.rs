use crate::{
    ast::{BinOp, Expr, Literal, LogicalOp, Token, TokenKind, UnaryOp},
    error::ParseError,
};

/// Recursive-descent parser over a scanned token sequence.
///
/// ```text
/// expression → or
/// or         → and ( "or" and )*
/// and        → equality ( "and" equality )*
/// equality   → comparison ( ( "!=" | "==" ) comparison )*
/// comparison → unary ( ( ">" | ">=" | "<" | "<=" ) unary )*
/// unary      → ( "!" | "-" ) unary | call
/// call       → primary ( "(" arguments? ")" )*
/// primary    → NUMBER | STRING | "true" | "false" | IDENTIFIER
///            | "(" expression ")" | "[" elements? "]"
/// ```
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    depth: usize,
}

/// Deepest nesting of groups, arrays, calls, prefix operators and operator
/// chains the parser accepts. Evaluation recursion is bounded by the same limit.
pub const MAX_DEPTH: usize = 64;

/// Parse a token sequence into a single expression tree.
pub fn parse(tokens: Vec<Token>) -> Result<Expr, ParseError> {
    Parser::new(tokens).parse()
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().is_none_or(|t| t.kind != TokenKind::Eof) {
            let line = tokens.last().map_or(1, |t| t.line);
            tokens.push(Token::eof(line));
        }
        Parser {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    /// Consume the current token if its kind is one of `kinds`.
    fn eat(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        if kinds.iter().any(|k| self.check(*k)) {
            Some(self.advance())
        } else {
            None
        }
    }

    fn expect(&mut self, kind: TokenKind, message: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error(self.peek(), message))
        }
    }

    fn error(&self, token: &Token, message: &str) -> ParseError {
        let location = if token.kind == TokenKind::Eof {
            "at end".to_string()
        } else {
            format!("at '{}'", token.lexeme)
        };
        ParseError {
            line: token.line,
            location,
            message: message.to_string(),
        }
    }

    /// Enter one more level of nesting.
    fn nest(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error(self.peek(), "Expression nested too deeply."));
        }
        self.depth += 1;
        Ok(())
    }

    /// Parse primary expressions (atoms): literals, identifiers, groups, arrays
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.peek().clone();
        match token.kind {
            TokenKind::False => {
                self.advance();
                Ok(Expr::Literal(Literal::Bool(false)))
            }
            TokenKind::True => {
                self.advance();
                Ok(Expr::Literal(Literal::Bool(true)))
            }
            TokenKind::Number | TokenKind::String => {
                self.advance();
                match token.literal {
                    Some(literal) => Ok(Expr::Literal(literal)),
                    None => Err(self.error(&token, "Literal token without a value.")),
                }
            }
            TokenKind::Identifier => {
                self.advance();
                Ok(Expr::Variable(token))
            }
            TokenKind::LeftParen => {
                self.nest()?;
                self.advance();
                let expr = self.parse_expression()?;
                self.expect(TokenKind::RightParen, "Expect ')' after expression.")?;
                self.depth -= 1;
                Ok(Expr::grouping(expr))
            }
            TokenKind::LeftBracket => {
                self.nest()?;
                self.advance();
                let array = self.parse_array_literal()?;
                self.depth -= 1;
                Ok(array)
            }
            _ => Err(self.error(&token, "Expect expression.")),
        }
    }

    /// Comma-separated expressions up to (not including) `close`.
    fn parse_list(&mut self, close: TokenKind) -> Result<Vec<Expr>, ParseError> {
        let mut items = vec![];
        if !self.check(close) {
            items.push(self.parse_expression()?);
            while self.eat(&[TokenKind::Comma]).is_some() {
                items.push(self.parse_expression()?);
            }
        }
        Ok(items)
    }

    fn parse_array_literal(&mut self) -> Result<Expr, ParseError> {
        let items = self.parse_list(TokenKind::RightBracket)?;
        let bracket = self.expect(TokenKind::RightBracket, "Expect ']' after array elements.")?;
        Ok(Expr::Array { bracket, items })
    }

    fn finish_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        let args = self.parse_list(TokenKind::RightParen)?;
        let paren = self.expect(TokenKind::RightParen, "Expect ')' after arguments.")?;
        Ok(Expr::Call {
            callee: Box::new(callee),
            paren,
            args,
        })
    }

    fn parse_call(&mut self) -> Result<Expr, ParseError> {
        let depth = self.depth;
        let mut expr = self.parse_primary()?;
        while self.check(TokenKind::LeftParen) {
            self.nest()?;
            self.advance();
            expr = self.finish_call(expr)?;
        }
        self.depth = depth;
        Ok(expr)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let op = match self.peek().kind {
            TokenKind::Bang => UnaryOp::Not,
            TokenKind::Minus => UnaryOp::Negate,
            _ => return self.parse_call(),
        };

        self.nest()?;
        self.advance();
        let operand = self.parse_unary()?; // Right-associative
        self.depth -= 1;
        Ok(Expr::unary(op, operand))
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let depth = self.depth;
        let mut left = self.parse_unary()?;

        loop {
            let op = match self.peek().kind {
                TokenKind::Greater => BinOp::GreaterThan,
                TokenKind::GreaterEqual => BinOp::GreaterEqual,
                TokenKind::Less => BinOp::LessThan,
                TokenKind::LessEqual => BinOp::LessEqual,
                _ => break,
            };

            self.nest()?;
            self.advance();
            let right = self.parse_unary()?;
            left = Expr::binary(op, left, right);
        }
        self.depth = depth;
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let depth = self.depth;
        let mut left = self.parse_comparison()?;

        loop {
            let op = match self.peek().kind {
                TokenKind::EqualEqual => BinOp::Equal,
                TokenKind::BangEqual => BinOp::NotEqual,
                _ => break,
            };

            self.nest()?;
            self.advance();
            let right = self.parse_comparison()?;
            left = Expr::binary(op, left, right);
        }
        self.depth = depth;
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let depth = self.depth;
        let mut left = self.parse_equality()?;

        while self.check(TokenKind::And) {
            self.nest()?;
            self.advance();
            let right = self.parse_equality()?;
            left = Expr::logical(LogicalOp::And, left, right);
        }
        self.depth = depth;
        Ok(left)
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let depth = self.depth;
        let mut left = self.parse_and()?;

        while self.check(TokenKind::Or) {
            self.nest()?;
            self.advance();
            let right = self.parse_and()?;
            left = Expr::logical(LogicalOp::Or, left, right);
        }
        self.depth = depth;
        Ok(left)
    }

    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_or()
    }

    /// Parse one complete expression; trailing tokens are an error.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expression()?;
        if !self.is_at_end() {
            return Err(self.error(self.peek(), "Expect end of expression."));
        }
        tracing::debug!("parsed expression");
        Ok(expr)
    }
}
