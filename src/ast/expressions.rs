use std::fmt;

use crate::ast::{BinOp, LogicalOp, Token, UnaryOp};

/// Literal value carried by a token or a literal node.
///
/// The variant is the literal's declared kind, fixed at parse time.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Bool(bool),
    Number(f64),
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Number(n) => write!(f, "{}", n),
            Literal::String(s) => f.write_str(s),
        }
    }
}

/// Abstract Syntax Tree node representing a parsed expression.
///
/// Nodes are immutable once the parser has built them and no node is shared
/// between two parents.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Literal boolean, number or string
    ///
    /// # Example
    /// ```text
    /// 42
    /// "hello"
    /// true
    /// ```
    Literal(Literal),

    /// Parenthesized expression
    Grouping(Box<Expr>),

    /// Prefix operation
    ///
    /// # Example
    /// ```text
    /// !ok
    /// -1
    /// ```
    Unary { op: UnaryOp, operand: Box<Expr> },

    /// Comparison or equality
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Short-circuiting `and` / `or`
    Logical {
        op: LogicalOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Symbol table lookup
    Variable(Token),

    /// Function call
    ///
    /// `paren` is the closing parenthesis, used to locate call errors.
    ///
    /// # Example
    /// ```text
    /// field("age")
    /// ```
    Call {
        callee: Box<Expr>,
        paren: Token,
        args: Vec<Expr>,
    },

    /// Array literal
    ///
    /// `bracket` is the closing bracket. Elements stay unevaluated until the
    /// array is compared.
    ///
    /// # Example
    /// ```text
    /// ["a", "b"]
    /// ```
    Array { bracket: Token, items: Vec<Expr> },
}

impl Expr {
    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn logical(op: LogicalOp, left: Expr, right: Expr) -> Self {
        Expr::Logical {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}
