//! # Sift Expression Language - Abstract Syntax Tree
//!
//! This module defines the token model and the expression tree for Sift, a small
//! expression language for evaluating boolean predicates over values and
//! functions supplied by an embedding host.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[operators]** - Unary, comparison, and logical operators
//! - **[expressions]** - Expression nodes and literal values
//!
//! ## Quick Start
//!
//! ```text
//! field("status") == "active" and age >= 18
//! ```
//!
//! This expression calls a host function, reads a host variable, and combines
//! both comparisons with a short-circuiting `and`.
//!
//! ## Core Concepts
//!
//! ### Everything is an expression
//!
//! There are no statements, assignments or loops. A source text parses into a
//! single expression tree which is evaluated against one flat symbol table.
//!
//! ### Precedence (lowest to highest)
//!
//! ```text
//! or → and → == != → > >= < <= → ! - → call → primary
//! ```
//!
//! ### Array literals are patterns
//!
//! `[a, b]` keeps its element expressions unevaluated. They are evaluated one
//! by one when the array takes part in an equality comparison, so elements after
//! the first mismatch are never evaluated.
//!
//! ```text
//! tags() == ["new", "sale"]
//! ```
pub mod expressions;
pub mod operators;
pub mod tokens;

pub use expressions::{Expr, Literal};
pub use operators::{BinOp, LogicalOp, UnaryOp};
pub use tokens::{Token, TokenKind};
