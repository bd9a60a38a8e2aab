//! Token and tree dumps for debugging expressions

use super::CliError;
use crate::{parse, printer::render, scan};

/// One line per token: kind, lexeme, literal payload and line.
pub fn list_tokens(expression: &str) -> Result<Vec<String>, CliError> {
    let tokens = scan(expression)?;
    Ok(tokens
        .iter()
        .map(|t| format!("{:>4}  {}", t.line, t))
        .collect())
}

/// Parenthesized prefix rendering of the parsed expression.
pub fn render_ast(expression: &str) -> Result<String, CliError> {
    let expr = parse(scan(expression)?)?;
    Ok(render(&expr))
}
