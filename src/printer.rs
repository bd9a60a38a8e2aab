//! Parenthesized prefix rendering of expression trees, for diagnostics.
//!
//! ```
//! use sift_lang::{lexer::scan, parser::parse, printer::render};
//!
//! let expr = parse(scan("a == -b").unwrap()).unwrap();
//! assert_eq!(render(&expr), "(== a (- b))");
//! ```

use crate::ast::Expr;

/// Render `expr` as a fully parenthesized prefix expression.
pub fn render(expr: &Expr) -> String {
    match expr {
        Expr::Literal(literal) => literal.to_string(),
        Expr::Grouping(inner) => block("group", "(", ")", [inner.as_ref()]),
        Expr::Unary { op, operand } => block(op.symbol(), "(", ")", [operand.as_ref()]),
        Expr::Binary { op, left, right } => block(op.symbol(), "(", ")", [left.as_ref(), right.as_ref()]),
        Expr::Logical { op, left, right } => block(op.symbol(), "(", ")", [left.as_ref(), right.as_ref()]),
        Expr::Variable(name) => name.lexeme.clone(),
        Expr::Call { callee, args, .. } => block(&render(callee), "(", ")", args),
        Expr::Array { bracket, items } => block(&bracket.lexeme, "[", "]", items),
    }
}

fn block<'a>(name: &str, start: &str, end: &str, exprs: impl IntoIterator<Item = &'a Expr>) -> String {
    let mut out = String::from(start);
    out.push_str(name);
    for expr in exprs {
        out.push(' ');
        out.push_str(&render(expr));
    }
    out.push_str(end);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lexer::scan, parser::parse};

    fn render_source(source: &str) -> String {
        render(&parse(scan(source).unwrap()).unwrap())
    }

    #[test]
    fn test_render_logical_chain() {
        insta::assert_snapshot!(
            render_source("a or b and c == 1"),
            @"(or a (and b (== c 1)))"
        );
    }

    #[test]
    fn test_render_call_and_array() {
        insta::assert_snapshot!(
            render_source(r#"tags("x") == ["a", 2.5]"#),
            @"(== (tags x) [] a 2.5])"
        );
    }

    #[test]
    fn test_render_group_and_unary() {
        insta::assert_snapshot!(render_source("!(x > 1)"), @"(! (group (> x 1)))");
    }
}
