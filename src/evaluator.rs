use std::{
    panic::{self, AssertUnwindSafe},
    rc::Rc,
};

use crate::{
    ast::{BinOp, Expr, Literal, LogicalOp, UnaryOp},
    environment::Environment,
    error::{Error, RuntimeError, panic_message},
    lexer::scan,
    parser::parse,
    value::Value,
};

/// Scan, parse and evaluate `source` against an empty symbol table.
///
/// # Examples
///
/// ```
/// use sift_lang::{run, Value};
///
/// assert_eq!(run(r#""a" == "a" and 2 > 1"#).unwrap(), Value::Bool(true));
/// assert!(run(r#""a" > 1"#).is_err());
/// ```
pub fn run(source: &str) -> Result<Value, Error> {
    Interpreter::new().run(source)
}

/// Tree-walking evaluator bound to one symbol table.
///
/// Evaluation is synchronous and single-threaded: a host function that blocks
/// blocks the whole evaluation.
#[derive(Default)]
pub struct Interpreter {
    environment: Environment,
}

impl Interpreter {
    /// Creates an interpreter with an empty symbol table.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_environment(environment: Environment) -> Self {
        Interpreter { environment }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Mutable access for host registration between evaluations.
    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    /// Scan, parse and evaluate `source` against this interpreter's symbols.
    ///
    /// Returns the first error of any stage; there are no partial results.
    pub fn run(&self, source: &str) -> Result<Value, Error> {
        let tokens = scan(source)?;
        let expr = parse(tokens)?;
        Ok(self.interpret(&expr)?)
    }

    /// Evaluates a parsed expression.
    ///
    /// Any panic raised during the walk is caught here and reported as
    /// [`RuntimeError::Fault`]. Array values in the result are materialized.
    pub fn interpret(&self, expr: &Expr) -> Result<Value, RuntimeError> {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            let value = self.evaluate(expr)?;
            self.materialize(value)
        }));

        let result = outcome.unwrap_or_else(|payload| {
            Err(RuntimeError::Fault {
                message: panic_message(payload.as_ref()),
            })
        });
        match &result {
            Ok(value) => tracing::debug!(%value, "evaluated expression"),
            Err(e) => tracing::debug!(error = %e, "evaluation failed"),
        }
        result
    }

    /// Evaluate one node.
    pub fn evaluate(&self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal(literal) => Ok(match literal {
                Literal::Bool(b) => Value::Bool(*b),
                Literal::Number(n) => Value::Number(*n),
                Literal::String(s) => Value::String(s.clone()),
            }),
            Expr::Grouping(inner) => self.evaluate(inner),
            Expr::Unary { op, operand } => {
                let value = self.evaluate(operand)?;
                match op {
                    UnaryOp::Not => Ok(Value::Bool(!expect_bool(&value)?)),
                    UnaryOp::Negate => match value.as_number() {
                        Some(n) => Ok(Value::Number(-n)),
                        None => Err(RuntimeError::NotNumber {
                            value: value.to_string(),
                        }),
                    },
                }
            }
            Expr::Variable(name) => self.environment.get(name),
            Expr::Logical { op, left, right } => {
                let left_val = self.evaluate(left)?;
                let left_bool = expect_bool(&left_val)?;

                // Short-circuit
                match op {
                    LogicalOp::Or if left_bool => return Ok(Value::Bool(true)),
                    LogicalOp::And if !left_bool => return Ok(Value::Bool(false)),
                    _ => {}
                }

                let right_val = self.evaluate(right)?;
                Ok(Value::Bool(expect_bool(&right_val)?))
            }
            Expr::Binary { op, left, right } => {
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;
                self.apply_binop(*op, &left_val, &right_val)
            }
            Expr::Call { callee, paren, args } => {
                let callee_val = self.evaluate(callee)?;
                let Value::Callable(callable) = callee_val else {
                    return Err(RuntimeError::NotCallable {
                        line: paren.line,
                        location: format!("at '{}'", paren.lexeme),
                    });
                };

                if args.len() != callable.arity() {
                    return Err(RuntimeError::ArityMismatch {
                        line: paren.line,
                        location: format!("at '{}'", paren.lexeme),
                        want: callable.arity(),
                        got: args.len(),
                    });
                }

                let mut arguments = Vec::with_capacity(args.len());
                for arg in args {
                    let value = self.evaluate(arg)?;
                    arguments.push(self.materialize(value)?);
                }

                callable.invoke(arguments)
            }
            Expr::Array { items, .. } => Ok(Value::Array(
                items
                    .iter()
                    .map(|item| Value::Deferred(Rc::new(item.clone())))
                    .collect(),
            )),
        }
    }

    fn apply_binop(&self, op: BinOp, left: &Value, right: &Value) -> Result<Value, RuntimeError> {
        let not_number = || RuntimeError::NotNumber {
            value: format!("{} {} {}", left, op, right),
        };

        match (left.as_number(), right.as_number()) {
            (Some(a), Some(b)) => Ok(Value::Bool(match op {
                BinOp::GreaterThan => a > b,
                BinOp::GreaterEqual => a >= b,
                BinOp::LessThan => a < b,
                BinOp::LessEqual => a <= b,
                BinOp::Equal => a == b,
                BinOp::NotEqual => a != b,
            })),
            (None, None) => match op {
                BinOp::Equal => Ok(Value::Bool(self.values_equal(left, right)?)),
                BinOp::NotEqual => Ok(Value::Bool(!self.values_equal(left, right)?)),
                _ => Err(not_number()),
            },
            _ => Err(not_number()),
        }
    }

    /// Language-level `==`.
    ///
    /// A sequence on the left is compared positionally; anything else compares
    /// by identity, and values of different kinds are simply unequal.
    fn values_equal(&self, left: &Value, right: &Value) -> Result<bool, RuntimeError> {
        match left {
            Value::Array(items) => self.sequences_equal(items, right),
            _ => Ok(identical(left, right)),
        }
    }

    /// Positional, lazy sequence equality; stops at the first mismatch.
    fn sequences_equal(&self, left: &[Value], right: &Value) -> Result<bool, RuntimeError> {
        let Value::Array(right) = right else {
            return Ok(false);
        };
        if left.len() != right.len() {
            return Ok(false);
        }

        for (a, b) in left.iter().zip(right) {
            let a = self.force(a)?;
            let b = self.force(b)?;
            if !self.elements_equal(&a, &b)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn elements_equal(&self, left: &Value, right: &Value) -> Result<bool, RuntimeError> {
        match (left.as_number(), right.as_number()) {
            (Some(a), Some(b)) => Ok(a == b),
            (None, None) => self.values_equal(left, right),
            _ => Ok(false),
        }
    }

    /// Evaluate a deferred element; other values pass through.
    fn force(&self, value: &Value) -> Result<Value, RuntimeError> {
        match value {
            Value::Deferred(expr) => self.evaluate(expr),
            other => Ok(other.clone()),
        }
    }

    /// Force every deferred element, recursively.
    fn materialize(&self, value: Value) -> Result<Value, RuntimeError> {
        match value {
            Value::Deferred(expr) => {
                let forced = self.evaluate(&expr)?;
                self.materialize(forced)
            }
            Value::Array(items) => items
                .into_iter()
                .map(|item| self.materialize(item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            other => Ok(other),
        }
    }
}

/// Truthy check: only booleans qualify.
fn expect_bool(value: &Value) -> Result<bool, RuntimeError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Nil => Err(RuntimeError::NilValue),
        other => Err(RuntimeError::NotBool {
            value: other.to_string(),
        }),
    }
}

fn identical(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Nil, Value::Nil) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::Callable(a), Value::Callable(b)) => std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b)),
        _ => false,
    }
}
