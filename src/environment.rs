use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{Token, TokenKind},
    callable::{Callable, HostFn, HostFunction, Print},
    error::{RegistrationError, RuntimeError},
    value::Value,
};

/// Flat global symbol table mapping names to values and functions.
///
/// Owned by one session. It holds `Rc` values and is neither `Send` nor
/// `Sync`; hosts that share a table across threads must build one per thread.
#[derive(Default)]
pub struct Environment {
    values: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table with the `print` built-in already defined.
    pub fn with_builtins() -> Self {
        let mut env = Self::new();
        env.define_callable(Rc::new(Print::new()));
        env
    }

    /// Define or overwrite `name`.
    pub fn define(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Define a callable under its own name.
    pub fn define_callable(&mut self, callable: Rc<dyn Callable>) {
        self.values
            .insert(callable.name().to_string(), Value::Callable(callable));
    }

    /// Register a host closure; its arity is its parameter count.
    ///
    /// ```
    /// use sift_lang::{Environment, Interpreter, Value};
    ///
    /// let mut env = Environment::new();
    /// env.define_function("age", || 18).unwrap();
    ///
    /// let interpreter = Interpreter::with_environment(env);
    /// assert_eq!(interpreter.run("age() >= 18").unwrap(), Value::Bool(true));
    /// ```
    pub fn define_function<F, Args>(&mut self, name: &str, f: F) -> Result<(), RegistrationError>
    where
        F: HostFn<Args>,
        Args: 'static,
    {
        if !is_symbol_name(name) {
            return Err(RegistrationError::InvalidName {
                name: name.to_string(),
            });
        }
        tracing::debug!(name, "registering host function");
        self.define_callable(Rc::new(HostFunction::new(name, f)));
        Ok(())
    }

    /// Look up the symbol named by `name`'s lexeme.
    pub fn get(&self, name: &Token) -> Result<Value, RuntimeError> {
        self.values
            .get(&name.lexeme)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedSymbol {
                name: name.lexeme.clone(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Whether `name` scans as a single identifier token.
fn is_symbol_name(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_well = chars.next().is_some_and(|c| c.is_alphabetic() || c == '_');
    starts_well
        && chars.all(|c| c.is_alphanumeric() || c == '_')
        && TokenKind::keyword(name).is_none()
}
