//! Host functions the `sift` binary registers for every check.

use std::{collections::HashMap, rc::Rc};

use regex::Regex;

use crate::{Environment, RegistrationError, Value};

/// Register `print`, `var`, `len`, `contains` and `matches`.
///
/// `var(name)` reads `fields`, returning nil for a missing field.
pub fn install_prelude(
    env: &mut Environment,
    fields: HashMap<String, Value>,
) -> Result<(), RegistrationError> {
    env.define_callable(Rc::new(crate::Print::new()));

    let fields = Rc::new(fields);
    env.define_function("var", move |name: String| {
        fields.get(&name).cloned().unwrap_or(Value::Nil)
    })?;

    env.define_function("len", |v: Value| match v {
        Value::Array(items) => Ok(items.len()),
        Value::String(s) => Ok(s.chars().count()),
        other => Err(format!("len() requires array or string, got {}", other.kind())),
    })?;

    env.define_function("contains", |list: Vec<Value>, item: Value| list.contains(&item))?;

    env.define_function("matches", |text: String, pattern: String| {
        Regex::new(&pattern).map(|re| re.is_match(&text))
    })?;

    Ok(())
}
