//! Evaluate sift expressions against JSON input

use std::collections::HashMap;

use super::{CliError, install_prelude, json_to_variables};
use crate::{Environment, Interpreter, output::to_json, parse, scan};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The expression to evaluate
    pub expression: String,
    /// JSON object whose fields become variables
    pub input: Option<String>,
    /// Pretty-print the output
    pub pretty: bool,
    /// Only validate syntax, don't evaluate
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Expression evaluated successfully with JSON output
    Success(serde_json::Value),
}

/// Execute a sift check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let tokens = scan(&options.expression)?;
    let expr = parse(tokens)?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }

    let variables = match &options.input {
        Some(json_str) => json_to_variables(serde_json::from_str(json_str)?)?,
        None => Vec::new(),
    };

    let mut env = Environment::new();
    let fields: HashMap<_, _> = variables.iter().cloned().collect();
    // Registration only fails on invalid names, which the prelude never uses.
    install_prelude(&mut env, fields).map_err(|e| CliError::Input(e.to_string()))?;
    for (name, value) in variables {
        env.define(name, value);
    }

    let interpreter = Interpreter::with_environment(env);
    let result = interpreter.interpret(&expr)?;
    Ok(CheckResult::Success(to_json(&result)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(expression: &str, input: Option<&str>) -> Result<CheckResult, CliError> {
        execute_check(&CheckOptions {
            expression: expression.to_string(),
            input: input.map(str::to_string),
            ..Default::default()
        })
    }

    #[test]
    fn test_fields_become_variables() {
        let result = check("age >= 18 and name == \"Ann\"", Some(r#"{"age": 30, "name": "Ann"}"#)).unwrap();
        assert!(matches!(result, CheckResult::Success(v) if v == json!(true)));
    }

    #[test]
    fn test_syntax_only_skips_evaluation() {
        let result = execute_check(&CheckOptions {
            expression: "undefined_thing == 1".to_string(),
            syntax_only: true,
            ..Default::default()
        })
        .unwrap();
        assert!(matches!(result, CheckResult::SyntaxValid));
    }

    #[test]
    fn test_errors_by_stage() {
        assert!(matches!(check("1 + 1", None), Err(CliError::Scan(_))));
        assert!(matches!(check("(1 == 1", None), Err(CliError::Parse(_))));
        assert!(matches!(check("missing", None), Err(CliError::Eval(_))));
        assert!(matches!(check("true", Some("{")), Err(CliError::Json(_))));
    }
}
