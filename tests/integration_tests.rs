use sift_lang::{Environment, Error, Interpreter, RuntimeError, Value};
use std::{cell::Cell, collections::HashMap, rc::Rc};

fn record(pairs: Vec<(&str, Value)>) -> HashMap<String, Value> {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

fn interpreter_with(data: HashMap<String, Value>) -> Interpreter {
    let mut env = Environment::new();
    env.define_function("ner_entities", move |name: String| {
        data.get(&name).cloned().unwrap_or(Value::Nil)
    })
    .unwrap();
    Interpreter::with_environment(env)
}

fn sample_data() -> HashMap<String, Value> {
    record(vec![
        ("product_type", Value::from("面膜")),
        ("skin_color", Value::from("黑色")),
        ("age", Value::from(18)),
        ("efficacy", Value::from(vec!["补水", "抗皱"])),
        ("yes", Value::from(true)),
        ("ruok", Value::from(true)),
    ])
}

fn eval_bool(interpreter: &Interpreter, source: &str) -> bool {
    match interpreter.run(source) {
        Ok(Value::Bool(b)) => b,
        other => panic!("Expected bool for {:?}, got {:?}", source, other),
    }
}

fn assert_cases(interpreter: &Interpreter, cases: &[(&str, bool)]) {
    for (source, expected) in cases {
        assert_eq!(eval_bool(interpreter, source), *expected, "Failed for: {}", source);
    }
}

// ============================================================================
// Equality
// ============================================================================

#[test]
fn test_equal() {
    let interpreter = interpreter_with(sample_data());
    assert_cases(
        &interpreter,
        &[
            ("1 == 1", true),
            ("1 != 1", false),
            ("1 != 2", true),
            (r#""a" == "a""#, true),
            (r#""a" != "a""#, false),
            (r#""a" != "b""#, true),
        ],
    );
}

#[test]
fn test_mixed_kinds_are_unequal() {
    let interpreter = Interpreter::new();
    assert_cases(&interpreter, &[(r#""1" == true"#, false), (r#""1" != true"#, true)]);
    assert!(interpreter.run(r#""1" == 1"#).is_err());
}

// ============================================================================
// Calls
// ============================================================================

#[test]
fn test_call() {
    let interpreter = interpreter_with(sample_data());
    assert_cases(&interpreter, &[(r#"ner_entities("product_type") == "面膜""#, true)]);
}

#[test]
fn test_missing_field_is_nil() {
    let interpreter = interpreter_with(sample_data());
    assert_eq!(interpreter.run(r#"ner_entities("nope")"#).unwrap(), Value::Nil);
}

#[test]
fn test_typed_host_functions() {
    let mut env = Environment::new();
    env.define_function("add", |a: i64, b: i64| a + b).unwrap();
    env.define_function("upper", |s: String| s.to_uppercase()).unwrap();
    env.define_function("count", |items: Vec<String>| items.len()).unwrap();
    let interpreter = Interpreter::with_environment(env);

    assert_cases(
        &interpreter,
        &[
            ("add(2, 3) == 5", true),
            (r#"upper("abc") == "ABC""#, true),
            (r#"count(["a", "b"]) == 2"#, true),
        ],
    );
}

#[test]
fn test_argument_conversion_failure() {
    let mut env = Environment::new();
    env.define_function("half", |n: i64| n / 2).unwrap();
    let interpreter = Interpreter::with_environment(env);

    let err = interpreter.run("half(1.5)").unwrap_err();
    assert!(matches!(
        err,
        Error::Runtime(RuntimeError::ArgumentMismatch { index: 0, .. })
    ));
    assert!(interpreter.run(r#"half("2")"#).is_err());
}

#[test]
fn test_integer_argument_is_not_rounded() {
    let mut env = Environment::new();
    env.define_function("id", |n: i64| n).unwrap();
    let interpreter = Interpreter::with_environment(env);

    let err = interpreter.run("id(4503599627370495.5)").unwrap_err();
    assert!(matches!(
        err,
        Error::Runtime(RuntimeError::ArgumentMismatch { index: 0, .. })
    ));
    assert_eq!(
        interpreter.run("id(4503599627370495)").unwrap(),
        Value::Number(4503599627370495.0)
    );
}

#[test]
fn test_host_error_result() {
    let mut env = Environment::new();
    env.define_function("check", |n: f64| {
        if n < 0.0 { Err("negative input") } else { Ok(true) }
    })
    .unwrap();
    let interpreter = Interpreter::with_environment(env);

    assert!(eval_bool(&interpreter, "check(1)"));
    assert_eq!(
        interpreter.run("check(-1)").unwrap_err().to_string(),
        "runtime error: check: negative input"
    );
}

#[test]
fn test_calling_a_non_function() {
    let mut env = Environment::new();
    env.define("age", 18);
    let err = Interpreter::with_environment(env).run("age(1)").unwrap_err();
    assert_eq!(err.to_string(), "runtime error: [line 1] at ')': not callable");
}

// ============================================================================
// Comparison
// ============================================================================

#[test]
fn test_comparison() {
    let interpreter = interpreter_with(sample_data());
    assert_cases(
        &interpreter,
        &[
            (r#"ner_entities("age") == 18"#, true),
            (r#"ner_entities("age") >= 18"#, true),
            (r#"ner_entities("age") > 17"#, true),
            (r#"ner_entities("age") <= 18"#, true),
            (r#"ner_entities("age") < 19"#, true),
        ],
    );
}

#[test]
fn test_comparison_requires_numbers() {
    let interpreter = interpreter_with(sample_data());
    let err = interpreter.run(r#"ner_entities("skin_color") > 1"#).unwrap_err();
    assert_eq!(err.to_string(), "runtime error: 黑色 > 1 is not number");
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn test_array() {
    let interpreter = interpreter_with(sample_data());
    assert_cases(
        &interpreter,
        &[
            (r#"ner_entities("efficacy") == ["补水", "抗皱"]"#, true),
            (r#"ner_entities("efficacy") == ["补水", "+皱"]"#, false),
            (r#"ner_entities("efficacy") != ["补水", "+皱"]"#, true),
            (r#"ner_entities("efficacy") == ["补水"]"#, false),
        ],
    );
}

#[test]
fn test_array_literals_compare_positionally() {
    let interpreter = Interpreter::new();
    assert_cases(
        &interpreter,
        &[
            (r#"["a", "b"] == ["a", "b"]"#, true),
            (r#"["a", "b"] == ["b", "a"]"#, false),
            (r#"[1, ["x"]] == [1, ["x"]]"#, true),
            (r#"[1] == ["1"]"#, false),
            ("[] == []", true),
        ],
    );
}

// ============================================================================
// Booleans and Logic
// ============================================================================

#[test]
fn test_bool() {
    let interpreter = interpreter_with(sample_data());
    assert_cases(
        &interpreter,
        &[
            (r#"ner_entities("yes")"#, true),
            (r#"ner_entities("yes") == true"#, true),
            (r#"ner_entities("yes") != false"#, true),
        ],
    );
}

#[test]
fn test_grouping() {
    let interpreter = Interpreter::new();
    assert_cases(
        &interpreter,
        &[("true or (false or true)", true), ("false or (false and true)", false)],
    );
}

#[test]
fn test_unary() {
    let interpreter = Interpreter::new();
    assert_cases(
        &interpreter,
        &[
            ("!true", false),
            ("!false", true),
            ("-1 < 0", true),
            ("1 > 0", true),
            ("--1 == 1", true),
        ],
    );
    assert!(interpreter.run("!1").is_err());
    assert!(interpreter.run(r#"-"a""#).is_err());
}

#[test]
fn test_logical() {
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();

    let mut env = Environment::new();
    let data = sample_data();
    env.define_function("ner_entities", move |name: String| {
        data.get(&name).cloned().unwrap_or(Value::Nil)
    })
    .unwrap();
    env.define_function("call_counter", move || {
        counter.set(counter.get() + 1);
        true
    })
    .unwrap();
    let interpreter = Interpreter::with_environment(env);

    assert_cases(
        &interpreter,
        &[
            (r#"ner_entities("ruok")"#, true),
            (r#"!ner_entities("ruok")"#, false),
            (r#"ner_entities("ruok") == true"#, true),
            (r#"ner_entities("ruok") != false"#, true),
            ("true or false", true),
            ("true and false", false),
        ],
    );

    let counted = [
        ("true or call_counter()", true, 0),
        ("false or call_counter()", true, 1),
        ("true and call_counter()", true, 1),
        ("false and call_counter()", false, 0),
    ];
    for (source, expected, expected_calls) in counted {
        calls.set(0);
        assert_eq!(eval_bool(&interpreter, source), expected, "Failed for: {}", source);
        assert_eq!(calls.get(), expected_calls, "Call count for: {}", source);
    }
}

#[test]
fn test_logical_operands_must_be_bool() {
    let interpreter = Interpreter::new();
    assert_eq!(
        interpreter.run("1 and true").unwrap_err().to_string(),
        "runtime error: not bool value: 1"
    );
    assert!(interpreter.run("false or 1").is_err());
}

// ============================================================================
// Runtime Faults
// ============================================================================

#[test]
fn test_runtime_error() {
    let mut env = Environment::new();
    env.define_function("die", || -> Value { panic!("boom") }).unwrap();
    let interpreter = Interpreter::with_environment(env);

    let err = interpreter.run("die()").unwrap_err();
    assert_eq!(
        err,
        Error::Runtime(RuntimeError::HostFault {
            function: "die".into(),
            message: "boom".into(),
        })
    );

    // The interpreter stays usable after a fault.
    assert_eq!(interpreter.run("1 == 1").unwrap(), Value::Bool(true));
}

#[test]
fn test_dynamic_function() {
    use sift_lang::HostFunction;

    let mut env = Environment::new();
    env.define_callable(Rc::new(HostFunction::dynamic("first", 1, |args| match &args[0] {
        Value::Array(items) => Ok(items.first().cloned().unwrap_or(Value::Nil)),
        other => Err(format!("expected array, got {}", other.kind())),
    })));
    let interpreter = Interpreter::with_environment(env);

    assert!(eval_bool(&interpreter, r#"first(["a", "b"]) == "a""#));
    assert!(interpreter.run("first(1)").is_err());
}
