//! Documentation content for the sift CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Operators,
    Types,
    Functions,
    Errors,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" => Some(Self::Syntax),
            "operators" | "ops" => Some(Self::Operators),
            "types" | "type" => Some(Self::Types),
            "functions" | "function" | "calls" => Some(Self::Functions),
            "errors" | "error" => Some(Self::Errors),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"SIFT DOCUMENTATION

Sift is an expression language for boolean predicates over host-supplied data.
An expression reads variables, calls host functions, compares the results and
combines the comparisons with `and` / `or`.

DOCUMENTATION CATEGORIES

  syntax      Literals, identifiers, calls, arrays and grouping
  operators   Comparison, equality, logical and prefix operators
  types       Value kinds and how they compare
  functions   Calling host functions and the CLI prelude
  errors      Scan, parse and runtime errors

QUICK REFERENCE

  age >= 18                      Compare a variable
  var("status") == "active"      Call a function
  tags == ["new", "sale"]        Positional array equality
  !(a == b) or c                 Negation and grouping

Run 'sift doc <category>' for detailed documentation.
Run 'sift onboard' for a short tutorial.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Types) => Ok(TYPES_DOC),
        Some(DocCategory::Functions) => Ok(FUNCTIONS_DOC),
        Some(DocCategory::Errors) => Ok(ERRORS_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX

NUMBERS
  42   3.14
    Decimal digits with at most one fractional part. No exponent, no leading
    sign: write -1 to negate.

STRINGS
  "hello"
    Double quoted. There are no escape sequences; a string may span lines.

BOOLEANS
  true   false

IDENTIFIERS
  age   ner_entities
    Letters, digits and underscores. Reserved words: and, or, nil, true, false.
    `nil` is reserved but cannot be written as a value.

CALLS
  name(arg, arg, ...)
    Arguments are full expressions. Calls can be chained: f(1)(2).

ARRAYS
  [expr, expr, ...]
    Elements stay unevaluated until the array is compared with ==.

GROUPING
  (expr)

ARITHMETIC
  Not supported. + * / are rejected by the scanner.
"#;

const OPERATORS_DOC: &str = r#"OPERATORS (lowest to highest precedence)

  or                 Short-circuit: the right side only runs if the left is false
  and                Short-circuit: the right side only runs if the left is true
  ==  !=             Equality
  >  >=  <  <=       Numeric comparison
  !  -               Logical not, numeric negation
  f(...)             Call

  Both sides of `and` / `or` must be booleans. There is no truthiness:
    1 and true       -> runtime error

  Comparisons need numbers on both sides:
    "a" > 1          -> runtime error
    "a" > "b"        -> runtime error

  Equality on one number and one non-number is an error; other mismatched
  kinds are simply unequal:
    "1" == 1         -> runtime error
    "1" == true      -> false
"#;

const TYPES_DOC: &str = r#"TYPES

  nil        What a function without a return value yields
  bool       true / false
  number     64-bit float; every host integer becomes a number
  string     UTF-8 text
  array      Ordered sequence of values
  function   Host or built-in function

ARRAY EQUALITY
  Arrays compare element by element, in order:
    tags == ["a", "b"]
  - Different lengths are never equal
  - Comparison stops at the first mismatching element; later literal
    elements are not evaluated
  - Elements of different kinds are unequal

JSON INPUT
  Top-level fields of the --input object become variables. Nested objects
  are rejected.
"#;

const FUNCTIONS_DOC: &str = r#"FUNCTIONS

  Functions are supplied by the host. A call must pass exactly as many
  arguments as the function declares:
    f(1)   where f takes none   -> want 0 but got 1 arguments

  Arguments must convert to the declared parameter types. A whole number
  converts to an integer parameter; 1.5 does not.

CLI PRELUDE
  print(value)             Print a value on its own line, returns nil
  var(name)                Input field by name, nil when missing
  len(value)               Length of an array or string
  contains(array, value)   Whether the array holds the value
  matches(text, pattern)   Regular expression match
"#;

const ERRORS_DOC: &str = r#"ERRORS

  Every stage stops at its first error and nothing is evaluated after it.

  Scan error      Unknown character or unterminated string
                    [line 1] Error: unexpected character +
  Parse error     Unexpected token
                    [line 1] Error at end: Expect ')' after expression.
                  Nesting deeper than 64 levels is also a parse error.
  Runtime error   Type mismatch, undefined symbol, wrong argument count,
                  call on a non-function, or a failing host function
                    undefined symbol agee
"#;
