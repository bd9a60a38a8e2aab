//! Error types for every stage of the pipeline.
//!
//! Each stage stops at its first failure: scanning and parsing never return a
//! partial result, and evaluation halts at the first runtime error.

use thiserror::Error;

/// Malformed lexical input.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("[line {line}] Error: {message}")]
pub struct ScanError {
    pub line: usize,
    pub message: String,
}

/// Malformed syntax.
///
/// `location` is either `at end` or `at '<lexeme>'`.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("[line {line}] Error {location}: {message}")]
pub struct ParseError {
    pub line: usize,
    pub location: String,
    pub message: String,
}

/// Errors raised while walking the tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// Lookup of a name the host never defined
    #[error("undefined symbol {name}")]
    UndefinedSymbol { name: String },

    /// Nil where a boolean is required
    #[error("nil value")]
    NilValue,

    /// Non-boolean where a boolean is required
    #[error("not bool value: {value}")]
    NotBool { value: String },

    /// Non-number where a number is required
    #[error("{value} is not number")]
    NotNumber { value: String },

    /// Call on a value that is not callable
    ///
    /// `location` names the call's closing paren, as in [`ParseError`].
    #[error("[line {line}] {location}: not callable")]
    NotCallable { line: usize, location: String },

    /// Wrong number of call arguments
    #[error("[line {line}] {location}: want {want} but got {got} arguments")]
    ArityMismatch {
        line: usize,
        location: String,
        want: usize,
        got: usize,
    },

    /// Host argument conversion failure
    #[error("{function} argument[{index}] '{value}' ({actual}) is not compatible for {expected}")]
    ArgumentMismatch {
        function: String,
        index: usize,
        value: String,
        actual: &'static str,
        expected: String,
    },

    /// Error returned by a host function
    #[error("{function}: {message}")]
    Host { function: String, message: String },

    /// Host function panicked
    #[error("{function} panicked: {message}")]
    HostFault { function: String, message: String },

    /// Unexpected fault caught at the top of an evaluation
    #[error("runtime fault: {message}")]
    Fault { message: String },
}

/// Rejected host registration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistrationError {
    /// Name is not an identifier, or is a keyword
    #[error("'{name}' cannot be used as a symbol name")]
    InvalidName { name: String },
}

/// Any failure of [`crate::run`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}

/// Result alias for the full pipeline.
pub type SiftResult<T> = Result<T, Error>;

/// Extract a readable message from a panic payload.
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
