//! CLI support for sift-lang
//!
//! Provides programmatic access to the sift CLI functionality so that other
//! tools can embed it.

mod check;
mod convert;
mod docs;
mod inspect;
mod onboard;
mod prelude;

pub use check::{CheckOptions, CheckResult, execute_check};
pub use convert::{json_to_value, json_to_variables};
pub use docs::{DocCategory, get_doc_category, get_docs_overview};
pub use inspect::{list_tokens, render_ast};
pub use onboard::get_onboarding_content;
pub use prelude::install_prelude;

use std::io;

use thiserror::Error;

use crate::{ParseError, RuntimeError, ScanError};

/// Errors that can occur during CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Scanner error
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    /// Parser error
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Evaluation error
    #[error("Evaluation error: {0}")]
    Eval(#[from] RuntimeError),

    /// JSON parsing error
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input is valid JSON but has a shape the value space cannot hold
    #[error("Unsupported input: {0}")]
    Input(String),

    /// Unknown documentation category
    #[error("Unknown category: '{0}'\nRun 'sift docs' to see available categories.")]
    UnknownCategory(String),
}

impl From<crate::Error> for CliError {
    fn from(e: crate::Error) -> Self {
        match e {
            crate::Error::Scan(e) => CliError::Scan(e),
            crate::Error::Parse(e) => CliError::Parse(e),
            crate::Error::Runtime(e) => CliError::Eval(e),
        }
    }
}
