pub mod ast;
pub mod callable;
pub mod cli;
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod printer;
pub mod value;

pub use ast::{BinOp, Expr, Literal, LogicalOp, Token, TokenKind, UnaryOp};
pub use callable::{Callable, HostFn, HostFunction, Print};
pub use environment::Environment;
pub use error::{Error, ParseError, RegistrationError, RuntimeError, ScanError, SiftResult};
pub use evaluator::{Interpreter, run};
pub use lexer::{Lexer, scan};
pub use output::{to_json, to_json_pretty, to_json_string};
pub use parser::{Parser, parse};
pub use printer::render;
pub use value::{FromValue, IntoValue, Value};
