//! Functions callable from expressions.
//!
//! Two implementations exist: the [`Print`] built-in, and [`HostFunction`],
//! an adapter that wraps an ordinary Rust closure. The adapter captures the
//! closure's arity and parameter types once, at registration time, and
//! converts each argument on every call.

use std::{
    cell::RefCell,
    io::{self, Write},
    panic::{self, AssertUnwindSafe},
    rc::Rc,
};

use crate::{
    error::{RuntimeError, panic_message},
    value::{FromValue, IntoValue, Value},
};

/// Anything invocable from an expression.
pub trait Callable {
    fn name(&self) -> &str;

    /// Exact number of arguments the callable accepts.
    fn arity(&self) -> usize;

    /// Invoke with already evaluated arguments; `args.len() == self.arity()`.
    fn invoke(&self, args: Vec<Value>) -> Result<Value, RuntimeError>;
}

/// Built-in `print(value)`: writes the value on its own line, returns nil.
pub struct Print {
    out: RefCell<Box<dyn Write>>,
}

impl Print {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer(out: impl Write + 'static) -> Self {
        Print {
            out: RefCell::new(Box::new(out)),
        }
    }
}

impl Default for Print {
    fn default() -> Self {
        Self::new()
    }
}

impl Callable for Print {
    fn name(&self) -> &str {
        "print"
    }

    fn arity(&self) -> usize {
        1
    }

    fn invoke(&self, args: Vec<Value>) -> Result<Value, RuntimeError> {
        let mut out = self.out.borrow_mut();
        for arg in &args {
            writeln!(out, "{}", arg).map_err(|e| RuntimeError::Host {
                function: "print".to_string(),
                message: e.to_string(),
            })?;
        }
        Ok(Value::Nil)
    }
}

/// A Rust closure usable as a host function.
///
/// Implemented for `Fn` closures of up to six parameters whose parameter types
/// implement [`FromValue`] and whose return type implements [`IntoValue`].
/// `Args` is the tuple of parameter types; it only guides inference.
pub trait HostFn<Args>: 'static {
    fn arity(&self) -> usize;

    /// Convert `args` positionally and call the closure.
    fn call_with(&self, name: &str, args: &[Value]) -> Result<Value, RuntimeError>;
}

fn convert_arg<T: FromValue>(name: &str, index: usize, value: &Value) -> Result<T, RuntimeError> {
    T::from_value(value).ok_or_else(|| RuntimeError::ArgumentMismatch {
        function: name.to_string(),
        index,
        value: value.to_string(),
        actual: value.kind(),
        expected: T::expected(),
    })
}

fn into_result(name: &str, output: impl IntoValue) -> Result<Value, RuntimeError> {
    output.into_value().map_err(|message| RuntimeError::Host {
        function: name.to_string(),
        message,
    })
}

macro_rules! impl_host_fn {
    ($($ty:ident $var:ident),*) => {
        impl<F, R, $($ty,)*> HostFn<($($ty,)*)> for F
        where
            F: Fn($($ty),*) -> R + 'static,
            R: IntoValue,
            $($ty: FromValue,)*
        {
            fn arity(&self) -> usize {
                let params: &[&str] = &[$(stringify!($ty)),*];
                params.len()
            }

            #[allow(unused_variables, unused_mut, unused_assignments)]
            fn call_with(&self, name: &str, args: &[Value]) -> Result<Value, RuntimeError> {
                let mut index = 0;
                $(
                    let $var: $ty = match args.get(index) {
                        Some(value) => convert_arg(name, index, value)?,
                        None => return Err(RuntimeError::Fault {
                            message: format!("{} called with {} arguments", name, args.len()),
                        }),
                    };
                    index += 1;
                )*
                into_result(name, (self)($($var),*))
            }
        }
    };
}

impl_host_fn!();
impl_host_fn!(A0 a0);
impl_host_fn!(A0 a0, A1 a1);
impl_host_fn!(A0 a0, A1 a1, A2 a2);
impl_host_fn!(A0 a0, A1 a1, A2 a2, A3 a3);
impl_host_fn!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4);
impl_host_fn!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);

type Invoker = Box<dyn Fn(&[Value]) -> Result<Value, RuntimeError>>;

/// Adapter turning a host closure into a [`Callable`] with a fixed arity.
///
/// A panic inside the closure is caught and reported as
/// [`RuntimeError::HostFault`]; it never unwinds into the evaluator.
pub struct HostFunction {
    name: String,
    arity: usize,
    invoke: Invoker,
}

impl HostFunction {
    /// Wrap a typed closure.
    ///
    /// ```
    /// use sift_lang::{Callable, HostFunction, Value};
    ///
    /// let double = HostFunction::new("double", |n: i64| n * 2);
    /// assert_eq!(double.arity(), 1);
    /// assert_eq!(double.invoke(vec![Value::Number(4.0)]).unwrap(), Value::Number(8.0));
    /// ```
    pub fn new<F, Args>(name: impl Into<String>, f: F) -> Self
    where
        F: HostFn<Args>,
        Args: 'static,
    {
        let name = name.into();
        let arity = f.arity();
        let fn_name = name.clone();
        HostFunction {
            name,
            arity,
            invoke: Box::new(move |args| f.call_with(&fn_name, args)),
        }
    }

    /// Wrap a closure that takes the raw argument slice.
    pub fn dynamic<F>(name: impl Into<String>, arity: usize, f: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, String> + 'static,
    {
        let name = name.into();
        let fn_name = name.clone();
        HostFunction {
            name,
            arity,
            invoke: Box::new(move |args| {
                f(args).map_err(|message| RuntimeError::Host {
                    function: fn_name.clone(),
                    message,
                })
            }),
        }
    }

    pub fn into_value(self) -> Value {
        Value::Callable(Rc::new(self))
    }
}

impl Callable for HostFunction {
    fn name(&self) -> &str {
        &self.name
    }

    fn arity(&self) -> usize {
        self.arity
    }

    fn invoke(&self, args: Vec<Value>) -> Result<Value, RuntimeError> {
        tracing::trace!(function = %self.name, args = args.len(), "calling host function");
        match panic::catch_unwind(AssertUnwindSafe(|| (self.invoke)(&args))) {
            Ok(result) => result,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::warn!(function = %self.name, %message, "host function panicked");
                Err(RuntimeError::HostFault {
                    function: self.name.clone(),
                    message,
                })
            }
        }
    }
}
