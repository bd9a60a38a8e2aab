use std::{fmt, rc::Rc};

use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::{ast::Expr, callable::Callable, printer::render};

/// A run-time value.
///
/// Numbers have a single representation: every host integer or float width is
/// converted to `f64` when it enters the value space.
///
/// # Examples
///
/// ```
/// use sift_lang::Value;
///
/// let age = Value::from(18_u8);
/// assert_eq!(age, Value::Number(18.0));
///
/// let tags = Value::from(vec!["new", "sale"]);
/// assert_eq!(tags.to_string(), "[new, sale]");
/// ```
#[derive(Clone)]
pub enum Value {
    /// Result of a host function with no return value
    Nil,

    /// Boolean
    Bool(bool),

    /// 64-bit float
    Number(f64),

    /// UTF-8 string
    String(String),

    /// Ordered sequence
    Array(Vec<Value>),

    /// Built-in or host function
    Callable(Rc<dyn Callable>),

    /// Unevaluated array-literal element
    ///
    /// Forced lazily by equality, and before a value leaves the evaluator.
    Deferred(Rc<Expr>),
}

impl Value {
    /// Human-readable kind name, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Callable(_) => "function",
            Value::Deferred(_) => "expression",
        }
    }

    /// Numeric coercion: only numbers coerce.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Callable(c) => write!(f, "<fn {}/{}>", c.name(), c.arity()),
            Value::Deferred(expr) => f.write_str(&render(expr)),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("Nil"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Value::Callable(c) => f
                .debug_struct("Callable")
                .field("name", &c.name())
                .field("arity", &c.arity())
                .finish(),
            Value::Deferred(expr) => f.debug_tuple("Deferred").field(&render(expr)).finish(),
        }
    }
}

/// Structural equality, used by tests and hosts.
///
/// The language's own `==` lives in the evaluator, since it has to force
/// deferred elements.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Callable(a), Value::Callable(b)) => std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b)),
            (Value::Deferred(a), Value::Deferred(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Nil, Into::into)
    }
}

impl From<Rc<dyn Callable>> for Value {
    fn from(c: Rc<dyn Callable>) -> Self {
        Value::Callable(c)
    }
}

/// Conversion of an argument value into a host parameter type.
///
/// Conversions never lose information: an integer parameter only accepts a
/// whole number within its range.
pub trait FromValue: Sized {
    /// `None` when the value is not compatible with `Self`.
    fn from_value(value: &Value) -> Option<Self>;

    /// Name of the expected type, for error messages.
    fn expected() -> String;
}

/// Conversion of a host return value into the value space.
///
/// `Err` carries a host error message.
pub trait IntoValue {
    fn into_value(self) -> Result<Value, String>;
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }

    fn expected() -> String {
        "any".to_string()
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }

    fn expected() -> String {
        "bool".to_string()
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }

    fn expected() -> String {
        "string".to_string()
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_number()
    }

    fn expected() -> String {
        "f64".to_string()
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Option<Self> {
        let n = value.as_number()?;
        let narrowed = n as f32;
        (narrowed as f64 == n).then_some(narrowed)
    }

    fn expected() -> String {
        "f32".to_string()
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Array(items) => items.iter().map(T::from_value).collect(),
            _ => None,
        }
    }

    fn expected() -> String {
        format!("array of {}", T::expected())
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Nil => Some(None),
            other => T::from_value(other).map(Some),
        }
    }

    fn expected() -> String {
        format!("optional {}", T::expected())
    }
}

/// Exact float to integer conversion; fractional or out-of-range values fail.
fn whole_number(n: f64) -> Option<Decimal> {
    if n.fract() != 0.0 {
        return None;
    }
    Decimal::from_f64_retain(n)
}

macro_rules! integer_value {
    ($($ty:ty => $to:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }

            impl FromValue for $ty {
                fn from_value(value: &Value) -> Option<Self> {
                    whole_number(value.as_number()?)?.$to()
                }

                fn expected() -> String {
                    stringify!($ty).to_string()
                }
            }

            impl IntoValue for $ty {
                fn into_value(self) -> Result<Value, String> {
                    Ok(Value::from(self))
                }
            }
        )*
    };
}

integer_value! {
    i8 => to_i8,
    i16 => to_i16,
    i32 => to_i32,
    i64 => to_i64,
    isize => to_isize,
    u8 => to_u8,
    u16 => to_u16,
    u32 => to_u32,
    u64 => to_u64,
    usize => to_usize,
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl IntoValue for () {
    fn into_value(self) -> Result<Value, String> {
        Ok(Value::Nil)
    }
}

impl IntoValue for Value {
    fn into_value(self) -> Result<Value, String> {
        Ok(self)
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Result<Value, String> {
        Ok(Value::Bool(self))
    }
}

impl IntoValue for f32 {
    fn into_value(self) -> Result<Value, String> {
        Ok(Value::from(self))
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Result<Value, String> {
        Ok(Value::Number(self))
    }
}

impl IntoValue for String {
    fn into_value(self) -> Result<Value, String> {
        Ok(Value::String(self))
    }
}

impl IntoValue for &'static str {
    fn into_value(self) -> Result<Value, String> {
        Ok(Value::from(self))
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn into_value(self) -> Result<Value, String> {
        self.into_iter()
            .map(IntoValue::into_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Result<Value, String> {
        match self {
            Some(v) => v.into_value(),
            None => Ok(Value::Nil),
        }
    }
}

impl<T: IntoValue, E: fmt::Display> IntoValue for Result<T, E> {
    fn into_value(self) -> Result<Value, String> {
        self.map_err(|e| e.to_string())?.into_value()
    }
}
