//! Built-in checking functions: the per-field policies a spec is assembled
//! from.
//!
//! Each factory returns a small struct holding its fallback (or allowed set)
//! as immutable state, established once at construction and read-only from
//! then on. Every checker is total: any input, of any type, maps to a defined
//! outcome.

use toml::Value;

use crate::check::Check;
use crate::error::SiftError;

/// Accepts strings; anything else becomes the fallback.
#[derive(Debug, Clone)]
pub struct StringCheck {
    initial: Option<String>,
}

/// A string field falling back to `initial` when the input is missing or not
/// a string.
pub fn string(initial: impl Into<String>) -> StringCheck {
    StringCheck {
        initial: Some(initial.into()),
    }
}

/// A string field with no fallback: missing or non-string input leaves the
/// field unset.
pub fn optional_string() -> StringCheck {
    StringCheck { initial: None }
}

impl Check for StringCheck {
    fn check(&self, value: Option<&Value>) -> Option<Value> {
        match value {
            Some(Value::String(_)) => value.cloned(),
            _ => self.initial.clone().map(Value::String),
        }
    }
}

/// Accepts numbers (integer or float); anything else becomes the fallback.
///
/// This is a type check, not a numeric-validity check: `NaN` is a float and
/// passes through unchanged. Callers that want to reject `NaN` need a policy
/// of their own on top.
#[derive(Debug, Clone)]
pub struct NumberCheck {
    initial: Option<Value>,
}

/// A numeric field falling back to `initial` when the input is missing or not
/// a number. Both `number(8080)` and `number(0.5)` type-check; `number("x")`
/// does not.
pub fn number(initial: impl ToNumber) -> NumberCheck {
    NumberCheck {
        initial: Some(initial.to_number()),
    }
}

/// A numeric field with no fallback.
pub fn optional_number() -> NumberCheck {
    NumberCheck { initial: None }
}

impl Check for NumberCheck {
    fn check(&self, value: Option<&Value>) -> Option<Value> {
        match value {
            Some(Value::Integer(_)) | Some(Value::Float(_)) => value.cloned(),
            _ => self.initial.clone(),
        }
    }
}

/// Conversion into a TOML number, sealed over the integer and float types a
/// fallback can be written as.
pub trait ToNumber: private::Sealed {
    fn to_number(self) -> Value;
}

mod private {
    pub trait Sealed {}
    impl Sealed for i64 {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for f64 {}
    impl Sealed for f32 {}
}

impl ToNumber for i64 {
    fn to_number(self) -> Value {
        Value::Integer(self)
    }
}

impl ToNumber for i32 {
    fn to_number(self) -> Value {
        Value::Integer(self.into())
    }
}

impl ToNumber for u32 {
    fn to_number(self) -> Value {
        Value::Integer(self.into())
    }
}

impl ToNumber for f64 {
    fn to_number(self) -> Value {
        Value::Float(self)
    }
}

impl ToNumber for f32 {
    fn to_number(self) -> Value {
        Value::Float(self.into())
    }
}

/// Accepts booleans; anything else becomes the fallback.
#[derive(Debug, Clone)]
pub struct BoolCheck {
    initial: Option<bool>,
}

/// A boolean field falling back to `initial`.
pub fn boolean(initial: bool) -> BoolCheck {
    BoolCheck {
        initial: Some(initial),
    }
}

/// A boolean field with no fallback.
pub fn optional_boolean() -> BoolCheck {
    BoolCheck { initial: None }
}

impl Check for BoolCheck {
    fn check(&self, value: Option<&Value>) -> Option<Value> {
        match value {
            Some(Value::Boolean(_)) => value.cloned(),
            _ => self.initial.map(Value::Boolean),
        }
    }
}

/// Accepts only members of a fixed allowed set; anything else becomes the
/// set's first entry.
///
/// Entry 0 is the canonical fallback, so order the allowed list deliberately.
/// Membership uses `Value` equality.
#[derive(Debug, Clone)]
pub struct EitherCheck {
    /// Allowed outcomes. A `None` entry marks "unset" as a legal outcome.
    /// Never empty.
    allowed: Vec<Option<Value>>,
}

/// A field constrained to a fixed set of values.
///
/// Fails with [`SiftError::EmptyAllowedSet`] when `allowed` is empty — an
/// empty set has no fallback to offer.
pub fn either<I>(allowed: I) -> Result<EitherCheck, SiftError>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let allowed: Vec<Option<Value>> = allowed.into_iter().map(|v| Some(v.into())).collect();
    if allowed.is_empty() {
        return Err(SiftError::EmptyAllowedSet);
    }
    Ok(EitherCheck { allowed })
}

/// Like [`either`], but the field may also stay unset, and "unset" is the
/// fallback for values outside the allowed set.
pub fn optional_either<I>(allowed: I) -> EitherCheck
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let mut entries: Vec<Option<Value>> = vec![None];
    entries.extend(allowed.into_iter().map(|v| Some(v.into())));
    EitherCheck { allowed: entries }
}

impl Check for EitherCheck {
    fn check(&self, value: Option<&Value>) -> Option<Value> {
        if self.allowed.iter().any(|entry| entry.as_ref() == value) {
            return value.cloned();
        }
        self.allowed[0].clone()
    }
}
