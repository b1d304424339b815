//! Resolution pipeline: from preference text, or any untrusted value, to a
//! validated table or a caller-defined struct.
//!
//! Operates on in-memory data only — reading bytes from disk or a request
//! body is the caller's concern. Only the edges of the pipeline can fail
//! (unparseable text on the way in, a shape the target type cannot absorb on
//! the way out); validation itself is total.

use serde::de::DeserializeOwned;
use toml::{Table, Value};

use crate::error::SiftError;
use crate::spec::Spec;

/// Parse TOML preference text and validate it against `spec`.
pub fn resolve_str(spec: &Spec, content: &str) -> Result<Table, SiftError> {
    let table: Table = toml::from_str(content).map_err(SiftError::Parse)?;
    Ok(spec.validate(&Value::Table(table)))
}

/// Validate `raw` against `spec`, then deserialize the validated table into
/// `T`.
///
/// With a spec whose fallbacks cover every non-`Option` field of `T`, this
/// turns arbitrary untrusted input into a typed struct in one step. Optional
/// checkers pair with `Option<T>` fields: an unset outcome deserializes to
/// `None`.
pub fn resolve_into<T>(spec: &Spec, raw: &Value) -> Result<T, SiftError>
where
    T: DeserializeOwned,
{
    Value::Table(spec.validate(raw))
        .try_into()
        .map_err(SiftError::IntoTyped)
}

/// [`resolve_str`] followed by [`resolve_into`]: parse, validate, type.
pub fn resolve_str_into<T>(spec: &Spec, content: &str) -> Result<T, SiftError>
where
    T: DeserializeOwned,
{
    let validated = resolve_str(spec, content)?;
    Value::Table(validated).try_into().map_err(SiftError::IntoTyped)
}
