use toml::Value;

/// A per-field checking function: pure, total, and never failing.
///
/// `value` is the raw field as found on the input, `None` when the field is
/// absent. The return is the field's validated outcome: `Some(v)` stores `v`
/// in the output, `None` leaves the field unset (an optional field with no
/// usable value).
///
/// Checkers are `Send + Sync`: a spec is built once and then shared freely,
/// including across threads, for the life of the process.
pub trait Check: Send + Sync {
    fn check(&self, value: Option<&Value>) -> Option<Value>;
}

/// Any matching closure is a checker, so one-off policies don't need a named
/// type:
///
/// ```
/// use prefsift::Spec;
/// use toml::Value;
///
/// let spec = Spec::new().field("answer", |_: Option<&Value>| Some(Value::Integer(42)));
/// assert_eq!(spec.defaults()["answer"].as_integer(), Some(42));
/// ```
impl<F> Check for F
where
    F: Fn(Option<&Value>) -> Option<Value> + Send + Sync,
{
    fn check(&self, value: Option<&Value>) -> Option<Value> {
        self(value)
    }
}
