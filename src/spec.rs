//! Spec composition: lift per-field checkers into a whole-shape validator.

use toml::{Table, Value};

use crate::check::Check;

/// An object-shape specification: field names mapped to checking functions.
///
/// Built once with [`new`](Spec::new) and chained [`field`](Spec::field)
/// calls, then reused for the life of the process. Applying a spec never
/// fails and never mutates the input: every declared field of the output is
/// either the validated input value or the checker's fallback, whatever the
/// input looks like.
///
/// A `Spec` is itself a [`Check`], so specs nest. A malformed nested value at
/// any depth degrades to that sub-shape's defaults without affecting sibling
/// fields:
///
/// ```
/// use prefsift::{number, string, Spec};
///
/// let editor = Spec::new()
///     .field("font_family", string("monospace"))
///     .field("tab_width", number(4));
///
/// let spec = Spec::new()
///     .field("name", string("anonymous"))
///     .field("editor", editor);
///
/// let raw: toml::Value = r#"
///     name = "ada"
///     [editor]
///     tab_width = 8
/// "#.parse()?;
///
/// let prefs = spec.validate(&raw);
/// let editor = prefs["editor"].as_table().unwrap();
/// assert_eq!(editor["tab_width"].as_integer(), Some(8));
/// assert_eq!(editor["font_family"].as_str(), Some("monospace"));
/// # Ok::<(), toml::de::Error>(())
/// ```
pub struct Spec {
    fields: Vec<(String, Box<dyn Check>)>,
}

impl Spec {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Declare a field and its checking function.
    ///
    /// Fields are checked in declaration order. Redeclaring a name replaces
    /// the earlier checker.
    pub fn field(mut self, name: impl Into<String>, check: impl Check + 'static) -> Self {
        let name = name.into();
        self.fields.retain(|(existing, _)| *existing != name);
        self.fields.push((name, Box::new(check)));
        self
    }

    /// Validate an untrusted value against this spec.
    ///
    /// If `raw` is a table, declared fields are looked up on it; any other
    /// input (string, number, boolean, datetime, array) contributes no fields
    /// and the result is [`defaults`](Spec::defaults). Undeclared input keys
    /// never reach the output.
    pub fn validate(&self, raw: &Value) -> Table {
        self.apply(Some(raw))
    }

    /// The all-defaults output: what any input with no usable fields
    /// validates to.
    pub fn defaults(&self) -> Table {
        self.apply(None)
    }

    fn apply(&self, raw: Option<&Value>) -> Table {
        let source = match raw {
            Some(Value::Table(table)) => Some(table),
            _ => None,
        };

        let mut output = Table::new();
        for (name, check) in &self.fields {
            let field = source.and_then(|table| table.get(name));
            if let Some(validated) = check.check(field) {
                output.insert(name.clone(), validated);
            }
        }
        output
    }
}

impl Default for Spec {
    fn default() -> Self {
        Self::new()
    }
}

/// A nested spec checks a field by validating it as a sub-shape. The outcome
/// is always a table, so a declared sub-shape field is always present — with
/// all defaults when the raw field is missing or not a table.
impl Check for Spec {
    fn check(&self, value: Option<&Value>) -> Option<Value> {
        Some(Value::Table(self.apply(value)))
    }
}
