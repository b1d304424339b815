//! Shape validation and defaulting for untrusted preference data. Declare a
//! spec, point it at anything, and get back a table you can trust.
//!
//! ```
//! use prefsift::{boolean, either, number, string, Spec};
//!
//! let spec = Spec::new()
//!     .field("theme", either(["dark", "light"])?)
//!     .field("font_size", number(13))
//!     .field("font_family", string("monospace"))
//!     .field("line_numbers", boolean(true));
//!
//! let raw: toml::Value = r##"
//!     theme = "light"
//!     font_size = "huge"
//!     accent = "#ff00ff"
//! "##.parse()?;
//!
//! let prefs = spec.validate(&raw);
//! assert_eq!(prefs["theme"].as_str(), Some("light"));   // valid: passes through
//! assert_eq!(prefs["font_size"].as_integer(), Some(13)); // wrong type: fallback
//! assert!(!prefs.contains_key("accent"));                // undeclared: dropped
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Why prefsift
//!
//! Preference data is the least trustworthy input most applications read: it
//! is hand-edited, survives schema changes, and arrives from disk or a
//! request body long after the code that wrote it moved on. The typical
//! response is a wall of per-field plumbing — is the key there, is it the
//! right type, what happens when it isn't — repeated for every setting.
//!
//! Prefsift replaces that plumbing with a spec. The spec declares which
//! fields exist, what type each accepts, and what each falls back to. Every
//! downstream guarantee derives from that one declaration: applying a spec
//! **never fails**, whatever shows up at the front door — a stale table, a
//! lone scalar, an array, or nothing at all.
//!
//! # Design: total by construction
//!
//! A field's checking function is the [`Check`] trait: one method, from a
//! maybe-present raw value to a maybe-present validated value. The built-in
//! checkers cover the common policies:
//!
//! | Checker | Passes through | Falls back to |
//! |---------|----------------|---------------|
//! | [`string`] | strings | the given string |
//! | [`number`] | integers and floats | the given number |
//! | [`boolean`] | booleans | the given boolean |
//! | [`either`] | members of a fixed set | the set's first entry |
//!
//! Each has an `optional_*` twin whose fallback is "leave the field unset" —
//! the `Option` in the `Check` signature is exactly the source-data notion of
//! an absent field. Any closure with the right shape is also a checker, for
//! one-off policies.
//!
//! Two deliberate behaviors of the built-in number checker: it is a **type**
//! check, so `NaN` (a float) passes through untouched, and a numeric string
//! like `"133384"` is rejected, not coerced. Checkers substitute, they never
//! reinterpret.
//!
//! # Sparse input, complete output
//!
//! Input may carry any subset of the declared fields, in any state, plus any
//! number of keys the spec never heard of. Output is the mirror image:
//! every declared field present (minus optional fields that resolved to
//! unset), every undeclared key gone, the input untouched. Feeding a
//! validated table back through the spec returns it unchanged.
//!
//! # Nesting
//!
//! A [`Spec`] is itself a [`Check`], so shapes compose to any depth:
//!
//! ```
//! use prefsift::{number, string, Spec};
//!
//! let spec = Spec::new()
//!     .field("name", string("anonymous"))
//!     .field("editor", Spec::new()
//!         .field("font_family", string("monospace"))
//!         .field("tab_width", number(4)));
//! # let _ = spec;
//! ```
//!
//! Each level applies the same unknown-input-to-safe-output contract
//! independently: a malformed `editor` value degrades to the editor
//! defaults without disturbing its siblings.
//!
//! # Typed output
//!
//! Validation produces a `toml::Table`. When you want a struct instead, the
//! resolve helpers finish the job: [`resolve_str`] parses preference text
//! and validates it, [`resolve_into`] deserializes a validated table into any
//! `serde::Deserialize` type. A spec whose fallbacks cover every
//! non-`Option` field makes that deserialization reliable by construction.
//!
//! # JSON input
//!
//! Preferences that arrive as JSON go through [`validate_json`] (behind the
//! default-on `json` feature): JSON `null` maps to the unset arm, objects
//! convert structurally, and a non-object top level degrades to all defaults
//! like any other garbage. To drop the `serde_json` dependency:
//!
//! ```toml
//! prefsift = { version = "...", default-features = false }
//! ```
//!
//! # Error handling
//!
//! Validation has no error path at all; substituting fallbacks is the whole
//! contract. The fallible edges return [`SiftError`]: constructing an
//! [`either`] with an empty allowed set, handing [`resolve_str`] unparseable
//! text, or asking [`resolve_into`] for a type the validated table does not
//! fit.

pub mod error;

mod check;
mod checks;
#[cfg(feature = "json")]
mod json;
mod resolve;
mod spec;

#[cfg(test)]
mod fixtures;

pub use check::Check;
pub use checks::{
    BoolCheck, EitherCheck, NumberCheck, StringCheck, ToNumber, boolean, either, number,
    optional_boolean, optional_either, optional_number, optional_string, string,
};
pub use error::SiftError;
#[cfg(feature = "json")]
pub use json::{from_json, validate_json};
pub use resolve::{resolve_into, resolve_str, resolve_str_into};
pub use spec::Spec;
