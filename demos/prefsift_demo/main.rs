//! # prefsift demo
//!
//! A sample program that runs one preferences spec against progressively less
//! trustworthy inputs. This is **not** a real app — it exists purely to
//! demonstrate and manually verify prefsift's behavior.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example prefsift_demo
//! ```
//!
//! ## Behaviors demonstrated
//!
//! | Behavior                  | Input                                        |
//! |---------------------------|----------------------------------------------|
//! | Valid fields pass through | well-formed TOML                             |
//! | Wrong types fall back     | `font_size = "huge"`                         |
//! | Unknown keys are dropped  | `accent = "#ff00ff"`                         |
//! | Constrained sets          | `theme = "mauve"` falls back to `"dark"`     |
//! | Nested shapes             | `[editor]` sub-table, partially supplied     |
//! | Non-table input           | a bare scalar degrades to all defaults       |
//! | JSON input                | a request-body object with a `null` field    |

use prefsift::{
    SiftError, Spec, boolean, either, number, optional_string, resolve_str, string, validate_json,
};

fn prefs_spec() -> Result<Spec, SiftError> {
    Ok(Spec::new()
        .field("theme", either(["dark", "light", "solarized"])?)
        .field("font_size", number(13))
        .field("line_numbers", boolean(true))
        .field("nickname", optional_string())
        .field(
            "editor",
            Spec::new()
                .field("font_family", string("monospace"))
                .field("tab_width", number(4)),
        ))
}

fn show(label: &str, prefs: &toml::Table) -> Result<(), toml::ser::Error> {
    println!("--- {label}");
    println!("{}", toml::to_string(prefs)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let spec = prefs_spec()?;

    let well_formed = r#"
        theme = "light"
        font_size = 16
        nickname = "ada"

        [editor]
        tab_width = 8
    "#;
    show("well-formed input", &resolve_str(&spec, well_formed)?)?;

    let battered = r##"
        theme = "mauve"
        font_size = "huge"
        line_numbers = 1
        accent = "#ff00ff"
        editor = "not a table"
    "##;
    show("battered input", &resolve_str(&spec, battered)?)?;

    show("scalar input", &spec.validate(&toml::Value::Integer(9)))?;

    let body = serde_json::json!({
        "theme": "solarized",
        "font_size": null,
        "editor": { "tab_width": 2 }
    });
    show("JSON request body", &validate_json(&spec, &body))?;

    Ok(())
}
