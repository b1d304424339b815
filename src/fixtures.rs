#[cfg(test)]
pub mod test {
    use crate::checks::{boolean, either, number, string};
    use crate::spec::Spec;

    /// Editor-preferences spec shared across module tests.
    ///
    /// Defaults: `theme = "dark"`, `font_size = 13`,
    /// `font_family = "monospace"`, `line_numbers = true`.
    pub fn prefs_spec() -> Spec {
        Spec::new()
            .field("theme", either(["dark", "light", "solarized"]).unwrap())
            .field("font_size", number(13))
            .field("font_family", string("monospace"))
            .field("line_numbers", boolean(true))
    }

    #[test]
    fn prefs_spec_defaults() {
        let defaults = prefs_spec().defaults();
        assert_eq!(defaults["theme"].as_str(), Some("dark"));
        assert_eq!(defaults["font_size"].as_integer(), Some(13));
        assert_eq!(defaults["font_family"].as_str(), Some("monospace"));
        assert_eq!(defaults["line_numbers"].as_bool(), Some(true));
    }
}
