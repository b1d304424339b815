use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiftError {
    #[error("'either' needs at least one allowed value — entry 0 is the fallback")]
    EmptyAllowedSet,

    #[error("Failed to parse preferences: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("Validated preferences did not fit the target type: {0}")]
    IntoTyped(#[source] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_allowed_set_formats() {
        let err = SiftError::EmptyAllowedSet;
        assert!(err.to_string().contains("either"));
        assert!(err.to_string().contains("fallback"));
    }

    #[test]
    fn parse_error_carries_toml_message() {
        let source = toml::from_str::<toml::Table>("not = = toml").unwrap_err();
        let err = SiftError::Parse(source);
        assert!(err.to_string().starts_with("Failed to parse preferences"));
    }
}
