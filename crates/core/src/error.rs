/// Result alias that carries the custom [`SiteError`] type.
pub type Result<T> = std::result::Result<T, SiteError>;

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Free-form message for failures that do not warrant their own variant.
    #[error("{0}")]
    Message(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid TOML configuration: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("failed to serialize configuration as TOML: {0}")]
    TomlSer(#[from] toml::ser::Error),
    /// A rotator was constructed without any items.
    #[error("a rotator needs at least one item")]
    EmptyRotator,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// The configuration file extension is neither `.json` nor `.toml`.
    #[error("unsupported configuration format `{0}` (expected .json or .toml)")]
    UnsupportedFormat(String),
    #[error("unknown rotator command `{0}` (expected next, prev, or goto:<index>)")]
    UnknownCommand(String),
}

impl SiteError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_displays_verbatim() {
        let err = SiteError::msg(format!("the {} section is disabled", "Testimonials"));
        assert!(matches!(err, SiteError::Message(_)));
        assert_eq!(err.to_string(), "the Testimonials section is disabled");
    }
}
