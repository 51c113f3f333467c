/// Convenience result type used across the reveal feed.
pub type RevealResult<T> = Result<T, RevealError>;

/// Top-level error taxonomy used by the feed, store and tracker APIs.
#[derive(thiserror::Error, Debug)]
pub enum RevealError {
    /// Invalid user-provided configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A random fact was requested from a store with no properties.
    #[error("property store is empty")]
    EmptyStore,

    /// A fact name that is not present in the store.
    #[error("unknown property '{0}'")]
    UnknownProperty(String),

    /// Feed scheduling failed (surface misbehaved or a limit was hit).
    #[error("feed error: {0}")]
    Feed(String),

    /// The contract event source reported a failure.
    #[error("chain error: {0}")]
    Chain(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RevealError {
    /// Build a [`RevealError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RevealError::UnknownProperty`] value.
    pub fn unknown_property(name: impl Into<String>) -> Self {
        Self::UnknownProperty(name.into())
    }

    /// Build a [`RevealError::Feed`] value.
    pub fn feed(msg: impl Into<String>) -> Self {
        Self::Feed(msg.into())
    }

    /// Build a [`RevealError::Chain`] value.
    pub fn chain(msg: impl Into<String>) -> Self {
        Self::Chain(msg.into())
    }

    /// Build a [`RevealError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for RevealError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
