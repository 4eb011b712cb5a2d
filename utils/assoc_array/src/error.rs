use thiserror::Error;

/// Failures reported by `AssociativeArray`. Callers should match on the
/// variant; the message is informational only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("null key")]
    NullKey,

    #[error("key not found{}", detail(.0))]
    KeyNotFound(Option<String>),
}

fn detail(msg: &Option<String>) -> String {
    msg.as_deref()
        .map(|msg| format!(": {msg}"))
        .unwrap_or_default()
}

impl Error {
    pub(crate) fn key_not_found() -> Self {
        Error::KeyNotFound(None)
    }

    pub(crate) fn null_key_lookup() -> Self {
        Error::KeyNotFound(Some("key is null".to_string()))
    }
}

pub type Result<T> = core::result::Result<T, Error>;
