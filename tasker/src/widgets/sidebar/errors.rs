use thiserror::Error;

/// Errors emitted while parsing a keyboard shortcut literal.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ShortcutError {
    #[error("shortcut is empty")]
    Empty,
    #[error("unknown modifier '{0}'")]
    UnknownModifier(String),
    #[error("shortcut has no key")]
    MissingKey,
    #[error("shortcut binds more than one key")]
    MultipleKeys,
    #[error("unsupported key '{0}'")]
    UnsupportedKey(String),
}
