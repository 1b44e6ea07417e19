use thiserror::Error;

/// Errors emitted while reading a stylesheet resource.
#[derive(Debug, Error)]
pub(crate) enum StyleSheetError {
    /// Filesystem operation failed.
    #[error("stylesheet IO failed")]
    Io(#[from] std::io::Error),
}
