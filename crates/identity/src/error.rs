use thiserror::Error;

/// Errors that can occur while determining the host identifier.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The operating system refused to report a host name.
    #[error("Failed to query host name: {0}")]
    Os(#[from] std::io::Error),

    /// The host name reported by the OS is not valid UTF-8.
    #[error("Host name is not valid UTF-8: {0}")]
    NotUnicode(String),

    /// The host name is empty or only whitespace.
    #[error("Host name is empty")]
    Empty,
}

/// Result type for host resolution.
pub type Result<T> = std::result::Result<T, ResolveError>;
