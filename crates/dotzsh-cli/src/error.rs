//! Error types for dotzsh-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from the rewriter
    #[error(transparent)]
    Rc(#[from] dotzsh_rc::Error),

    /// Error from the filesystem layer
    #[error(transparent)]
    Fs(#[from] dotzsh_fs::Error),

    /// Error from an installer
    #[error(transparent)]
    Install(#[from] dotzsh_install::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed configuration file
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: String, message: String },
}
