//! Error types for dotzsh-install

/// Result type for installer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while installing packages, plugins, and tools
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Install of {name} failed (command: {command}, exit code: {exit_code:?}). Check the output above.")]
    InstallFailed {
        name: String,
        command: String,
        exit_code: Option<i32>,
    },

    #[error("Required binary not found on PATH: {tool}{}", hint.as_deref().unwrap_or(""))]
    BinaryNotFound {
        tool: String,
        hint: Option<String>,
    },

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
