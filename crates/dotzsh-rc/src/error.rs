//! Error types for dotzsh-rc

/// Result type for rewriter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rewriting the zshrc
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from the filesystem layer
    #[error(transparent)]
    Fs(#[from] dotzsh_fs::Error),
}
