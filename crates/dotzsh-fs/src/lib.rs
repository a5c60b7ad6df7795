//! Filesystem layer for dotzsh
//!
//! Provides the fixed home-directory layout and atomic file operations
//! used by the zshrc rewriter and the installers.

pub mod error;
pub mod io;
pub mod layout;

pub use error::{Error, Result};
pub use io::{copy_once, read_text, write_atomic, write_text};
pub use layout::ZshrcLayout;
