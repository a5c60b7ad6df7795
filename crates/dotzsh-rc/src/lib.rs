//! Managed-block rewriting of the user's zshrc
//!
//! The zshrc is modeled as an ordered sequence of lines. Every
//! transformation (legacy-fragment deletion, block removal, anchor-relative
//! insertion) is a pure function over that sequence; the file is read once
//! and written back once, atomically.

pub mod block;
pub mod error;
pub mod health;
pub mod insert;
pub mod legacy;
pub mod render;
pub mod restore;
pub mod rewrite;

pub use block::{BLOCK_END, BLOCK_START};
pub use error::{Error, Result};
pub use health::is_broken_or_missing;
pub use render::{BlockInputs, render_block};
pub use restore::{RestoreOutcome, RestoreReport, restore};
pub use rewrite::{RewriteOptions, RewriteReport, rewrite};
