//! Health check for the zshrc

use std::fs;
use std::path::Path;

use crate::insert::is_anchor_line;

/// Whether the content still sources the oh-my-zsh main script.
pub fn has_anchor(content: &str) -> bool {
    content.lines().any(is_anchor_line)
}

/// Pure predicate for the restore feature: the file is considered broken
/// or missing when it does not exist, is empty, or never sources the
/// framework. No side effects.
pub fn is_broken_or_missing(path: &Path) -> bool {
    match fs::read_to_string(path) {
        Ok(content) => content.is_empty() || !has_anchor(&content),
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_broken() {
        let temp = TempDir::new().unwrap();
        assert!(is_broken_or_missing(&temp.path().join(".zshrc")));
    }

    #[test]
    fn empty_file_is_broken() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".zshrc");
        fs::write(&path, "").unwrap();
        assert!(is_broken_or_missing(&path));
    }

    #[test]
    fn file_without_anchor_is_broken() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".zshrc");
        fs::write(&path, "alias ll='ls -l'\nexport EDITOR=vim\n").unwrap();
        assert!(is_broken_or_missing(&path));
    }

    #[test]
    fn file_with_anchor_is_healthy() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".zshrc");
        fs::write(&path, "source $ZSH/oh-my-zsh.sh\n").unwrap();
        assert!(!is_broken_or_missing(&path));
    }
}
