//! Anchor detection and block insertion

use std::sync::LazyLock;

use regex::Regex;

/// Pattern matching the line that sources the oh-my-zsh main script.
///
/// Both the `source` and `.` spellings are accepted.
pub static ANCHOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:source|\.)\s+\S*oh-my-zsh\.sh").unwrap());

/// Whether a line is the anchor the managed block is placed after.
pub fn is_anchor_line(line: &str) -> bool {
    ANCHOR_PATTERN.is_match(line)
}

/// Insert the rendered block into the line sequence.
///
/// The block lands immediately after the first anchor line, preceded by one
/// blank separator line. Without an anchor it is appended at end of file,
/// with the separator only when the file was non-empty. Exactly one block
/// is inserted regardless of how many anchor-like lines exist.
///
/// Returns the new lines and the anchor line index the block followed, if
/// any.
pub fn insert_block(lines: Vec<String>, block: &str) -> (Vec<String>, Option<usize>) {
    let block_lines: Vec<String> = block.lines().map(String::from).collect();
    let anchor = lines.iter().position(|l| is_anchor_line(l));

    let mut result = Vec::with_capacity(lines.len() + block_lines.len() + 1);

    match anchor {
        Some(idx) => {
            tracing::debug!(line = idx + 1, "anchor line found, inserting block after it");
            for (i, line) in lines.into_iter().enumerate() {
                result.push(line);
                if i == idx {
                    result.push(String::new());
                    result.extend(block_lines.iter().cloned());
                }
            }
        }
        None => {
            tracing::debug!("no anchor line, appending block at end of file");
            let was_empty = lines.is_empty();
            result.extend(lines);
            if !was_empty {
                result.push(String::new());
            }
            result.extend(block_lines);
        }
    }

    (result, anchor)
}
