//! Managed block markers and span operations
//!
//! The rewriter owns exactly one delimited region of the zshrc. The region
//! is identified by a fixed pair of marker comments and is regenerated in
//! full on every run; nothing inside it is ever merged or preserved.

use std::ops::Range;

/// First line of the managed block.
pub const BLOCK_START: &str = "# >>> dotzsh managed block >>>";

/// Last line of the managed block.
pub const BLOCK_END: &str = "# <<< dotzsh managed block <<<";

/// Find the line span of the managed block, markers inclusive.
///
/// Only the first start marker counts. Returns `None` when no start marker
/// is present, or when a start marker has no matching end marker after it
/// (a torn block is left alone rather than guessed at).
pub fn find_block(lines: &[String]) -> Option<Range<usize>> {
    let start = lines.iter().position(|l| l.trim_end() == BLOCK_START)?;
    let end = lines[start..]
        .iter()
        .position(|l| l.trim_end() == BLOCK_END)
        .map(|offset| start + offset)?;
    Some(start..end + 1)
}

/// Remove the managed block, if present.
///
/// The single blank separator line emitted directly above the block on
/// insertion belongs to the block and is removed with it; this is what
/// keeps repeated rewrites from accumulating blank lines.
pub fn remove_block(mut lines: Vec<String>) -> (Vec<String>, bool) {
    let Some(span) = find_block(&lines) else {
        return (lines, false);
    };

    let mut start = span.start;
    if start > 0 && lines[start - 1].trim().is_empty() {
        start -= 1;
    }

    lines.drain(start..span.end);
    (lines, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(String::from).collect()
    }

    #[test]
    fn find_block_absent() {
        assert_eq!(find_block(&lines("export EDITOR=vim")), None);
    }

    #[test]
    fn find_block_spans_markers_inclusive() {
        let content = lines(&format!(
            "before\n{BLOCK_START}\npayload\n{BLOCK_END}\nafter"
        ));
        assert_eq!(find_block(&content), Some(1..4));
    }

    #[test]
    fn find_block_ignores_torn_block() {
        let content = lines(&format!("{BLOCK_START}\npayload with no end marker"));
        assert_eq!(find_block(&content), None);
    }

    #[test]
    fn find_block_only_first_start_marker_counts() {
        let content = lines(&format!(
            "{BLOCK_START}\na\n{BLOCK_END}\n{BLOCK_START}\nb\n{BLOCK_END}"
        ));
        assert_eq!(find_block(&content), Some(0..3));
    }

    #[test]
    fn remove_block_deletes_markers_and_payload() {
        let content = lines(&format!("keep\n{BLOCK_START}\npayload\n{BLOCK_END}"));
        let (result, removed) = remove_block(content);
        assert!(removed);
        assert_eq!(result, lines("keep"));
    }

    #[test]
    fn remove_block_consumes_owned_separator() {
        let content = lines(&format!("keep\n\n{BLOCK_START}\npayload\n{BLOCK_END}"));
        let (result, removed) = remove_block(content);
        assert!(removed);
        assert_eq!(result, lines("keep"));
    }

    #[test]
    fn remove_block_noop_when_absent() {
        let content = lines("just user content");
        let (result, removed) = remove_block(content.clone());
        assert!(!removed);
        assert_eq!(result, content);
    }
}
