//! Cleanup of pre-marker configuration fragments
//!
//! Older releases wrote unmarked fragments into the zshrc, each introduced
//! by a fixed header comment. They are superseded by the managed block and
//! deleted on every run. Deletion requires a complete header-to-end pair;
//! a header whose end line never appears is left untouched, since leaving
//! a stray comment is safer than over-deleting user content.

/// An unmarked fragment shape emitted by an older release.
#[derive(Debug, Clone, Copy)]
pub struct LegacyFragment {
    /// Exact header comment (matched against the trimmed line).
    pub header: &'static str,
    /// Prefix of the fragment's final line.
    pub end_prefix: &'static str,
}

/// Every fragment shape any previous release has written.
pub const LEGACY_FRAGMENTS: [LegacyFragment; 3] = [
    LegacyFragment {
        header: "# dotzsh: oh-my-zsh plugins",
        end_prefix: "plugins=(",
    },
    LegacyFragment {
        header: "# dotzsh: add ~/.local/bin to PATH",
        end_prefix: "export PATH=",
    },
    LegacyFragment {
        header: "# dotzsh: thefuck alias",
        end_prefix: "eval \"$(thefuck",
    },
];

/// Delete each fully-matched legacy fragment, header through end line
/// inclusive. Returns the surviving lines and the headers that were
/// removed, once per deleted occurrence. Idempotent: a second pass finds
/// no headers.
pub fn cleanup_legacy(lines: Vec<String>) -> (Vec<String>, Vec<&'static str>) {
    let mut lines = lines;
    let mut removed = Vec::new();

    for fragment in LEGACY_FRAGMENTS {
        // An old release may have appended the same fragment more than
        // once; every complete pair goes in a single run.
        while let Some(start) = lines.iter().position(|l| l.trim() == fragment.header) {
            let Some(end) = lines[start + 1..]
                .iter()
                .position(|l| l.trim_start().starts_with(fragment.end_prefix))
                .map(|offset| start + 1 + offset)
            else {
                tracing::debug!(header = fragment.header, "legacy header without end line, leaving in place");
                break;
            };

            lines.drain(start..=end);
            removed.push(fragment.header);
        }
    }

    (lines, removed)
}
