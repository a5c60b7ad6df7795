//! Managed block rendering
//!
//! The rendered text is a pure function of its inputs: identical inputs
//! produce byte-identical output. All runtime conditionality lives inside
//! the rendered shell text itself (PATH guards, `command -v` checks), not
//! in the rewriter, so the output file is valid even before the guarded
//! tools are installed.

use crate::block::{BLOCK_END, BLOCK_START};

/// Inputs the managed block is generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockInputs {
    /// oh-my-zsh plugin names, rendered as a single `plugins=(...)` line.
    pub plugins: Vec<String>,
    /// Directories to prepend to PATH, each guarded against duplication
    /// when the zshrc is sourced repeatedly.
    pub path_entries: Vec<String>,
    /// Emit the completion-system bootstrap.
    pub completion_hook: bool,
    /// Tool whose alias hook is emitted behind a `command -v` guard.
    pub alias_tool: Option<String>,
}

impl Default for BlockInputs {
    fn default() -> Self {
        Self {
            plugins: vec![
                "git".to_string(),
                "zsh-autosuggestions".to_string(),
                "zsh-syntax-highlighting".to_string(),
                "zsh-completions".to_string(),
            ],
            path_entries: vec!["$HOME/.local/bin".to_string()],
            completion_hook: true,
            alias_tool: Some("thefuck".to_string()),
        }
    }
}

/// Render the managed block, markers included, ending with a newline.
pub fn render_block(inputs: &BlockInputs) -> String {
    let mut out = String::new();
    out.push_str(BLOCK_START);
    out.push('\n');
    out.push_str("# Generated by dotzsh; rewritten on every run. Do not edit inside this block.\n");

    out.push_str(&format!("plugins=({})\n", inputs.plugins.join(" ")));

    for entry in &inputs.path_entries {
        // Runtime guard: sourcing the file twice must not duplicate PATH.
        out.push_str(&format!(
            "if [[ \":$PATH:\" != *\":{entry}:\"* ]]; then\n  export PATH=\"{entry}:$PATH\"\nfi\n"
        ));
    }

    if inputs.completion_hook {
        out.push_str("autoload -Uz compinit\ncompinit -u\n");
    }

    if let Some(tool) = &inputs.alias_tool {
        out.push_str(&format!(
            "if command -v {tool} >/dev/null 2>&1; then\n  eval \"$({tool} --alias)\"\nfi\n"
        ));
    }

    out.push_str(BLOCK_END);
    out.push('\n');
    out
}
