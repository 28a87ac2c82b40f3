//! Data model for the completion file — mirrors the `.sublime-completions` shape.

use serde::{Deserialize, Serialize};

/// Scope selector the completions apply to. Starbound's modding API is Lua.
pub const SOURCE_SCOPE: &str = "source.lua";

/// One autocomplete entry: typing `trigger` offers to insert `contents`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// Function name. Never empty — extraction skips nameless matches.
    pub trigger: String,
    /// Snippet text with `${n:...}` placeholders. Omitted from output when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,
}

impl Completion {
    /// Append a tab-separated annotation to the trigger. Sublime shows the
    /// text after the tab as a dimmed hint in the completion list.
    #[allow(dead_code)]
    pub fn add_hint(&mut self, hint: &str) {
        self.trigger.push('\t');
        self.trigger.push_str(hint);
    }
}

/// Top-level document written to the output path.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompletionFile {
    pub source: String,
    pub completions: Vec<Completion>,
}

impl CompletionFile {
    pub fn new(completions: Vec<Completion>) -> Self {
        Self {
            source: SOURCE_SCOPE.to_string(),
            completions,
        }
    }
}
