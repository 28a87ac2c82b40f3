//! Completion file serializer.
//!
//! `.sublime-completions` files are conventionally written with an indented
//! outer object and one compact completion entry per line, which keeps diffs
//! of regenerated files one-line-per-function. serde_json's pretty printer
//! cannot produce that layout, so the outer document is assembled by hand and
//! only the individual records go through the serializer.

use crate::model::CompletionFile;
use anyhow::Result;

/// Render the full completion document:
///
/// ```text
/// {
///   "source": "source.lua",
///   "completions": [
///     {"trigger":"root.assetJson","contents":"root.assetJson(${1:${2:assetPath}})"},
///     ...
///   ]
/// }
/// ```
pub fn to_json(file: &CompletionFile) -> Result<String> {
    let mut out = String::new();
    out.push_str("{\n");
    out.push_str(&format!(
        "  \"source\": {},\n",
        serde_json::to_string(&file.source)?
    ));
    out.push_str("  \"completions\": [\n");
    for (i, completion) in file.completions.iter().enumerate() {
        out.push_str("    ");
        out.push_str(&serde_json::to_string(completion)?);
        if i + 1 < file.completions.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str("  ]\n");
    out.push_str("}\n");
    Ok(out)
}
