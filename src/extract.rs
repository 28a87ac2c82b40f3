//! Signature extraction — scans Markdown documentation for function headings.
//!
//! Starbound's Lua API docs describe each callable as a level-4 heading with a
//! backtick-quoted return type, the function name, and a typed argument list:
//!
//!     #### `Json` root.assetJson(`String` assetPath)
//!     #### `void` sb.logInfo(`String` format, `LuaValue` args ...)
//!
//! The heading matcher captures the name and the raw argument block; the
//! argument matcher then yields one name per backtick-quoted type token,
//! keeping a trailing ` ...` variadic marker. Malformed lines never fail the
//! run — they simply produce no record.

use crate::model::Completion;
use rayon::prelude::*;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Level-4 heading introducing a signature. The name capture is non-greedy
/// (stops at the first open paren); the argument block is greedy up to the
/// last close paren on the line, and absent for `name()`.
static RE_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^#{4}\s`(?:.+?)`\s(?P<function>.+?)\((?P<args>.+)?\)").unwrap()
});

/// One argument inside the block: a backtick-quoted type token, whitespace,
/// then the argument name, optionally marked variadic with ` ...`.
static RE_ARG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:`.+?`)\s(?P<name>.+?\w+(?:\s\.{3})?)").unwrap());

/// Extract every documented signature in one file's text, in match order.
///
/// Matches are processed in parallel; each worker builds its own record, so
/// the collected order still follows the document top to bottom.
pub fn completions(text: &str) -> Vec<Completion> {
    let headings: Vec<Captures> = RE_HEADING.captures_iter(text).collect();
    headings.par_iter().filter_map(completion_for).collect()
}

fn completion_for(caps: &Captures) -> Option<Completion> {
    let name = caps.name("function").map_or("", |m| m.as_str());
    let raw_args = caps.name("args").map_or("", |m| m.as_str());
    build_completion(name, raw_args)
}

/// Build one record and print its row in the name/parameters trace table.
/// An empty name yields no record; the heading pattern cannot produce one,
/// but degenerate input must not panic the run.
fn build_completion(name: &str, raw_args: &str) -> Option<Completion> {
    if name.is_empty() {
        return None;
    }
    let signature = argument_signature(&argument_names(raw_args));

    println!("{:<30} {}", name, signature);

    Some(Completion {
        trigger: name.to_string(),
        contents: Some(format!("{name}({signature})")),
    })
}

/// Argument names in order of appearance. Duplicates are kept — the names
/// map to positional placeholders.
fn argument_names(raw_args: &str) -> Vec<&str> {
    RE_ARG
        .captures_iter(raw_args)
        .filter_map(|caps| caps.name("name"))
        .map(|m| m.as_str())
        .collect()
}

/// Nested snippet template: `${1:${2:a}, ${3:b}}` for `a, b`, empty for no
/// arguments. The outer placeholder selects the whole argument list; the
/// inner ones step through each argument. Numbering restarts per completion.
fn argument_signature(names: &[&str]) -> String {
    if names.is_empty() {
        return String::new();
    }
    let inner = names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("${{{}:{}}}", i + 2, name))
        .collect::<Vec<_>>()
        .join(", ");
    format!("${{1:{inner}}}")
}
