//! sbdoc — generate Sublime Text completions from Starbound's Lua API docs.
//!
//! Scans Markdown documentation for signature headings like
//! ``#### `Json` root.assetJson(`String` assetPath)`` and writes a
//! `.sublime-completions` JSON file mapping each function name to a snippet
//! with numbered argument placeholders:
//!
//!     sbdoc doc/lua/*.md starbound.sublime-completions

mod extract;
mod model;
mod render;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(
    name = "sbdoc",
    about = "Generate Sublime Text completions from Starbound Lua documentation"
)]
struct Cli {
    /// Input documentation files followed by the output file.
    /// The last path is always the output; inputs may be glob patterns.
    paths: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    println!("Starbound Documentation Parsing");

    let [inputs @ .., output] = &cli.paths[..] else {
        usage_error();
    };
    if inputs.is_empty() {
        usage_error();
    }

    if let Err(err) = run(inputs, Path::new(output)) {
        eprintln!("Exception Details: {err:#}");
        eprintln!("Stack Trace:\n{}", err.backtrace());
        process::exit(255);
    }
}

fn usage_error() -> ! {
    eprintln!("Invalid number of arguments.");
    eprintln!("Usage: sbdoc <input file> [<input file> ...] <output file>");
    process::exit(1);
}

fn run(inputs: &[String], output: &Path) -> Result<()> {
    let input_files = resolve_inputs(inputs)?;

    println!("Loading all files...");
    let texts: Vec<String> = input_files
        .par_iter()
        .map(|path| load_file(path))
        .collect::<Result<_>>()?;
    println!("\tComplete!");

    println!("Parsing file data...");
    println!("{:<30} {}", "Name", "Parameters");

    // Each worker returns its own list; concatenating at the join keeps the
    // output in input-file order, then match order within each file.
    let per_file: Vec<Vec<model::Completion>> =
        texts.par_iter().map(|text| extract::completions(text)).collect();
    let completions: Vec<model::Completion> = per_file.into_iter().flatten().collect();

    println!(
        "Found {} total element(s) in {} file(s).",
        completions.len(),
        input_files.len()
    );
    println!("Writing output to {}...", output.display());

    let document = render::to_json(&model::CompletionFile::new(completions))?;
    fs::write(output, document)
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok(())
}

/// Resolve input arguments to file paths, keeping argument order. An argument
/// that does not name an existing file is tried as a glob pattern; matches
/// within one pattern are sorted. Nothing matched is a fatal error.
fn resolve_inputs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in inputs {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        let mut matches: Vec<PathBuf> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|entry| entry.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            bail!("no such input file: {}", pattern);
        }
        matches.sort();
        files.append(&mut matches);
    }
    Ok(files)
}

fn load_file(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    println!("Loaded file {}", path.display());
    Ok(text)
}
