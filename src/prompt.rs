// SPDX-License-Identifier: MIT
//! Terminal prompt — collects the user's component selection.
//!
//! Interaction mechanics live entirely here; the rest of the pipeline only
//! ever sees the resulting key set. Unparseable input re-prompts instead of
//! failing the run.

use crate::registry::ComponentRegistry;
use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};

/// Welcome banner, printed before the component list unless `--quiet`.
pub fn print_header() {
    println!();
    println!("{:=^60}", " copigen — Copilot instructions generator ");
    println!();
    println!("Generate a personalized copilot-instructions.md for your project.");
}

/// Interactively select components from the registry.
///
/// Accepts comma-separated numbers or keys, `all`, or `none` — the
/// select-nothing path. An empty line and EOF also select nothing.
pub fn select_components(registry: &ComponentRegistry) -> io::Result<BTreeSet<String>> {
    if registry.is_empty() {
        println!("No component fragments found. Only core instructions will be included.");
        return Ok(BTreeSet::new());
    }

    println!();
    println!("Available components:");
    for (i, entry) in registry.entries().iter().enumerate() {
        if entry.description.is_empty() {
            println!("{:3}. {}", i + 1, entry.key);
        } else {
            println!("{:3}. {} — {}", i + 1, entry.key, entry.description);
        }
    }
    println!();
    println!("Select components to include (comma-separated numbers or keys, 'all', or 'none'):");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    read_selection(registry, &mut input)
}

fn read_selection<R: BufRead>(
    registry: &ComponentRegistry,
    input: &mut R,
) -> io::Result<BTreeSet<String>> {
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF — treat as selecting nothing.
            return Ok(BTreeSet::new());
        }
        match parse_selection(registry, line.trim()) {
            Some(keys) => return Ok(keys),
            None => println!("Invalid selection. Enter numbers or keys separated by commas."),
        }
    }
}

/// Parse one input line into a key set. `None` means unparseable.
fn parse_selection(registry: &ComponentRegistry, line: &str) -> Option<BTreeSet<String>> {
    if line.is_empty() || line.eq_ignore_ascii_case("none") {
        return Some(BTreeSet::new());
    }
    if line.eq_ignore_ascii_case("all") {
        return Some(registry.entries().iter().map(|e| e.key.clone()).collect());
    }

    let mut keys = BTreeSet::new();
    for token in line.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if let Ok(index) = token.parse::<usize>() {
            let entry = registry.entries().get(index.checked_sub(1)?)?;
            keys.insert(entry.key.clone());
        } else if registry.contains(token) {
            keys.insert(token.to_string());
        } else {
            return None;
        }
    }
    Some(keys)
}
