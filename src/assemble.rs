// SPDX-License-Identifier: MIT
//! Document assembler — concatenates core and selected fragments into the
//! final markdown text.
//!
//! Heading level and separators are fixed constants. Output is
//! byte-deterministic for the same input sequences: no timestamps, no
//! random ordering.

use crate::store::Fragment;

/// Top-level title of every generated document.
pub const DOCUMENT_TITLE: &str = "# Copilot Instructions";

/// Fixed heading level for fragment sections.
const SECTION_HEADING: &str = "##";

/// Build the document: title line, core sections in store order, then the
/// resolved component sections in registry order, one blank line between
/// sections.
///
/// Bodies are trusted pre-authored markdown and pass through unchanged,
/// except that a fragment's own leading heading line is dropped — the
/// section heading is rebuilt from its title, and repeating it would
/// duplicate the text.
pub fn assemble(core: &[Fragment], selected: &[&Fragment]) -> String {
    let mut out = String::new();
    out.push_str(DOCUMENT_TITLE);
    out.push('\n');

    for fragment in core {
        push_section(&mut out, fragment);
    }
    for fragment in selected {
        push_section(&mut out, fragment);
    }

    out
}

fn push_section(out: &mut String, fragment: &Fragment) {
    out.push('\n');
    out.push_str(SECTION_HEADING);
    out.push(' ');
    out.push_str(&fragment.title);
    out.push('\n');

    let body = body_without_leading_heading(&fragment.body);
    if !body.is_empty() {
        out.push('\n');
        out.push_str(body);
        out.push('\n');
    }
}

/// Strip the leading heading line (the one the title was derived from) and
/// surrounding blank lines. The rest of the body is untouched.
fn body_without_leading_heading(body: &str) -> &str {
    let trimmed = body.trim_start();
    if trimmed.starts_with('#') {
        match trimmed.find('\n') {
            Some(idx) => trimmed[idx + 1..].trim_start_matches('\n').trim_end(),
            None => "",
        }
    } else {
        body.trim()
    }
}
