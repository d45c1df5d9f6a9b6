// SPDX-License-Identifier: MIT
//! Fragment store — loads markdown fragments from a directory.
//!
//! A fragment's key is its filename minus the `.md` extension. Its title is
//! the first heading line of the body, falling back to the key when the file
//! has no heading. Discovery order is lexicographic by filename so every run
//! enumerates the store identically.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Max length of the one-line description shown in the prompt and `list`
/// output.
const DESCRIPTION_MAX_CHARS: usize = 80;

/// Whether a fragment is always included or user-selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// Always included, independent of selection.
    Core,
    /// Optional — included only when selected.
    Component,
}

/// One unit of pre-authored markdown, keyed by filename.
#[derive(Debug, Clone)]
pub struct Fragment {
    pub key: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub kind: FragmentKind,
}

/// Read all `.md` fragments under `dir`, sorted lexicographically by
/// filename.
///
/// Fails with [`Error::FragmentLoad`] when `dir` is missing or a file cannot
/// be decoded as UTF-8. Read-only — source files are never touched.
pub fn load_fragments(dir: &Path, kind: FragmentKind) -> Result<Vec<Fragment>> {
    let entries = fs::read_dir(dir).map_err(|source| Error::FragmentLoad {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<_> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().and_then(|e| e.to_str()) == Some("md"))
        .collect();
    paths.sort();

    let mut fragments = Vec::with_capacity(paths.len());
    for path in paths {
        let body = fs::read_to_string(&path).map_err(|source| Error::FragmentLoad {
            path: path.clone(),
            source,
        })?;
        let key = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        let fragment = Fragment {
            title: first_heading(&body).unwrap_or_else(|| key.clone()),
            description: first_paragraph_line(&body),
            key,
            body,
            kind,
        };
        debug!(key = %fragment.key, ?kind, "loaded fragment");
        fragments.push(fragment);
    }

    Ok(fragments)
}

/// First heading line of the body, stripped of `#` markers.
fn first_heading(body: &str) -> Option<String> {
    body.lines()
        .map(str::trim)
        .find(|l| l.starts_with('#'))
        .map(|l| l.trim_start_matches('#').trim().to_string())
        .filter(|t| !t.is_empty())
}

/// First non-empty, non-heading line — the one-line summary.
fn first_paragraph_line(body: &str) -> String {
    let line = body
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty() && !l.starts_with('#'))
        .unwrap_or("");
    line.chars().take(DESCRIPTION_MAX_CHARS).collect()
}
