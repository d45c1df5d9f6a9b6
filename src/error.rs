// SPDX-License-Identifier: MIT
//! Error taxonomy for the generation pipeline.
//!
//! Every failure is raised eagerly and terminates the run: the binary prints
//! one actionable message naming the offending key or path and exits
//! non-zero. No retries — nothing here is transient.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The fragment store is missing, or a fragment file could not be read
    /// as UTF-8 text.
    #[error("failed to load fragments from {path}: {source}")]
    FragmentLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Registry lookup miss.
    #[error("unknown component: {key}")]
    UnknownComponent { key: String },

    /// The selection referenced keys that are not in the registry. Every
    /// offending key is reported at once, not just the first.
    #[error("selection contains unknown components: {}", keys.join(", "))]
    InvalidSelection { keys: Vec<String> },

    /// Refusal to clobber an existing output file.
    #[error("output file already exists: {path} (pass --force to overwrite)")]
    OutputExists { path: PathBuf },

    /// I/O failure while persisting the assembled document.
    #[error("failed to write output to {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
