// SPDX-License-Identifier: MIT
//! Run configuration.
//!
//! Precedence: built-in defaults, then an optional `copigen.toml` in the
//! working directory, then CLI flags.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const DEFAULT_FRAGMENTS_DIR: &str = "fragments";
pub const DEFAULT_OUTPUT_FILE: &str = "copilot-instructions.md";
const CONFIG_FILE: &str = "copigen.toml";

/// Optional `copigen.toml` contents.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    fragments_dir: Option<PathBuf>,
    output: Option<PathBuf>,
}

/// Effective configuration for one run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Root of the fragment store; `core/` and `components/` live beneath it.
    pub fragments_dir: PathBuf,
    /// Target path of the assembled document.
    pub output: PathBuf,
    /// Overwrite an existing output file.
    pub overwrite: bool,
}

impl GeneratorConfig {
    /// Resolve the effective configuration from CLI flags (highest
    /// precedence), `copigen.toml` if present, and defaults.
    pub fn resolve(
        fragments_dir: Option<PathBuf>,
        output: Option<PathBuf>,
        overwrite: bool,
    ) -> Self {
        let file = load_file_config(Path::new(CONFIG_FILE));
        Self {
            fragments_dir: fragments_dir
                .or(file.fragments_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FRAGMENTS_DIR)),
            output: output
                .or(file.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
            overwrite,
        }
    }

    pub fn core_dir(&self) -> PathBuf {
        self.fragments_dir.join("core")
    }

    pub fn components_dir(&self) -> PathBuf {
        self.fragments_dir.join("components")
    }
}

/// Read `copigen.toml` if it exists. A malformed file is reported and
/// ignored rather than aborting the run.
fn load_file_config(path: &Path) -> FileConfig {
    if !path.exists() {
        return FileConfig::default();
    }
    match std::fs::read_to_string(path) {
        Ok(raw) => match toml::from_str(&raw) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("ignoring malformed {}: {e}", path.display());
                FileConfig::default()
            }
        },
        Err(e) => {
            warn!("could not read {}: {e}", path.display());
            FileConfig::default()
        }
    }
}
