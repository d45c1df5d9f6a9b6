// SPDX-License-Identifier: MIT
//! Output writer — atomic persistence of the assembled document.
//! Written atomically: tmp file → rename to prevent partial reads.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Write `text` to `path`, refusing to clobber unless `overwrite` is set.
///
/// The refusal check happens before anything touches the filesystem, so an
/// existing file is left byte-for-byte intact. The write itself goes to a
/// sibling `.tmp` file and is renamed into place — a crash mid-write never
/// leaves a truncated document.
pub fn write_document(path: &Path, text: &str, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        return Err(Error::OutputExists {
            path: path.to_path_buf(),
        });
    }

    // Atomic write: write to tmp, then rename.
    let tmp_path = path.with_extension("md.tmp");
    fs::write(&tmp_path, text).map_err(|source| Error::OutputWrite {
        path: tmp_path.clone(),
        source,
    })?;
    fs::rename(&tmp_path, path).map_err(|source| {
        let _ = fs::remove_file(&tmp_path);
        Error::OutputWrite {
            path: path.to_path_buf(),
            source,
        }
    })?;

    debug!(path = %path.display(), bytes = text.len(), "wrote document");
    Ok(())
}
