// SPDX-License-Identifier: MIT
//! copigen — builds `copilot-instructions.md` from markdown fragments.
//!
//! Pipeline: fragment store → component registry → selection resolver →
//! document assembler → output writer. Single-threaded, one pass per
//! invocation, idempotent for identical inputs and selection.

pub mod assemble;
pub mod config;
pub mod error;
pub mod prompt;
pub mod registry;
pub mod select;
pub mod store;
pub mod writer;

pub use error::{Error, Result};

use std::collections::BTreeSet;

/// Run the full pipeline for an already-decided selection.
///
/// Loads core and component fragments from the configured store, resolves
/// `selection` against the registry, assembles the document, and writes it
/// to `config.output`.
pub fn generate(config: &config::GeneratorConfig, selection: &BTreeSet<String>) -> Result<()> {
    let core = store::load_fragments(&config.core_dir(), store::FragmentKind::Core)?;
    let components =
        store::load_fragments(&config.components_dir(), store::FragmentKind::Component)?;
    let registry = registry::ComponentRegistry::new(components);
    let selected = select::resolve(&registry, selection)?;
    let text = assemble::assemble(&core, &selected);
    writer::write_document(&config.output, &text, config.overwrite)
}
