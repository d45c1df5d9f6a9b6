// SPDX-License-Identifier: MIT
//! Component registry — stable enumeration of the optional fragments.

use crate::error::{Error, Result};
use crate::store::Fragment;
use serde::Serialize;

/// Presentation projection of one component fragment.
#[derive(Debug, Clone, Serialize)]
pub struct RegistryEntry {
    pub key: String,
    pub display_name: String,
    pub description: String,
}

/// Component fragments in discovery order.
///
/// The order is fixed at construction (lexicographic, from the store) and
/// governs both presentation and assembly, so the same selection always
/// produces the same document regardless of how it was picked.
pub struct ComponentRegistry {
    fragments: Vec<Fragment>,
    entries: Vec<RegistryEntry>,
}

impl ComponentRegistry {
    pub fn new(fragments: Vec<Fragment>) -> Self {
        let entries = fragments
            .iter()
            .map(|f| RegistryEntry {
                key: f.key.clone(),
                display_name: f.title.clone(),
                description: f.description.clone(),
            })
            .collect();
        Self { fragments, entries }
    }

    /// Registry entries in stable discovery order.
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// All component fragments in registry order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fragments.iter().any(|f| f.key == key)
    }

    /// Look up a component fragment by key.
    pub fn get(&self, key: &str) -> Result<&Fragment> {
        self.fragments
            .iter()
            .find(|f| f.key == key)
            .ok_or_else(|| Error::UnknownComponent {
                key: key.to_string(),
            })
    }
}
