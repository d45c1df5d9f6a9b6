// SPDX-License-Identifier: MIT
//! Selection resolver — validates the user's chosen keys against the
//! registry and fixes their order.

use crate::error::{Error, Result};
use crate::registry::ComponentRegistry;
use crate::store::Fragment;
use std::collections::BTreeSet;

/// Resolve a requested key set into fragments, in registry order.
///
/// Every unknown key is collected before failing so the user gets complete
/// feedback in one pass. The requested set never influences ordering:
/// registry order governs, which makes set-equal selections yield
/// byte-identical documents. An empty set is valid and resolves to nothing.
pub fn resolve<'a>(
    registry: &'a ComponentRegistry,
    requested: &BTreeSet<String>,
) -> Result<Vec<&'a Fragment>> {
    let unknown: Vec<String> = requested
        .iter()
        .filter(|key| !registry.contains(key))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(Error::InvalidSelection { keys: unknown });
    }

    Ok(registry
        .fragments()
        .iter()
        .filter(|f| requested.contains(&f.key))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FragmentKind;

    fn registry(keys: &[&str]) -> ComponentRegistry {
        ComponentRegistry::new(
            keys.iter()
                .map(|key| Fragment {
                    key: key.to_string(),
                    title: key.to_string(),
                    description: String::new(),
                    body: format!("{key} body\n"),
                    kind: FragmentKind::Component,
                })
                .collect(),
        )
    }

    fn set(keys: &[&str]) -> BTreeSet<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn registry_order_wins_over_pick_order() {
        let registry = registry(&["flask", "numpy", "pandas", "pygame"]);
        // Picked as "pandas, numpy" — output must still follow the registry.
        let resolved = resolve(&registry, &set(&["pandas", "numpy"])).unwrap();
        let keys: Vec<&str> = resolved.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, ["numpy", "pandas"]);
    }

    #[test]
    fn empty_selection_resolves_to_nothing() {
        let registry = registry(&["flask"]);
        assert!(resolve(&registry, &BTreeSet::new()).unwrap().is_empty());
    }

    #[test]
    fn all_unknown_keys_are_reported_at_once() {
        let registry = registry(&["flask", "numpy"]);
        let err = resolve(&registry, &set(&["flask", "bogus", "zzz"])).unwrap_err();
        match err {
            Error::InvalidSelection { keys } => {
                assert_eq!(keys, ["bogus", "zzz"], "every unknown key, sorted");
            }
            other => panic!("expected InvalidSelection, got {other:?}"),
        }
    }

    #[test]
    fn set_semantics_collapse_duplicates() {
        let registry = registry(&["flask", "numpy"]);
        // A BTreeSet cannot hold duplicates; inserting twice is a no-op.
        let mut requested = BTreeSet::new();
        requested.insert("numpy".to_string());
        requested.insert("numpy".to_string());
        let resolved = resolve(&registry, &requested).unwrap();
        assert_eq!(resolved.len(), 1);
    }
}
