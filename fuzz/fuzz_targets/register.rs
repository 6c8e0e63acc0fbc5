//! Fuzz target: alias registration.
//!
//! Invariants checked:
//! - Registration never panics or hangs, whatever the path bytes.
//! - Aliases stay pairwise distinct and never hit a reserved word.
//! - Registering a path again returns the alias it got the first time.

use import_alias::{ImportRegistry, ReservedWords};
use rustc_hash::FxHashSet;

#[test]
fn register() {
    let reserved = ReservedWords::go();
    bolero::check!().for_each(|data: &[u8]| {
        // Cap input size to keep the suffix extension short.
        if data.len() > 16 * 1024 {
            return;
        }
        let src = String::from_utf8_lossy(data);
        let mut registry = ImportRegistry::new();
        let mut aliases = Vec::new();
        for path in src.lines() {
            aliases.push((path, registry.register(path).to_string()));
        }

        let distinct: FxHashSet<&str> = registry.imports().map(|import| import.alias).collect();
        assert_eq!(distinct.len(), registry.len());
        for (path, alias) in &aliases {
            assert!(!reserved.contains(alias), "{path:?} got reserved alias {alias:?}");
            assert_eq!(registry.alias_of(path), Some(alias.as_str()));
        }
    });
}
