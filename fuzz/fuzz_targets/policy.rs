//! Fuzz target: policy documents.
//!
//! Invariants checked:
//! - Parsing never panics; bad input is reported as `PolicyError`.
//! - An accepted policy still yields usable aliases for a digit-only path.

use std::sync::Arc;

use import_alias::{AliasPolicy, ImportRegistry};

#[test]
fn policy() {
    bolero::check!().for_each(|data: &[u8]| {
        if data.len() > 4 * 1024 {
            return;
        }
        let src = String::from_utf8_lossy(data);
        let Ok(policy) = AliasPolicy::from_toml_str(&src) else {
            return;
        };
        let policy = Arc::new(policy);
        let mut registry = ImportRegistry::with_policy(policy.clone());
        assert_eq!(registry.register("0"), policy.fallback());
        let next = registry.register("1").to_string();
        let suffix = next
            .strip_prefix(policy.fallback())
            .unwrap_or_else(|| panic!("{next:?} does not extend the fallback"));
        assert!(!suffix.is_empty());
        assert!(suffix.chars().all(|ch| ch == policy.filler()));
    });
}
