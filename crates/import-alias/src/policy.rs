use std::path::Path;
use std::sync::{Arc, OnceLock};

use serde::Deserialize;

use crate::guess::FALLBACK_ALIAS;
use crate::reserved::{DEFAULT_COMMON_NAMES, ReservedWords};

/// Character appended to a base alias until it no longer collides.
pub const DEFAULT_FILLER: char = 'x';

#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid policy document: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid filler {0:?}: expected an ASCII lower-case letter")]
    InvalidFiller(char),
    #[error("Invalid fallback alias {0:?}")]
    InvalidFallback(String),
}

/// The fixed data the allocator works against: which identifiers are off
/// limits, which character lengthens a colliding alias, and what to call a
/// path that yields no identifier characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasPolicy {
    reserved: ReservedWords,
    filler: char,
    fallback: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PolicyDocument {
    common_names: Option<Vec<String>>,
    reserved: Vec<String>,
    filler: Option<char>,
    fallback: Option<String>,
}

impl AliasPolicy {
    pub fn new(
        reserved: ReservedWords,
        filler: char,
        fallback: impl Into<String>,
    ) -> Result<Self, PolicyError> {
        if !filler.is_ascii_lowercase() {
            return Err(PolicyError::InvalidFiller(filler));
        }
        let fallback = fallback.into();
        if !is_plain_identifier(&fallback) || reserved.contains(&fallback) {
            return Err(PolicyError::InvalidFallback(fallback));
        }
        Ok(Self {
            reserved,
            filler,
            fallback,
        })
    }

    /// Parses a policy document such as:
    ///
    /// ```toml
    /// common_names = ["err", "ctx"]
    /// reserved = ["log"]
    /// filler = "z"
    /// fallback = "lib"
    /// ```
    ///
    /// `common_names` replaces the default deny-list; `reserved` adds to the
    /// language's reserved words. Every key is optional.
    pub fn from_toml_str(text: &str) -> Result<Self, PolicyError> {
        let doc: PolicyDocument = toml::from_str(text)?;
        let common_names = doc
            .common_names
            .unwrap_or_else(|| DEFAULT_COMMON_NAMES.iter().map(|s| s.to_string()).collect());
        let mut reserved = ReservedWords::language().with_common_names(common_names);
        reserved.extend(doc.reserved);
        Self::new(
            reserved,
            doc.filler.unwrap_or(DEFAULT_FILLER),
            doc.fallback.unwrap_or_else(|| FALLBACK_ALIAS.to_string()),
        )
    }

    pub fn from_path(path: &Path) -> Result<Self, PolicyError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn reserved(&self) -> &ReservedWords {
        &self.reserved
    }

    pub fn filler(&self) -> char {
        self.filler
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl Default for AliasPolicy {
    fn default() -> Self {
        Self {
            reserved: ReservedWords::go(),
            filler: DEFAULT_FILLER,
            fallback: FALLBACK_ALIAS.to_string(),
        }
    }
}

/// Process-wide default policy, shared by every registry built without one.
pub(crate) fn default_policy() -> Arc<AliasPolicy> {
    static DEFAULT: OnceLock<Arc<AliasPolicy>> = OnceLock::new();
    DEFAULT
        .get_or_init(|| Arc::new(AliasPolicy::default()))
        .clone()
}

/// Same shape the guesser produces: ASCII lower-case alphanumerics, not
/// starting with a digit.
fn is_plain_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some(first) if first.is_ascii_lowercase())
        && chars.all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_the_default_policy() {
        let policy = AliasPolicy::from_toml_str("").unwrap();
        assert_eq!(policy, AliasPolicy::default());
    }

    #[test]
    fn common_names_replace_the_default_deny_list() {
        let policy = AliasPolicy::from_toml_str(r#"common_names = ["ctx"]"#).unwrap();
        assert!(policy.reserved().contains("ctx"));
        assert!(!policy.reserved().contains("err"));
        assert!(policy.reserved().contains("func"));
    }

    #[test]
    fn reserved_adds_to_the_default_set() {
        let policy = AliasPolicy::from_toml_str(
            r#"
            reserved = ["log", "json"]
            filler = "z"
            fallback = "lib"
            "#,
        )
        .unwrap();
        assert!(policy.reserved().contains("log"));
        assert!(policy.reserved().contains("json"));
        assert!(policy.reserved().contains("err"));
        assert_eq!(policy.filler(), 'z');
        assert_eq!(policy.fallback(), "lib");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = AliasPolicy::from_toml_str("suffix = \"x\"").unwrap_err();
        assert!(matches!(err, PolicyError::Toml(_)), "{err:?}");
    }

    #[test]
    fn filler_must_be_lowercase_ascii() {
        let err = AliasPolicy::from_toml_str("filler = \"_\"").unwrap_err();
        assert!(matches!(err, PolicyError::InvalidFiller('_')), "{err:?}");
        let err = AliasPolicy::from_toml_str("filler = \"X\"").unwrap_err();
        assert!(matches!(err, PolicyError::InvalidFiller('X')), "{err:?}");
    }

    #[test]
    fn fallback_must_be_a_usable_alias() {
        for fallback in ["", "9lib", "my-lib", "Lib", "int"] {
            let text = format!("fallback = {fallback:?}");
            let err = AliasPolicy::from_toml_str(&text).unwrap_err();
            assert!(
                matches!(&err, PolicyError::InvalidFallback(f) if f == fallback),
                "{fallback:?}: {err:?}"
            );
        }
    }

    #[test]
    fn missing_file_reports_io_error() {
        let err = AliasPolicy::from_path(Path::new("/nonexistent/alias-policy.toml")).unwrap_err();
        assert!(matches!(err, PolicyError::Io(_)), "{err:?}");
        assert!(err.to_string().starts_with("IO error: "));
    }
}
