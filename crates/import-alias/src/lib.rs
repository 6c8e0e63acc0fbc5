#![deny(clippy::unwrap_used)]
//! Import alias allocation for generated Go source.
//!
//! An emitter asks an [`ImportRegistry`] for the alias of every import path
//! it references while building one file. The registry hands out short,
//! path-derived names that are distinct within the file and never shadow Go
//! keywords, predeclared identifiers or common local names:
//!
//! ```
//! use import_alias::ImportRegistry;
//!
//! let mut imports = ImportRegistry::new();
//! assert_eq!(imports.register("k8s.io/api/core/v1"), "v1");
//! assert_eq!(imports.register("k8s.io/api/apps/v1"), "appsv1");
//! assert_eq!(imports.register("k8s.io/api/core/v1"), "v1");
//! ```

mod guess;
mod policy;
mod registry;
mod reserved;
mod validate;

pub use guess::{Candidates, FALLBACK_ALIAS, ImportPath, guess_alias, sanitize_segment};
pub use policy::{AliasPolicy, DEFAULT_FILLER, PolicyError};
pub use registry::{Escalation, Import, ImportRegistry, Step};
pub use reserved::{DEFAULT_COMMON_NAMES, GO_KEYWORDS, GO_PREDECLARED, ReservedWords};
pub use validate::{Rejection, check_alias, is_valid_alias};
