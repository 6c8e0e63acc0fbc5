use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};

use crate::guess::{Candidates, ImportPath, sanitize_segment};
use crate::policy::{AliasPolicy, default_policy};
use crate::validate::{Rejection, check_alias};

/// Per-file import table: assigns every import path a distinct alias.
///
/// A registry lives exactly as long as the emission of one generated file.
/// Entries are append-only, so an alias handed out once stays valid for the
/// rest of the file. Registries share nothing mutable and can be driven from
/// different threads independently.
#[derive(Debug, Clone)]
pub struct ImportRegistry {
    policy: Arc<AliasPolicy>,
    package_path: Option<String>,
    imports: IndexMap<String, String, FxBuildHasher>,
    used: FxHashSet<String>,
    locals: FxHashSet<String>,
    preferred: FxHashMap<String, String>,
}

impl ImportRegistry {
    pub fn new() -> Self {
        Self::with_policy(default_policy())
    }

    pub fn with_policy(policy: Arc<AliasPolicy>) -> Self {
        Self {
            policy,
            package_path: None,
            imports: IndexMap::default(),
            used: FxHashSet::default(),
            locals: FxHashSet::default(),
            preferred: FxHashMap::default(),
        }
    }

    /// Sets the import path of the package the generated file belongs to.
    pub fn in_package(mut self, path: impl Into<String>) -> Self {
        self.package_path = Some(path.into());
        self
    }

    pub fn package_path(&self) -> Option<&str> {
        self.package_path.as_deref()
    }

    pub fn policy(&self) -> &AliasPolicy {
        &self.policy
    }

    /// Returns the alias for `path`, allocating one on first use.
    ///
    /// Repeated calls with the same path return the same alias and leave the
    /// registry untouched.
    pub fn register(&mut self, path: &str) -> &str {
        if let Some(index) = self.imports.get_index_of(path) {
            return &self.imports[index];
        }
        let hint = self.preferred.remove(path);
        let (step, alias) = self.allocate(path, hint.as_deref());
        tracing::debug!(path, alias = %alias, ?step, "import alias assigned");
        self.used.insert(alias.clone());
        let (index, _) = self.imports.insert_full(path.to_string(), alias);
        &self.imports[index]
    }

    /// Qualifier to put in front of identifiers from `path`, or `None` when
    /// `path` is the file's own package.
    pub fn qualifier(&mut self, path: &str) -> Option<&str> {
        if self.package_path.as_deref() == Some(path) {
            return None;
        }
        Some(self.register(path))
    }

    /// Keeps `name` away from every alias allocated afterwards.
    ///
    /// Returns `false` if an import already holds `name` as its alias; the
    /// caller has to choose a different local name in that case.
    pub fn reserve(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.used.contains(&name) {
            return false;
        }
        self.locals.insert(name);
        true
    }

    /// Records `alias` as the first choice for `path`.
    ///
    /// The hint is sanitized like a path segment and still has to pass
    /// validation; when it fails, allocation escalates as usual. Has no
    /// effect once `path` is registered, which is reported as `false`.
    pub fn prefer_alias(&mut self, path: impl Into<String>, alias: impl Into<String>) -> bool {
        let path = path.into();
        if self.imports.contains_key(&path) {
            return false;
        }
        self.preferred.insert(path, alias.into());
        true
    }

    pub fn alias_of(&self, path: &str) -> Option<&str> {
        self.imports.get(path).map(String::as_str)
    }

    pub fn is_valid_alias(&self, candidate: &str) -> bool {
        self.check(candidate).is_ok()
    }

    /// Registered imports in registration order.
    pub fn imports(&self) -> impl ExactSizeIterator<Item = Import<'_>> {
        self.imports.iter().map(|(path, alias)| Import { path, alias })
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    fn check(&self, candidate: &str) -> Result<(), Rejection> {
        check_alias(candidate, &self.used, self.policy.reserved())?;
        if self.locals.contains(candidate) {
            return Err(Rejection::LocalName);
        }
        Ok(())
    }

    fn allocate(&self, path: &str, hint: Option<&str>) -> (Step, String) {
        let import_path = ImportPath::parse(path);
        let preferred = hint.map(sanitize_segment);
        let mut escalation = Escalation::new(&import_path, preferred, &self.policy);
        // Terminates: the extension stage grows without bound and only
        // finitely many names are taken.
        loop {
            let (step, candidate) = escalation.next_candidate();
            match self.check(&candidate) {
                Ok(()) => return (step, candidate),
                Err(rejection) => {
                    tracing::trace!(
                        path,
                        %candidate,
                        ?step,
                        ?rejection,
                        "alias candidate rejected"
                    );
                }
            }
        }
    }
}

impl Default for ImportRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Stage of the escalation that produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Hint recorded through [`ImportRegistry::prefer_alias`].
    Preferred,
    /// Last `n` path segments joined.
    Level(usize),
    /// Whole-path candidate (or the fallback) followed by `n` filler characters.
    Extend(usize),
}

/// Lazy, unbounded candidate sequence for one path: the preferred alias,
/// then levels `1..=depth`, then the base alias lengthened one filler
/// character at a time.
#[derive(Debug)]
pub struct Escalation<'p, 'a> {
    levels: Candidates<'p, 'a>,
    preferred: Option<String>,
    filler: char,
    fallback: &'p str,
    base: String,
    next_step: Step,
}

impl<'p, 'a> Escalation<'p, 'a> {
    pub fn new(
        path: &'p ImportPath<'a>,
        preferred: Option<String>,
        policy: &'p AliasPolicy,
    ) -> Self {
        Self {
            levels: path.candidates(),
            preferred,
            filler: policy.filler(),
            fallback: policy.fallback(),
            base: String::new(),
            next_step: Step::Preferred,
        }
    }

    /// Like [`Iterator::next`], without the `Option`: the sequence never ends.
    pub fn next_candidate(&mut self) -> (Step, String) {
        loop {
            match self.next_step {
                Step::Preferred => {
                    self.next_step = Step::Level(1);
                    if let Some(alias) = self.preferred.take() {
                        return (Step::Preferred, alias);
                    }
                }
                Step::Level(_) => match self.levels.next() {
                    Some((level, candidate)) => {
                        self.next_step = Step::Level(level + 1);
                        self.base.clone_from(&candidate);
                        return (Step::Level(level), candidate);
                    }
                    None => {
                        // `base` is the whole-path candidate, already offered as
                        // the last level; only the fallback needs a bare try.
                        if self.base.is_empty() {
                            self.base = self.fallback.to_string();
                            self.next_step = Step::Extend(0);
                        } else {
                            self.next_step = Step::Extend(1);
                        }
                    }
                },
                Step::Extend(count) => {
                    self.next_step = Step::Extend(count + 1);
                    if count > 0 {
                        self.base.push(self.filler);
                    }
                    return (Step::Extend(count), self.base.clone());
                }
            }
        }
    }
}

impl Iterator for Escalation<'_, '_> {
    type Item = (Step, String);

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_candidate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// One registered import, rendered by `Display` as a Go import spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Import<'a> {
    pub path: &'a str,
    pub alias: &'a str,
}

impl fmt::Display for Import<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.alias)?;
        write_go_string(f, self.path)
    }
}

fn write_go_string(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_str("\"")?;
    for ch in text.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            ch if ch.is_control() => write!(f, "\\u{:04x}", ch as u32)?,
            ch => write!(f, "{ch}")?,
        }
    }
    f.write_str("\"")
}
