use rustc_hash::FxHashSet;

/// Go keywords. None of these can ever be an identifier.
pub const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Identifiers of Go's universe block. Legal to shadow, but an import alias
/// that does so breaks any generated code referring to the builtin.
pub const GO_PREDECLARED: &[&str] = &[
    // Types
    "any",
    "bool",
    "byte",
    "comparable",
    "complex64",
    "complex128",
    "error",
    "float32",
    "float64",
    "int",
    "int8",
    "int16",
    "int32",
    "int64",
    "rune",
    "string",
    "uint",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "uintptr",
    // Constants
    "true",
    "false",
    "iota",
    // Zero value
    "nil",
    // Functions
    "append",
    "cap",
    "clear",
    "close",
    "complex",
    "copy",
    "delete",
    "imag",
    "len",
    "make",
    "max",
    "min",
    "new",
    "panic",
    "print",
    "println",
    "real",
    "recover",
];

/// Local names generated code declares so often that an alias must avoid them.
pub const DEFAULT_COMMON_NAMES: &[&str] = &["err"];

/// Identifiers an import alias may never take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedWords {
    words: FxHashSet<String>,
}

impl ReservedWords {
    /// Keywords and predeclared identifiers only, with no common-name deny-list.
    pub fn language() -> Self {
        Self {
            words: GO_KEYWORDS
                .iter()
                .chain(GO_PREDECLARED)
                .map(|word| word.to_string())
                .collect(),
        }
    }

    /// The language set plus [`DEFAULT_COMMON_NAMES`].
    pub fn go() -> Self {
        Self::language().with_common_names(DEFAULT_COMMON_NAMES.iter().copied())
    }

    pub fn with_common_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extend(names);
        self
    }

    /// Returns `false` if `word` was already reserved.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for ReservedWords {
    fn default() -> Self {
        Self::go()
    }
}

impl<S: Into<String>> Extend<S> for ReservedWords {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.words.extend(iter.into_iter().map(Into::into));
    }
}
