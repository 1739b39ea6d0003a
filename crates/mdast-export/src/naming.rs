//! Collision-free names for files extracted during an export session.

use std::collections::{HashMap, HashSet};

use ecow::{eco_format, EcoString};

/// Source of random tokens for [`NameAllocator::generate_with_uuid`].
pub trait TokenSource {
    /// Produce a fresh token.
    fn token(&mut self) -> EcoString;
}

/// Random version 4 UUIDs, hyphenated and lowercase.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidTokens;

impl TokenSource for UuidTokens {
    fn token(&mut self) -> EcoString {
        eco_format!("{}", uuid::Uuid::new_v4().hyphenated())
    }
}

/// Issues file names that never collide within one allocator.
///
/// Every returned name is recorded, so no name is handed out twice. The
/// allocator is meant to live for one export session.
///
/// ```rust
/// use mdast_export::NameAllocator;
///
/// let mut names = NameAllocator::new();
/// assert_eq!(names.generate("a.txt"), "a.txt");
/// assert_eq!(names.generate("a.txt"), "a-1.txt");
/// assert_eq!(names.generate("a.txt"), "a-2.txt");
/// ```
#[derive(Debug, Default)]
pub struct NameAllocator<S = UuidTokens> {
    used: HashSet<EcoString>,
    counters: HashMap<EcoString, u64>,
    tokens: S,
}

impl NameAllocator {
    /// Creates an allocator drawing random tokens from UUIDs.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: TokenSource> NameAllocator<S> {
    /// Creates an allocator with a custom token source.
    pub fn with_token_source(tokens: S) -> Self {
        Self {
            used: HashSet::new(),
            counters: HashMap::new(),
            tokens,
        }
    }

    /// Returns `base_name` if unused, otherwise `<stem>-<n><extension>` with
    /// the smallest `n` above this base name's counter that is free.
    ///
    /// The counter persists across calls for the same base name.
    pub fn generate(&mut self, base_name: &str) -> EcoString {
        if !self.used.contains(base_name) {
            return self.issue(base_name.into());
        }

        let (stem, extension) = split_extension(base_name);
        let counter = self.counters.entry(base_name.into()).or_insert(0);
        let name = loop {
            *counter += 1;
            let candidate = eco_format!("{stem}-{counter}{extension}");
            if !self.used.contains(&candidate) {
                break candidate;
            }
        };

        log::debug!("renamed colliding file name {base_name:?} to {name:?}");
        self.issue(name)
    }

    /// Returns `<token><extension>` where the token is drawn from the token
    /// source, suffixing `-<n>` before the extension in the unlikely case of
    /// a collision.
    pub fn generate_with_uuid(&mut self, base_name: &str) -> EcoString {
        let (_, extension) = split_extension(base_name);
        let token = self.tokens.token();

        let mut name = eco_format!("{token}{extension}");
        let mut counter = 0u64;
        while self.used.contains(&name) {
            counter += 1;
            name = eco_format!("{token}-{counter}{extension}");
        }

        self.issue(name)
    }

    /// Marks a name chosen elsewhere as used.
    ///
    /// Returns false if the name was already issued.
    pub fn reserve(&mut self, name: &str) -> bool {
        self.used.insert(name.into())
    }

    /// Whether the name has been issued or reserved.
    pub fn contains(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    /// Number of issued or reserved names.
    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// Whether no name has been issued yet.
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    fn issue(&mut self, name: EcoString) -> EcoString {
        self.used.insert(name.clone());
        name
    }
}

/// Splits at the last `.`; the extension keeps its dot and is empty when the
/// name has no dot.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(dot) => name.split_at(dot),
        None => (name, ""),
    }
}
