use indexmap::IndexMap;

/// Order-preserving term table.
///
/// Maps each term to a unique zero-based column index, assigned in strict
/// first-occurrence order across the collection. The `IndexMap` backing
/// doubles as the lookup map and the append-only ordered registry, so index
/// order never depends on hash order. Indices are never reassigned or
/// reused; the table only grows during a fit.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: IndexMap<String, usize>,
}

impl Vocabulary {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        Vocabulary {
            terms: IndexMap::new(),
        }
    }

    /// Look up `term`, assigning the next available index on first sight.
    ///
    /// # Returns
    /// * `usize` - the term's column index
    #[inline]
    pub fn get_or_insert(&mut self, term: &str) -> usize {
        if let Some(&index) = self.terms.get(term) {
            return index;
        }
        let index = self.terms.len();
        self.terms.insert(term.to_string(), index);
        index
    }

    /// Look up `term` without inserting.
    #[inline]
    pub fn get(&self, term: &str) -> Option<usize> {
        self.terms.get(term).copied()
    }

    /// Whether `term` has been assigned an index.
    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// The term assigned to `index`, if any.
    #[inline]
    pub fn term_at(&self, index: usize) -> Option<&str> {
        self.terms.get_index(index).map(|(term, _)| term.as_str())
    }

    /// Number of distinct terms (the matrix column count m).
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the vocabulary is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate `(term, index)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.terms.iter().map(|(term, &index)| (term.as_str(), index))
    }

    /// Drop all terms. Used when a refit replaces prior state wholesale.
    #[inline]
    pub fn clear(&mut self) {
        self.terms.clear();
    }
}
