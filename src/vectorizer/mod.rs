pub mod compare;
pub mod tfidf;
pub mod tokenizer;
pub mod vocab;

use crate::error::TfidfError;

use compare::{Compare, DefaultCompare};
use tokenizer::Tokenizer;
use vocab::Vocabulary;

/// Sentinel stored on the similarity-matrix diagonal.
///
/// A self-comparison is not a meaningful similarity, so the diagonal holds
/// this marker instead of a computed 1.0.
pub const SELF_SIMILARITY_SENTINEL: f64 = -1.0;

/// Dimensions of the fitted matrix: `n` documents × `m` vocabulary terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Shape {
    /// Document count.
    pub n: usize,
    /// Vocabulary size at fit completion.
    pub m: usize,
}

/// TF-IDF vectorizer over an ordered document collection.
///
/// One `fit_transform` call builds the vocabulary and the n×m tf×idf
/// matrix; similarity queries then run against that fitted state. A refit
/// replaces vocabulary, matrix, and shape wholesale. Mutation takes
/// `&mut self`, so the single-writer discipline is enforced by the borrow
/// checker rather than by convention; a fitted instance can be queried
/// through `&self` from many places at once.
///
/// # Examples
/// ```
/// use tfidf_cosine::{TfidfVectorizer, Tokenizer};
///
/// let tokenizer = Tokenizer::new().with_stopwords(["the", "a"]);
/// let mut vectorizer = TfidfVectorizer::with_tokenizer(tokenizer);
/// vectorizer.fit_transform(&["the cat", "a dog", "cat and dog"]).unwrap();
///
/// let shape = vectorizer.shape();
/// assert_eq!((shape.n, shape.m), (3, 3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TfidfVectorizer {
    tokenizer: Tokenizer,
    vocab: Vocabulary,
    vect: Vec<Vec<f64>>,
    shape: Shape,
}

impl TfidfVectorizer {
    /// Create an unfitted vectorizer with the default tokenizer.
    pub fn new() -> Self {
        Self::with_tokenizer(Tokenizer::new())
    }

    /// Create an unfitted vectorizer with a configured tokenizer
    /// (custom token pattern and/or stopword set).
    pub fn with_tokenizer(tokenizer: Tokenizer) -> Self {
        TfidfVectorizer {
            tokenizer,
            vocab: Vocabulary::new(),
            vect: Vec::new(),
            shape: Shape::default(),
        }
    }

    /// Build the tf×idf representation of `collection` and store it as the
    /// fitted state.
    ///
    /// Walks the collection in order: tokenizes each document, grows the
    /// vocabulary in first-occurrence order, counts term and document
    /// frequencies in one pass, then overwrites the counts with their
    /// tf×idf form. Deterministic for identical collection, stopwords, and
    /// token pattern.
    ///
    /// # Arguments
    /// * `collection` - ordered documents; position is the document id
    ///
    /// # Returns
    /// * `&[Vec<f64>]` - the fitted n×m weight matrix
    ///
    /// # Errors
    /// * `TfidfError::EmptyCollection` - n = 0 leaves idf undefined and is
    ///   rejected before any state is touched
    ///
    /// A single-document collection is valid and degenerate: every present
    /// term has idf log10(1/1) = 0, so the whole matrix is zero.
    pub fn fit_transform<T>(&mut self, collection: &[T]) -> Result<&[Vec<f64>], TfidfError>
    where
        T: AsRef<str>,
    {
        if collection.is_empty() {
            return Err(TfidfError::EmptyCollection);
        }

        // refit replaces prior state wholesale
        self.vocab.clear();
        self.vect.clear();

        let doc_indices = self.build_vocab(collection);
        let n = collection.len();
        let m = self.vocab.len();

        let (mut vect, df) = tfidf::count_frequencies(&doc_indices, m);
        let idf = tfidf::idf_vec(n, &df);
        tfidf::apply_idf(&mut vect, &idf);

        self.vect = vect;
        self.shape = Shape { n, m };
        Ok(&self.vect)
    }

    /// Convert each document into its ordered token-index sequence, growing
    /// the vocabulary as new terms are first encountered.
    fn build_vocab<T>(&mut self, collection: &[T]) -> Vec<Vec<usize>>
    where
        T: AsRef<str>,
    {
        let mut doc_indices = Vec::with_capacity(collection.len());
        for doc in collection {
            let tokens = self.tokenizer.tokenize(doc.as_ref());
            let mut indices = Vec::with_capacity(tokens.len());
            for token in tokens {
                indices.push(self.vocab.get_or_insert(token));
            }
            doc_indices.push(indices);
        }
        doc_indices
    }

    /// Fitted dimensions {n, m}.
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Read-only view of the fitted vocabulary.
    #[inline]
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Read-only view of the fitted weight matrix rows.
    #[inline]
    pub fn matrix(&self) -> &[Vec<f64>] {
        &self.vect
    }

    /// Cosine similarity of two length-m vectors.
    ///
    /// For nonnegative tf-idf vectors the score lies in [0, 1], and
    /// `similarity(v, v)` for nonzero v is 1.0 within float tolerance. A
    /// zero-norm input produces NaN, which is deliberately propagated so
    /// callers can detect the degenerate comparison.
    ///
    /// # Errors
    /// * `TfidfError::DimensionMismatch` - either input's length differs
    ///   from the fitted column count
    pub fn similarity(&self, a: &[f64], b: &[f64]) -> Result<f64, TfidfError> {
        let expected = self.shape.m;
        if a.len() != expected {
            return Err(TfidfError::DimensionMismatch {
                expected,
                actual: a.len(),
            });
        }
        if b.len() != expected {
            return Err(TfidfError::DimensionMismatch {
                expected,
                actual: b.len(),
            });
        }
        Ok(DefaultCompare::cosine_similarity(
            a.iter().copied(),
            b.iter().copied(),
        ))
    }

    /// Pairwise cosine similarity over the fitted collection.
    ///
    /// Returns an n×n table. Diagonal cells are self-comparisons and hold
    /// the sentinel `-1.0` only; no similarity is computed for them. Off-
    /// diagonal cells are symmetric, so the upper triangle is computed once
    /// and mirrored.
    pub fn similarity_matrix(&self) -> Vec<Vec<f64>> {
        let n = self.shape.n;
        let mut table = vec![vec![SELF_SIMILARITY_SENTINEL; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let score = DefaultCompare::cosine_similarity(
                    self.vect[i].iter().copied(),
                    self.vect[j].iter().copied(),
                );
                table[i][j] = score;
                table[j][i] = score;
            }
        }
        table
    }
}
