//! TF-IDF vectorization and cosine similarity for document collections.
//!
//! Given an ordered collection of raw text documents, this crate builds a
//! term vocabulary, an n×m tf×idf weight matrix, and pairwise cosine
//! similarity scores. The whole computation is a batch, in-memory fit with
//! no I/O.
//!
//! # Examples
//! ```
//! use tfidf_cosine::{TfidfVectorizer, Tokenizer};
//!
//! let tokenizer = Tokenizer::new().with_stopwords(["the", "is", "a"]);
//! let mut vectorizer = TfidfVectorizer::with_tokenizer(tokenizer);
//!
//! let collection = [
//!     "the cat sat on a mat",
//!     "the dog is a good dog",
//! ];
//! let matrix = vectorizer.fit_transform(&collection).unwrap();
//! assert_eq!(matrix.len(), 2);
//!
//! let sim = vectorizer.similarity_matrix();
//! assert_eq!(sim[0][0], -1.0); // self-comparisons hold the sentinel
//! ```

pub mod error;
pub mod vectorizer;

/// TF-IDF Vectorizer
/// The top-level struct of this crate. It converts a document collection
/// into a dense tf×idf matrix and answers cosine-similarity queries over
/// the fitted rows.
///
/// Internally, it holds:
/// - The tokenizer (token pattern + stopwords)
/// - The fitted vocabulary
/// - The n×m weight matrix and its shape
pub use vectorizer::TfidfVectorizer;

/// Dimensions of the fitted matrix: `n` documents × `m` vocabulary terms.
pub use vectorizer::Shape;

/// Tokenizer
/// Extracts token strings from raw text with a configurable regex pattern
/// and drops caller-supplied stopwords.
pub use vectorizer::tokenizer::Tokenizer;

/// Vocabulary
/// Order-preserving term table mapping each term to a zero-based column
/// index, assigned in first-occurrence order across the collection.
pub use vectorizer::vocab::Vocabulary;

/// Vector comparison kernels (dot product, cosine similarity).
pub use vectorizer::compare::{Compare, DefaultCompare};

/// Errors surfaced at the vectorizer API boundary.
pub use error::TfidfError;
