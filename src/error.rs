use thiserror::Error;

/// Errors surfaced at the vectorizer API boundary.
///
/// A zero-norm vector handed to a similarity query is not an error: it
/// surfaces as a `NaN` score, following float division semantics, so callers
/// can detect the degenerate case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TfidfError {
    /// `fit_transform` was called with no documents. idf is undefined for
    /// n = 0, so the empty collection is rejected outright instead of
    /// producing NaN/Infinity weights.
    #[error("cannot fit an empty document collection")]
    EmptyCollection,

    /// A similarity input whose length differs from the fitted vocabulary
    /// size.
    #[error("vector of length {actual} does not match fitted dimensionality {expected}")]
    DimensionMismatch {
        /// Fitted column count m.
        expected: usize,
        /// Length of the offending input vector.
        actual: usize,
    },
}
