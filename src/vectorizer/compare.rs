use num::Num;

/// Vector comparison kernels.
///
/// Written against paired iterators so callers can feed matrix rows or any
/// other dense sequence without an intermediate allocation.
pub trait Compare<N>
where
    N: Num + Copy,
{
    /// d(a, b) = Σ(a_i * b_i)
    fn dot(a: impl Iterator<Item = N>, b: impl Iterator<Item = N>) -> f64;

    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    /// ||a|| = sqrt(Σ(a_i^2))
    ///
    /// When either vector has zero norm the denominator is zero and the
    /// result is NaN. That NaN is the contract: it is propagated, never
    /// coerced to 0 or 1, so callers can detect the degenerate comparison.
    fn cosine_similarity(a: impl Iterator<Item = N>, b: impl Iterator<Item = N>) -> f64;
}

/// Default comparison kernels for float vectors. Accumulates in f64.
#[derive(Debug)]
pub struct DefaultCompare;

impl Compare<f64> for DefaultCompare {
    #[inline]
    fn dot(a: impl Iterator<Item = f64>, b: impl Iterator<Item = f64>) -> f64 {
        a.zip(b).map(|(x, y)| x * y).sum()
    }

    #[inline]
    fn cosine_similarity(a: impl Iterator<Item = f64>, b: impl Iterator<Item = f64>) -> f64 {
        let mut dot = 0.0;
        let mut norm_a = 0.0;
        let mut norm_b = 0.0;
        for (x, y) in a.zip(b) {
            dot += x * y;
            norm_a += x * x;
            norm_b += y * y;
        }
        dot / (norm_a.sqrt() * norm_b.sqrt())
    }
}

impl Compare<f32> for DefaultCompare {
    #[inline]
    fn dot(a: impl Iterator<Item = f32>, b: impl Iterator<Item = f32>) -> f64 {
        a.zip(b).map(|(x, y)| x as f64 * y as f64).sum()
    }

    #[inline]
    fn cosine_similarity(a: impl Iterator<Item = f32>, b: impl Iterator<Item = f32>) -> f64 {
        let mut dot = 0.0;
        let mut norm_a = 0.0;
        let mut norm_b = 0.0;
        for (x, y) in a.zip(b) {
            let (x, y) = (x as f64, y as f64);
            dot += x * y;
            norm_a += x * x;
            norm_b += y * y;
        }
        dot / (norm_a.sqrt() * norm_b.sqrt())
    }
}
