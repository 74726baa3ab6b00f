//! Term/document frequency counting and idf weighting.
//!
//! These are the internals of the fit pass: raw counts and document
//! frequencies are gathered in one combined sweep per document, then the
//! counts are overwritten elementwise with their tf×idf form.

/// Count term frequencies and document frequencies in a single pass.
///
/// # Arguments
/// * `doc_indices` - per document, the ordered token-index sequence
/// * `vocab_size` - final vocabulary size m for this fit
///
/// # Returns
/// * `(Vec<Vec<f64>>, Vec<u32>)` - the n×m raw-count matrix and the
///   length-m document-frequency vector
///
/// df[t] is incremented exactly when cell (i, t) is still zero, i.e. on the
/// first occurrence of t within document i, so 1 ≤ df[t] ≤ n holds for
/// every term that entered the vocabulary.
pub fn count_frequencies(doc_indices: &[Vec<usize>], vocab_size: usize) -> (Vec<Vec<f64>>, Vec<u32>) {
    let mut vect = vec![vec![0.0; vocab_size]; doc_indices.len()];
    let mut df = vec![0u32; vocab_size];
    for (row, indices) in vect.iter_mut().zip(doc_indices) {
        for &term_index in indices {
            if row[term_index] == 0.0 {
                df[term_index] += 1;
            }
            row[term_index] += 1.0;
        }
    }
    (vect, df)
}

/// idf[t] = log10(n / df[t]).
///
/// Zero iff term t occurs in every document, strictly positive otherwise;
/// never negative and never NaN for n ≥ 1, since df[t] ≥ 1 by construction.
/// Callers must reject n = 0 before getting here.
#[inline]
pub fn idf_vec(doc_count: usize, df: &[u32]) -> Vec<f64> {
    let n = doc_count as f64;
    df.iter().map(|&nt| (n / nt as f64).log10()).collect()
}

/// Overwrite each raw count with count × idf[t], elementwise per row.
pub fn apply_idf(vect: &mut [Vec<f64>], idf: &[f64]) {
    for row in vect.iter_mut() {
        for (cell, &weight) in row.iter_mut().zip(idf) {
            *cell *= weight;
        }
    }
}
