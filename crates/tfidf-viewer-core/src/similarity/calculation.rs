use std::cmp::Ordering;

use super::normalize::euclidean_norm;
use super::VectorError;

/// Cosine similarity between two sparse term vectors.
///
/// Both inputs must be sorted by term ascending. The dot product is taken with
/// a two-cursor merge, so terms present in only one vector contribute nothing.
/// Unsorted input is not detected and produces a wrong score.
///
/// Norms are computed from the inputs themselves, so vectors that are not
/// unit-length still give the true cosine.
pub fn cosine_similarity(
    vec_a: &[(String, f64)],
    vec_b: &[(String, f64)],
) -> Result<f64, VectorError> {
    let norm_a = euclidean_norm(vec_a.iter().map(|(_, w)| *w));
    let norm_b = euclidean_norm(vec_b.iter().map(|(_, w)| *w));

    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(VectorError::ZeroNorm);
    }

    let mut dot_product = 0.0;
    let mut i = 0;
    let mut j = 0;

    while i < vec_a.len() && j < vec_b.len() {
        let (term_a, weight_a) = &vec_a[i];
        let (term_b, weight_b) = &vec_b[j];
        match term_a.cmp(term_b) {
            Ordering::Equal => {
                dot_product += weight_a * weight_b;
                i += 1;
                j += 1;
            }
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
        }
    }

    Ok(dot_product / (norm_a * norm_b))
}
