use serde::ser::{Serialize, SerializeSeq, Serializer};

use super::VectorError;

/// Sparse term vector, sorted by term ascending.
///
/// Terms missing from the vector have an implicit weight of zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeightedTermVector {
    terms: Vec<(String, f64)>,
}

impl WeightedTermVector {
    /// Wrap (term, weight) pairs as-is. Order is not checked.
    pub fn from_pairs(terms: Vec<(String, f64)>) -> Self {
        WeightedTermVector { terms }
    }

    pub fn terms(&self) -> &[(String, f64)] {
        &self.terms
    }

    pub fn into_inner(self) -> Vec<(String, f64)> {
        self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.terms.iter().map(|(t, w)| (t.as_str(), *w))
    }

    /// Weight of a single term, zero when absent
    pub fn weight(&self, term: &str) -> f64 {
        self.terms
            .binary_search_by(|(t, _)| t.as_str().cmp(term))
            .map(|idx| self.terms[idx].1)
            .unwrap_or(0.0)
    }

    /// Euclidean norm of the weight components
    pub fn norm(&self) -> f64 {
        euclidean_norm(self.terms.iter().map(|(_, w)| *w))
    }

    /// True when terms are strictly ascending, which the comparator requires
    pub fn is_sorted(&self) -> bool {
        self.terms.windows(2).all(|pair| pair[0].0 < pair[1].0)
    }

    /// Cosine similarity against another vector (see [`super::cosine_similarity`])
    pub fn cosine_similarity(&self, other: &WeightedTermVector) -> Result<f64, VectorError> {
        super::cosine_similarity(&self.terms, &other.terms)
    }
}

impl Serialize for WeightedTermVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(serde::Serialize)]
        struct Entry<'a> {
            term: &'a str,
            weight: f64,
        }

        let mut seq = serializer.serialize_seq(Some(self.terms.len()))?;
        for (term, weight) in &self.terms {
            seq.serialize_element(&Entry {
                term,
                weight: *weight,
            })?;
        }
        seq.end()
    }
}

/// Square root of the sum of squared weights
pub fn euclidean_norm(weights: impl Iterator<Item = f64>) -> f64 {
    weights.map(|w| w * w).sum::<f64>().sqrt()
}

/// Rescale weights to unit Euclidean length, keeping terms and their order.
///
/// A vector whose weights are all zero (or that has no terms at all) has no
/// direction and yields [`VectorError::ZeroNorm`].
pub fn normalize(weights: Vec<(String, f64)>) -> Result<WeightedTermVector, VectorError> {
    let norm = euclidean_norm(weights.iter().map(|(_, w)| *w));
    if norm == 0.0 || norm.is_nan() {
        return Err(VectorError::ZeroNorm);
    }

    let terms = weights
        .into_iter()
        .map(|(term, weight)| (term, weight / norm))
        .collect();

    Ok(WeightedTermVector { terms })
}
