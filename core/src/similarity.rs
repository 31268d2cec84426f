#[cfg(feature = "multithreaded")]
use rayon::prelude::*;

use crate::vectorizer::DocumentVector;

/// Dense symmetric matrix of pairwise cosine similarities, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    pub fn len(&self) -> usize { self.n }

    pub fn is_empty(&self) -> bool { self.n == 0 }

    pub fn get(&self, i: usize, j: usize) -> f64 { self.values[i * self.n + j] }

    pub fn row(&self, i: usize) -> &[f64] { &self.values[i * self.n..(i + 1) * self.n] }
}

/// Cosine similarity of every pair of unit-length vectors.
///
/// Each row computes its upper-triangle entries independently; the lower triangle is mirrored
/// afterwards and the diagonal is fixed at 1.
pub fn compute(vectors: &[DocumentVector]) -> SimilarityMatrix {
    let n = vectors.len();
    let upper_row = |i: usize| -> Vec<f64> {
        vectors[i + 1..].iter().map(|other| vectors[i].dot(other)).collect()
    };

    #[cfg(feature = "multithreaded")]
    let upper: Vec<Vec<f64>> = (0..n).into_par_iter().map(upper_row).collect();
    #[cfg(not(feature = "multithreaded"))]
    let upper: Vec<Vec<f64>> = (0..n).map(upper_row).collect();

    let mut values = vec![0.0; n * n];
    for (i, row) in upper.into_iter().enumerate() {
        values[i * n + i] = 1.0;
        for (offset, sim) in row.into_iter().enumerate() {
            let j = i + 1 + offset;
            values[i * n + j] = sim;
            values[j * n + i] = sim;
        }
    }
    SimilarityMatrix { n, values }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_with_unit_diagonal() {
        let mut a = DocumentVector::from_entries(3, vec![(0, 1.0), (1, 1.0)]);
        let mut b = DocumentVector::from_entries(3, vec![(1, 1.0)]);
        let c = DocumentVector::from_entries(3, vec![]);
        a.normalize();
        b.normalize();
        let m = compute(&[a, b, c]);
        assert_eq!(m.len(), 3);
        for i in 0..3 {
            assert_eq!(m.get(i, i), 1.0);
            for j in 0..3 {
                assert_eq!(m.get(i, j), m.get(j, i));
            }
        }
        assert!((m.get(0, 1) - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-9);
        assert_eq!(m.get(0, 2), 0.0);
        assert_eq!(m.row(1), &[m.get(1, 0), 1.0, 0.0]);
    }

    #[test]
    fn empty_input_gives_empty_matrix() {
        assert!(compute(&[]).is_empty());
    }
}
