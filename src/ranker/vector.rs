/// Sparse vector over vocabulary dimensions, entries sorted by dimension
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Build from `(dimension, weight)` pairs; zero weights are dropped
    pub fn from_entries(mut entries: Vec<(usize, f64)>) -> Self {
        entries.retain(|(_, weight)| *weight != 0.0);
        entries.sort_by_key(|(dim, _)| *dim);
        Self { entries }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.entries
            .iter()
            .map(|(_, w)| w * w)
            .sum::<f64>()
            .sqrt()
    }

    /// Scale to unit length. A zero vector stays zero.
    pub fn normalize(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, weight) in &mut self.entries {
                *weight /= norm;
            }
        }
        self
    }

    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;

        while i < self.entries.len() && j < other.entries.len() {
            let (a_dim, a_weight) = self.entries[i];
            let (b_dim, b_weight) = other.entries[j];
            match a_dim.cmp(&b_dim) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_weight * b_weight;
                    i += 1;
                    j += 1;
                }
            }
        }

        sum
    }

    /// Cosine similarity of two unit vectors, clamped to [0, 1]
    pub fn cosine(&self, other: &SparseVector) -> f64 {
        if self.is_zero() || other.is_zero() {
            return 0.0;
        }
        self.dot(other).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_entries_sorts_and_drops_zeros() {
        let v = SparseVector::from_entries(vec![(3, 1.0), (0, 2.0), (1, 0.0)]);
        assert_eq!(v.entries(), &[(0, 2.0), (3, 1.0)]);
    }

    #[test]
    fn test_normalize_unit_length() {
        let v = SparseVector::from_entries(vec![(0, 3.0), (1, 4.0)]).normalize();
        assert!((v.norm() - 1.0).abs() < 1e-12);
        assert!((v.entries()[0].1 - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_zero_vector() {
        let v = SparseVector::default().normalize();
        assert!(v.is_zero());
        assert_eq!(v.norm(), 0.0);
    }

    #[test]
    fn test_dot_only_shared_dimensions() {
        let a = SparseVector::from_entries(vec![(0, 1.0), (2, 2.0), (5, 1.0)]);
        let b = SparseVector::from_entries(vec![(2, 3.0), (4, 7.0), (5, 0.5)]);
        assert!((a.dot(&b) - 6.5).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_identical_is_one() {
        let v = SparseVector::from_entries(vec![(1, 0.2), (7, 0.9)]).normalize();
        assert!((v.cosine(&v) - 1.0).abs() < 1e-9);
        assert!(v.cosine(&v) <= 1.0);
    }

    #[test]
    fn test_cosine_with_zero_vector() {
        let v = SparseVector::from_entries(vec![(1, 1.0)]);
        assert_eq!(v.cosine(&SparseVector::default()), 0.0);
    }
}
