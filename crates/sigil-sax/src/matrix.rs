//! Pairwise MINDIST between a collection of SAX words.
//!
//! MINDIST never exceeds the Euclidean distance between the underlying
//! z-normalized series, so a word whose MINDIST to a query is already above a
//! search radius can be discarded without touching the raw series.

use crate::distance::SaxDistance;

/// MINDIST for every unordered pair of `n` words.
///
/// Only pairs `(row, col)` with `row > col` are stored, `n*(n-1)/2` values in
/// row-major order. A word is always at distance zero from itself.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<SaxDistance>,
}

impl DistanceMatrix {
    /// `data[row*(row-1)/2 + col]` is the MINDIST between words `row > col`.
    pub(crate) fn from_raw(n: usize, data: Vec<SaxDistance>) -> Self {
        debug_assert_eq!(data.len(), n * n.saturating_sub(1) / 2);
        Self { n, data }
    }

    /// Word pair `(row, col)` stored at `flat_idx`, so pairs can be filled in parallel.
    pub(crate) fn unflatten(flat_idx: usize) -> (usize, usize) {
        let mut row = ((1.0 + (1.0 + 8.0 * flat_idx as f64).sqrt()) / 2.0).floor() as usize;
        // Float rounding can land one off near triangular numbers.
        while row * (row - 1) / 2 > flat_idx {
            row -= 1;
        }
        while (row + 1) * row / 2 <= flat_idx {
            row += 1;
        }
        (row, flat_idx - row * (row - 1) / 2)
    }

    /// Number of words compared.
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    /// True when built from no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// MINDIST between word `i` and word `j`, in either order.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n` or `j >= n`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> SaxDistance {
        assert!(i < self.n, "row index {i} out of bounds for matrix of size {}", self.n);
        assert!(j < self.n, "column index {j} out of bounds for matrix of size {}", self.n);
        if i == j {
            return SaxDistance::ZERO;
        }
        let (row, col) = if i > j { (i, j) } else { (j, i) };
        self.data[row * (row - 1) / 2 + col]
    }

    /// Every word pair once, as `(i, j, mindist)` with `i > j`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, SaxDistance)> + '_ {
        (1..self.n).flat_map(move |i| (0..i).map(move |j| (i, j, self.data[i * (i - 1) / 2 + j])))
    }

    /// MINDIST from word `i` to each word, including itself at zero.
    #[must_use]
    pub fn row(&self, i: usize) -> Vec<SaxDistance> {
        (0..self.n).map(|j| self.get(i, j)).collect()
    }

    /// Word with the smallest MINDIST to `i`, other than `i` itself.
    ///
    /// Ties go to the lowest index. `None` for a single-word matrix.
    #[must_use]
    pub fn nearest(&self, i: usize) -> Option<(usize, SaxDistance)> {
        (0..self.n)
            .filter(|&j| j != i)
            .map(|j| (j, self.get(i, j)))
            .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
    }

    /// Words other than `i` whose MINDIST to it is at most `radius`, in index order.
    ///
    /// Any word left out is farther than `radius` from word `i` in Euclidean
    /// distance too, so only the returned words need an exact comparison.
    #[must_use]
    pub fn candidates_within(&self, i: usize, radius: f64) -> Vec<usize> {
        (0..self.n)
            .filter(|&j| j != i && self.get(i, j).value() <= radius)
            .collect()
    }
}
