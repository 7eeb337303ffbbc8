// ============================================================
// Layer 4 — Shuffled K-Fold Partitioning
// ============================================================
// Splits the index range 0..n into k disjoint validation groups.
//
// Algorithm:
//   1. indices = [0, 1, ..., n-1]
//   2. Shuffle indices with a seeded ChaCha8 generator
//   3. Cut the shuffled list into k contiguous groups.
//      Every group gets n / k items; the first n % k groups
//      get one extra so sizes never differ by more than one.
//   4. Fold i validates on group i and trains on the rest.
//
// Example with n=7, k=3 (after shuffling to [4 0 6 2 5 1 3]):
//   Fold 0: val = [4 0 6]   train = [1 2 3 5]
//   Fold 1: val = [2 5]     train = [0 1 3 4 6]
//   Fold 2: val = [1 3]     train = [0 2 4 5 6]
//
// ChaCha8Rng's output stream is fixed across platforms and rand
// releases: the same seed always produces the same folds.

use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::error::SplitError;

/// Train/validation index sets for one fold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldIndices {
    /// Indices of every item outside this fold's group, ascending
    pub train: Vec<usize>,
    /// Indices of this fold's group, in shuffled order
    pub val: Vec<usize>,
}

/// Seeded, shuffled k-fold splitter over an index range.
#[derive(Debug, Clone, Copy)]
pub struct KFold {
    n_splits: usize,
    seed: u64,
}

impl KFold {
    pub fn new(n_splits: usize, seed: u64) -> Self {
        Self { n_splits, seed }
    }

    /// Partition `0..n_items` into `n_splits` folds.
    ///
    /// # Errors
    /// `SplitError::InvalidParameter` if `n_splits < 2` or
    /// `n_splits > n_items`.
    pub fn split(&self, n_items: usize) -> Result<Vec<FoldIndices>, SplitError> {
        if self.n_splits < 2 {
            return Err(SplitError::InvalidParameter(format!(
                "k-fold cross-validation requires at least 2 splits, got n_splits={}",
                self.n_splits
            )));
        }
        if self.n_splits > n_items {
            return Err(SplitError::InvalidParameter(format!(
                "cannot have n_splits={} greater than the number of groups: {}",
                self.n_splits, n_items
            )));
        }

        let mut indices: Vec<usize> = (0..n_items).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        indices.shuffle(&mut rng);

        let base  = n_items / self.n_splits;
        let extra = n_items % self.n_splits;

        let mut folds = Vec::with_capacity(self.n_splits);
        let mut start = 0usize;

        for fold in 0..self.n_splits {
            let size = base + usize::from(fold < extra);
            let end  = start + size;

            let val = indices[start..end].to_vec();

            // Mark the held-out group, then collect the rest in index order
            let mut held_out = vec![false; n_items];
            for &i in &val {
                held_out[i] = true;
            }
            let train = (0..n_items).filter(|&i| !held_out[i]).collect();

            folds.push(FoldIndices { train, val });
            start = end;
        }

        Ok(folds)
    }
}
