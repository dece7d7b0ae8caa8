// src/infrastructure/regression/forest.rs
// Bagged ensemble of regression trees with a fixed seed

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::tree::RegressionTree;

const MIN_SAMPLES_SPLIT: usize = 2;

/// Random forest regressor: `tree_count` CART trees, each fitted on a
/// bootstrap sample drawn from a seeded RNG. Predictions average the
/// trees. The same seed and data always produce the same forest.
#[derive(Debug, Clone)]
pub struct RandomForestRegressor {
    trees: Vec<RegressionTree>,
    tree_count: usize,
    max_depth: usize,
    seed: u64,
}

impl RandomForestRegressor {
    pub fn new(tree_count: usize, max_depth: usize, seed: u64) -> Self {
        Self {
            trees: Vec::new(),
            tree_count,
            max_depth,
            seed,
        }
    }

    /// Refit the whole forest; prior trees are discarded
    pub fn fit(&mut self, rows: &[Vec<f64>], labels: &[f64]) {
        debug_assert_eq!(rows.len(), labels.len());
        debug_assert!(!rows.is_empty());

        self.trees.clear();
        let n = rows.len();

        for t in 0..self.tree_count {
            // One RNG per tree keeps trees independent of ensemble size
            let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(t as u64));
            let sample: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();

            let mut tree = RegressionTree::new(self.max_depth, MIN_SAMPLES_SPLIT);
            tree.fit(rows, labels, &sample);
            self.trees.push(tree);
        }
    }

    /// Mean prediction over all trees; 0.0 before any fit
    pub fn predict(&self, row: &[f64]) -> f64 {
        if self.trees.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.trees.iter().map(|tree| tree.predict(row)).sum();
        sum / self.trees.len() as f64
    }

    pub fn is_fitted(&self) -> bool {
        !self.trees.is_empty()
    }
}
