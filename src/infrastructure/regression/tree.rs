// src/infrastructure/regression/tree.rs
// CART regression tree with variance-reduction splits

/// A node in the tree arena
#[derive(Debug, Clone)]
enum Node {
    Branch {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

/// Regression tree predicting the mean label of each leaf.
///
/// Splits minimize the summed squared error of the two children over all
/// features; growth stops at `max_depth`, below `min_samples_split`, or
/// when no feature separates the samples.
#[derive(Debug, Clone)]
pub struct RegressionTree {
    nodes: Vec<Node>,
    max_depth: usize,
    min_samples_split: usize,
}

impl RegressionTree {
    pub fn new(max_depth: usize, min_samples_split: usize) -> Self {
        Self {
            nodes: Vec::new(),
            max_depth,
            min_samples_split: min_samples_split.max(2),
        }
    }

    /// Fit the tree on the rows selected by `indices` (bootstrap sample)
    pub fn fit(&mut self, rows: &[Vec<f64>], labels: &[f64], indices: &[usize]) {
        self.nodes.clear();
        self.grow(rows, labels, indices, 0);
    }

    /// Predict a single feature vector; 0.0 before any fit
    pub fn predict(&self, row: &[f64]) -> f64 {
        if self.nodes.is_empty() {
            return 0.0;
        }

        let mut current = 0;
        loop {
            match &self.nodes[current] {
                Node::Leaf { value } => return *value,
                Node::Branch {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    current = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    /// Grow a subtree over `indices`, returning its node id
    fn grow(&mut self, rows: &[Vec<f64>], labels: &[f64], indices: &[usize], depth: usize) -> usize {
        let mean = mean_label(labels, indices);

        if depth >= self.max_depth || indices.len() < self.min_samples_split {
            return self.push_leaf(mean);
        }

        let split = match best_split(rows, labels, indices) {
            Some(split) => split,
            None => return self.push_leaf(mean),
        };

        let (left_idx, right_idx): (Vec<usize>, Vec<usize>) = indices
            .iter()
            .copied()
            .partition(|&i| rows[i][split.feature] <= split.threshold);

        // A degenerate partition means every value was on one side
        if left_idx.is_empty() || right_idx.is_empty() {
            return self.push_leaf(mean);
        }

        let node_id = self.nodes.len();
        self.nodes.push(Node::Leaf { value: mean }); // placeholder until children exist

        let left = self.grow(rows, labels, &left_idx, depth + 1);
        let right = self.grow(rows, labels, &right_idx, depth + 1);

        self.nodes[node_id] = Node::Branch {
            feature: split.feature,
            threshold: split.threshold,
            left,
            right,
        };
        node_id
    }

    fn push_leaf(&mut self, value: f64) -> usize {
        self.nodes.push(Node::Leaf { value });
        self.nodes.len() - 1
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }
}

struct Split {
    feature: usize,
    threshold: f64,
}

fn mean_label(labels: &[f64], indices: &[usize]) -> f64 {
    if indices.is_empty() {
        return 0.0;
    }
    indices.iter().map(|&i| labels[i]).sum::<f64>() / indices.len() as f64
}

/// Best SSE-reducing split over all features, or None when every feature
/// is constant across the selected rows
fn best_split(rows: &[Vec<f64>], labels: &[f64], indices: &[usize]) -> Option<Split> {
    let n_features = rows[indices[0]].len();
    let total_sum: f64 = indices.iter().map(|&i| labels[i]).sum();
    let n = indices.len() as f64;

    let mut best: Option<(f64, Split)> = None;

    for feature in 0..n_features {
        let mut ordered: Vec<usize> = indices.to_vec();
        ordered.sort_by(|&a, &b| {
            rows[a][feature]
                .partial_cmp(&rows[b][feature])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut left_sum = 0.0;
        for pos in 0..ordered.len() - 1 {
            left_sum += labels[ordered[pos]];

            let current = rows[ordered[pos]][feature];
            let next = rows[ordered[pos + 1]][feature];
            if current == next {
                continue;
            }

            let left_n = (pos + 1) as f64;
            let right_n = n - left_n;
            let right_sum = total_sum - left_sum;

            // Maximizing sum(mean^2 * n) over the children minimizes SSE
            let gain = left_sum * left_sum / left_n + right_sum * right_sum / right_n;

            if best.as_ref().map_or(true, |(g, _)| gain > *g) {
                best = Some((
                    gain,
                    Split {
                        feature,
                        threshold: (current + next) / 2.0,
                    },
                ));
            }
        }
    }

    best.map(|(_, split)| split)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_labels_predict_the_constant() {
        let rows = vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]];
        let labels = vec![7.0, 7.0, 7.0, 7.0];
        let indices: Vec<usize> = (0..rows.len()).collect();

        let mut tree = RegressionTree::new(5, 2);
        tree.fit(&rows, &labels, &indices);

        assert_eq!(tree.predict(&[1.5]), 7.0);
    }

    #[test]
    fn splits_a_step_function() {
        let rows: Vec<Vec<f64>> = (0..10).map(|i| vec![i as f64]).collect();
        let labels: Vec<f64> = (0..10).map(|i| if i < 5 { 1.0 } else { 9.0 }).collect();
        let indices: Vec<usize> = (0..rows.len()).collect();

        let mut tree = RegressionTree::new(5, 2);
        tree.fit(&rows, &labels, &indices);

        assert_eq!(tree.predict(&[2.0]), 1.0);
        assert_eq!(tree.predict(&[8.0]), 9.0);
        assert!(tree.n_nodes() >= 3);
    }

    #[test]
    fn identical_features_yield_a_single_leaf() {
        let rows = vec![vec![4.0, 4.0]; 6];
        let labels = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let indices: Vec<usize> = (0..rows.len()).collect();

        let mut tree = RegressionTree::new(5, 2);
        tree.fit(&rows, &labels, &indices);

        assert_eq!(tree.n_nodes(), 1);
        assert!((tree.predict(&[4.0, 4.0]) - 3.5).abs() < 1e-12);
    }
}
