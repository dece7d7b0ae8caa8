// src/infrastructure/regression/scaler.rs
// Standardization transform: zero mean, unit variance per feature

/// Per-column standardization fitted on a training matrix.
///
/// Columns with zero variance keep a scale of 1.0 so transforming them
/// yields 0 rather than a division by zero.
#[derive(Debug, Clone)]
pub struct StandardScaler {
    mean: Vec<f64>,
    std: Vec<f64>,
}

impl StandardScaler {
    /// Fit the scaler to a non-empty matrix of equal-width rows
    pub fn fit(rows: &[Vec<f64>]) -> Self {
        let n_samples = rows.len();
        let n_features = rows.first().map(|r| r.len()).unwrap_or(0);

        let mut mean = vec![0.0; n_features];
        for row in rows {
            for (m, &value) in mean.iter_mut().zip(row.iter()) {
                *m += value;
            }
        }
        for m in mean.iter_mut() {
            *m /= n_samples as f64;
        }

        let mut std = vec![0.0; n_features];
        for row in rows {
            for (col, &value) in row.iter().enumerate() {
                let diff = value - mean[col];
                std[col] += diff * diff;
            }
        }
        for s in std.iter_mut() {
            *s = (*s / n_samples as f64).sqrt();
            if *s == 0.0 {
                *s = 1.0;
            }
        }

        Self { mean, std }
    }

    /// Standardize a single feature vector
    pub fn transform_row(&self, row: &[f64]) -> Vec<f64> {
        debug_assert_eq!(row.len(), self.mean.len());
        row.iter()
            .zip(self.mean.iter().zip(self.std.iter()))
            .map(|(&value, (&m, &s))| (value - m) / s)
            .collect()
    }

    /// Standardize a whole matrix
    pub fn transform(&self, rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
        rows.iter().map(|row| self.transform_row(row)).collect()
    }

    /// Fit on a matrix and return it standardized
    pub fn fit_transform(rows: &[Vec<f64>]) -> (Self, Vec<Vec<f64>>) {
        let scaler = Self::fit(rows);
        let transformed = scaler.transform(rows);
        (scaler, transformed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fitted_columns_have_zero_mean_unit_variance() {
        let rows = vec![
            vec![1.0, 10.0],
            vec![2.0, 20.0],
            vec![3.0, 30.0],
            vec![4.0, 40.0],
        ];
        let (_, scaled) = StandardScaler::fit_transform(&rows);

        for col in 0..2 {
            let mean: f64 = scaled.iter().map(|r| r[col]).sum::<f64>() / scaled.len() as f64;
            let var: f64 =
                scaled.iter().map(|r| (r[col] - mean).powi(2)).sum::<f64>() / scaled.len() as f64;
            assert!(mean.abs() < 1e-12);
            assert!((var - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn constant_column_transforms_to_zero() {
        let rows = vec![vec![5.0, 1.0], vec![5.0, 2.0], vec![5.0, 3.0]];
        let (scaler, scaled) = StandardScaler::fit_transform(&rows);

        for row in &scaled {
            assert_eq!(row[0], 0.0);
        }
        assert_eq!(scaler.transform_row(&[5.0, 2.0])[0], 0.0);
    }

    #[test]
    fn transform_uses_training_statistics() {
        let rows = vec![vec![0.0], vec![2.0]];
        let scaler = StandardScaler::fit(&rows);
        // mean 1, std 1
        assert!((scaler.transform_row(&[3.0])[0] - 2.0).abs() < 1e-12);
    }
}
