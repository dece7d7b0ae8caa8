// src/infrastructure/regression/mod.rs
// In-tree regression primitives: feature scaling, CART trees, bagged forest

mod forest;
mod scaler;
mod tree;

pub use forest::RandomForestRegressor;
pub use scaler::StandardScaler;
pub use tree::RegressionTree;
