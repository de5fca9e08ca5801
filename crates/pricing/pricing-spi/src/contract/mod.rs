//! Contract module containing trait definitions for pricing operations

mod interval_estimator;
mod price_decomposer;
mod regressor;

pub use interval_estimator::IntervalEstimator;
pub use price_decomposer::PriceDecomposer;
pub use regressor::Regressor;
