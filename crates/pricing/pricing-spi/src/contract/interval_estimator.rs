//! Trait for prediction interval estimation

use crate::error::Result;
use crate::model::{Domain, PredictionResult};

/// Attaches an uncertainty band to a point estimate
pub trait IntervalEstimator: Send + Sync {
    /// Bound a point estimate for the given domain
    fn interval(&self, point_estimate: f64, domain: Domain) -> Result<PredictionResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock estimator using a fixed percentage band
    struct PercentBand(f64);

    impl IntervalEstimator for PercentBand {
        fn interval(&self, point_estimate: f64, _domain: Domain) -> Result<PredictionResult> {
            Ok(PredictionResult::from_rmse(point_estimate, point_estimate * self.0, 1))
        }
    }

    #[test]
    fn test_mock_interval_bounds_estimate() {
        let result = PercentBand(0.1).interval(200.0, Domain::Renting).unwrap();
        assert_eq!(result.interval_lower, 180.0);
        assert_eq!(result.interval_upper, 220.0);
    }
}
