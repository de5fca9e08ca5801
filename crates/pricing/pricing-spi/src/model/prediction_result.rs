//! Point prediction with its uncertainty band

use serde::{Deserialize, Serialize};

/// Point estimate bounded by the RMSE of its price tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub point_estimate: f64,
    /// `max(0, point_estimate - rmse)`
    pub interval_lower: f64,
    /// `point_estimate + rmse`
    pub interval_upper: f64,
    /// Half-width used for the band
    pub rmse: f64,
    /// 1-based quartile bucket the estimate fell into
    pub quartile: usize,
}

impl PredictionResult {
    /// Build the band around a point estimate, flooring the lower bound at zero
    pub fn from_rmse(point_estimate: f64, rmse: f64, quartile: usize) -> Self {
        Self {
            point_estimate,
            interval_lower: (point_estimate - rmse).max(0.0),
            interval_upper: point_estimate + rmse,
            rmse,
            quartile,
        }
    }

    pub fn width(&self) -> f64 {
        self.interval_upper - self.interval_lower
    }

    pub fn contains(&self, price: f64) -> bool {
        (self.interval_lower..=self.interval_upper).contains(&price)
    }
}
