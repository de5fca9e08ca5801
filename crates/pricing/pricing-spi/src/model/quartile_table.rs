//! Quartile-bucketed RMSE tables

use super::Domain;
use crate::error::{PricingError, Result};
use serde::{Deserialize, Serialize};

/// A price range with the RMSE measured on predictions falling inside it
///
/// The range is `[lower, upper)`: a price sitting exactly on a boundary
/// belongs to the higher bucket. `None` leaves that side open.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuartileBucket {
    #[serde(default)]
    pub lower: Option<f64>,
    #[serde(default)]
    pub upper: Option<f64>,
    pub rmse: f64,
}

impl QuartileBucket {
    pub fn new(lower: Option<f64>, upper: Option<f64>, rmse: f64) -> Self {
        Self { lower, upper, rmse }
    }

    /// Whether the price falls inside `[lower, upper)`
    pub fn contains(&self, price: f64) -> bool {
        self.lower.map_or(true, |lower| price >= lower)
            && self.upper.map_or(true, |upper| price < upper)
    }
}

/// Ordered buckets partitioning the whole price axis for one domain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuartileTable {
    domain: Domain,
    buckets: Vec<QuartileBucket>,
}

impl QuartileTable {
    /// Validate and build a table
    ///
    /// The first bucket must be open below, the last open above, and each
    /// bucket must start exactly where the previous one ends.
    pub fn new(domain: Domain, buckets: Vec<QuartileBucket>) -> Result<Self> {
        let invalid = |reason: String| {
            Err(PricingError::InvalidQuartileTable(format!("{}: {}", domain, reason)))
        };

        let (first, last) = match (buckets.first(), buckets.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return invalid("no buckets".to_string()),
        };
        if first.lower.is_some() {
            return invalid("first bucket must be open below".to_string());
        }
        if last.upper.is_some() {
            return invalid("last bucket must be open above".to_string());
        }

        for (position, bucket) in buckets.iter().enumerate() {
            if !bucket.rmse.is_finite() || bucket.rmse < 0.0 {
                return invalid(format!("bucket {} has invalid rmse {}", position + 1, bucket.rmse));
            }
            if let (Some(lower), Some(upper)) = (bucket.lower, bucket.upper) {
                if !(lower < upper) {
                    return invalid(format!("bucket {} is empty [{}, {})", position + 1, lower, upper));
                }
            }
        }

        for (position, pair) in buckets.windows(2).enumerate() {
            match (pair[0].upper, pair[1].lower) {
                (Some(upper), Some(lower)) if upper == lower && upper.is_finite() => {}
                (upper, lower) => {
                    return invalid(format!(
                        "buckets {} and {} do not meet ({:?} vs {:?})",
                        position + 1,
                        position + 2,
                        upper,
                        lower
                    ))
                }
            }
        }

        Ok(Self { domain, buckets })
    }

    /// Calibrated nightly-price table
    pub fn airbnb_default() -> Self {
        Self {
            domain: Domain::Airbnb,
            buckets: vec![
                QuartileBucket::new(None, Some(102.0), 40.20),
                QuartileBucket::new(Some(102.0), Some(151.0), 40.44),
                QuartileBucket::new(Some(151.0), Some(239.0), 53.07),
                QuartileBucket::new(Some(239.0), None, 115.52),
            ],
        }
    }

    /// Calibrated monthly-rent table
    pub fn renting_default() -> Self {
        Self {
            domain: Domain::Renting,
            buckets: vec![
                QuartileBucket::new(None, Some(560.17), 30.29),
                QuartileBucket::new(Some(560.17), Some(1379.23), 87.73),
                QuartileBucket::new(Some(1379.23), Some(2025.77), 159.46),
                QuartileBucket::new(Some(2025.77), None, 191.43),
            ],
        }
    }

    /// Calibrated table for a domain
    pub fn default_for(domain: Domain) -> Self {
        match domain {
            Domain::Airbnb => Self::airbnb_default(),
            Domain::Renting => Self::renting_default(),
        }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn buckets(&self) -> &[QuartileBucket] {
        &self.buckets
    }

    /// Bucket holding the estimate, with its 1-based quartile number
    pub fn bucket_for(&self, estimate: f64) -> Result<(usize, &QuartileBucket)> {
        if estimate.is_nan() {
            return Err(PricingError::OutOfRangeEstimate {
                domain: self.domain,
                estimate,
            });
        }

        self.buckets
            .iter()
            .enumerate()
            .find(|(_, bucket)| bucket.contains(estimate))
            .map(|(position, bucket)| (position + 1, bucket))
            .ok_or(PricingError::OutOfRangeEstimate {
                domain: self.domain,
                estimate,
            })
    }
}
