//! Quartile-conditioned prediction intervals
//!
//! The band half-width is the RMSE measured on held-out predictions within
//! the same price tier, rather than a fixed percentage of the estimate.

use pricing_spi::{
    Domain, IntervalEstimator, PredictionResult, PricingError, QuartileTable, Result,
};
use tracing::debug;

/// Interval estimator backed by one quartile table per domain
#[derive(Debug, Clone, PartialEq)]
pub struct QuartileIntervalEstimator {
    airbnb: QuartileTable,
    renting: QuartileTable,
}

impl QuartileIntervalEstimator {
    /// Build from per-domain tables, each of which must belong to its domain
    pub fn new(airbnb: QuartileTable, renting: QuartileTable) -> Result<Self> {
        for (expected, table) in [(Domain::Airbnb, &airbnb), (Domain::Renting, &renting)] {
            if table.domain() != expected {
                return Err(PricingError::InvalidQuartileTable(format!(
                    "{} table supplied for {}",
                    table.domain(),
                    expected
                )));
            }
        }
        Ok(Self { airbnb, renting })
    }

    pub fn table(&self, domain: Domain) -> &QuartileTable {
        match domain {
            Domain::Airbnb => &self.airbnb,
            Domain::Renting => &self.renting,
        }
    }
}

impl Default for QuartileIntervalEstimator {
    fn default() -> Self {
        Self {
            airbnb: QuartileTable::airbnb_default(),
            renting: QuartileTable::renting_default(),
        }
    }
}

impl IntervalEstimator for QuartileIntervalEstimator {
    fn interval(&self, point_estimate: f64, domain: Domain) -> Result<PredictionResult> {
        let (quartile, bucket) = self.table(domain).bucket_for(point_estimate)?;
        let result = PredictionResult::from_rmse(point_estimate, bucket.rmse, quartile);
        debug!(
            %domain,
            point_estimate,
            quartile,
            lower = result.interval_lower,
            upper = result.interval_upper,
            "prediction interval"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricing_spi::QuartileBucket;

    fn estimator() -> QuartileIntervalEstimator {
        QuartileIntervalEstimator::default()
    }

    #[test]
    fn test_airbnb_second_quartile() {
        let result = estimator().interval(130.0, Domain::Airbnb).unwrap();
        assert_eq!(result.quartile, 2);
        assert_eq!(result.rmse, 40.44);
        assert!((result.interval_lower - 89.56).abs() < 1e-9);
        assert!((result.interval_upper - 170.44).abs() < 1e-9);
    }

    #[test]
    fn test_airbnb_top_quartile() {
        let result = estimator().interval(300.0, Domain::Airbnb).unwrap();
        assert_eq!(result.quartile, 4);
        assert_eq!(result.rmse, 115.52);
        assert!((result.interval_lower - 184.48).abs() < 1e-9);
        assert!((result.interval_upper - 415.52).abs() < 1e-9);
    }

    #[test]
    fn test_boundary_uses_higher_bucket_rmse() {
        let result = estimator().interval(102.0, Domain::Airbnb).unwrap();
        assert_eq!(result.quartile, 2);
        assert_eq!(result.rmse, 40.44);

        let below = estimator().interval(101.999, Domain::Airbnb).unwrap();
        assert_eq!(below.rmse, 40.20);
    }

    #[test]
    fn test_renting_quartiles() {
        let cases = [
            (400.0, 1, 30.29),
            (560.17, 2, 87.73),
            (1500.0, 3, 159.46),
            (2025.77, 4, 191.43),
        ];
        for (rent, quartile, rmse) in cases {
            let result = estimator().interval(rent, Domain::Renting).unwrap();
            assert_eq!(result.quartile, quartile, "rent {}", rent);
            assert_eq!(result.rmse, rmse, "rent {}", rent);
        }
    }

    #[test]
    fn test_zero_estimate_floors_lower_bound() {
        let result = estimator().interval(0.0, Domain::Airbnb).unwrap();
        assert_eq!(result.interval_lower, 0.0);
        assert_eq!(result.interval_upper, 40.20);
    }

    #[test]
    fn test_nan_estimate_surfaces_error() {
        assert!(matches!(
            estimator().interval(f64::NAN, Domain::Renting),
            Err(PricingError::OutOfRangeEstimate { domain: Domain::Renting, .. })
        ));
    }

    #[test]
    fn test_rejects_swapped_tables() {
        let swapped = QuartileIntervalEstimator::new(
            QuartileTable::renting_default(),
            QuartileTable::airbnb_default(),
        );
        assert!(matches!(swapped, Err(PricingError::InvalidQuartileTable(_))));
    }

    #[test]
    fn test_custom_tables() {
        let flat = QuartileTable::new(Domain::Airbnb, vec![QuartileBucket::new(None, None, 10.0)]).unwrap();
        let estimator = QuartileIntervalEstimator::new(flat, QuartileTable::renting_default()).unwrap();
        let result = estimator.interval(500.0, Domain::Airbnb).unwrap();
        assert_eq!((result.interval_lower, result.interval_upper), (490.0, 510.0));
    }
}
