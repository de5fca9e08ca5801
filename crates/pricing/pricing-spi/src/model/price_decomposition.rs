//! Additive attribution of a nightly price

use serde::{Deserialize, Serialize};

/// Price split into baseline, quality and location contributions
///
/// `final_price` is always `baseline_price + quality_impact + location_impact`
/// evaluated in that order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceDecomposition {
    /// Minimal listing at the median arrondissement
    pub baseline_price: f64,
    /// Caller's listing at the median arrondissement minus the baseline
    pub quality_impact: f64,
    /// Caller's listing at its own location minus the median-location price
    pub location_impact: f64,
    pub final_price: f64,
    /// Caller's listing priced at the median arrondissement
    pub median_location_price: f64,
}

impl PriceDecomposition {
    /// Build from the three counterfactual predictions
    pub fn from_counterfactuals(
        baseline_price: f64,
        quality_at_median: f64,
        quality_at_user_location: f64,
    ) -> Self {
        let quality_impact = quality_at_median - baseline_price;
        let location_impact = quality_at_user_location - quality_at_median;
        Self {
            baseline_price,
            quality_impact,
            location_impact,
            final_price: baseline_price + quality_impact + location_impact,
            median_location_price: quality_at_median,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_scenario() {
        let decomposition = PriceDecomposition::from_counterfactuals(60.0, 95.0, 110.0);
        assert_eq!(decomposition.quality_impact, 35.0);
        assert_eq!(decomposition.location_impact, 15.0);
        assert_eq!(decomposition.final_price, 110.0);
        assert_eq!(decomposition.median_location_price, 95.0);
    }

    #[test]
    fn test_negative_location_impact() {
        let decomposition = PriceDecomposition::from_counterfactuals(60.0, 95.0, 80.0);
        assert_eq!(decomposition.location_impact, -15.0);
        assert_eq!(
            decomposition.final_price,
            decomposition.baseline_price + decomposition.quality_impact + decomposition.location_impact
        );
    }
}
