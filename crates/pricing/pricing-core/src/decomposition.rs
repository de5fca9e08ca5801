//! Counterfactual price decomposition
//!
//! Three predictions of the Airbnb price model are combined:
//!
//! 1. a minimal baseline listing at the median arrondissement
//! 2. the caller's listing moved to the median arrondissement
//! 3. the caller's listing where it actually is
//!
//! Quality impact is (2) - (1), location impact is (3) - (2). Holding one
//! axis fixed while varying the other isolates its marginal effect, and the
//! terms sum to (3) by construction.

use crate::predictor::PricePredictor;
use pricing_spi::{
    Arrondissement, ModelKind, PriceDecomposer, PriceDecomposition, PropertyDescription, Result,
};
use std::sync::Arc;
use tracing::debug;

/// Arrondissement whose historical price distribution sits at the city median
pub const MEDIAN_ARRONDISSEMENT: u8 = 10;

/// Splits the nightly price into baseline, quality and location terms
#[derive(Debug, Clone)]
pub struct PriceDecompositionEngine {
    predictor: Arc<PricePredictor>,
    median: Arrondissement,
}

impl PriceDecompositionEngine {
    pub fn new(predictor: Arc<PricePredictor>, median: Arrondissement) -> Self {
        Self { predictor, median }
    }

    /// Reference location used for the baseline and quality terms
    pub fn median(&self) -> Arrondissement {
        self.median
    }

    /// Minimal listing compared against: one bedroom, one bathroom, no
    /// amenities, not a superhost, a single listing, at the median location
    ///
    /// Room type and identity verification are kept from `property`.
    pub fn baseline_property(&self, property: &PropertyDescription) -> PropertyDescription {
        let mut baseline = property.at(self.median);
        baseline.bedrooms = 1;
        baseline.bathrooms = 1;
        baseline.amenities.clear();
        baseline.host.is_superhost = false;
        baseline.host.listing_count = 1;
        baseline.host.response_rate = None;
        baseline
    }
}

impl PriceDecomposer for PriceDecompositionEngine {
    fn decompose(&self, property: &PropertyDescription) -> Result<PriceDecomposition> {
        let kind = ModelKind::AirbnbPrice;

        let baseline_price = self.predictor.predict(&self.baseline_property(property), kind)?;
        let quality_at_median = self.predictor.predict(&property.at(self.median), kind)?;
        let quality_at_user_location = self.predictor.predict(property, kind)?;

        let decomposition = PriceDecomposition::from_counterfactuals(
            baseline_price,
            quality_at_median,
            quality_at_user_location,
        );
        debug!(
            arrondissement = property.arrondissement.number(),
            baseline = decomposition.baseline_price,
            quality = decomposition.quality_impact,
            location = decomposition.location_impact,
            "price decomposition"
        );
        Ok(decomposition)
    }
}
