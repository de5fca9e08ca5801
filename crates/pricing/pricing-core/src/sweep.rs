//! Per-arrondissement price sweep

use crate::predictor::PricePredictor;
use pricing_spi::{Arrondissement, ArrondissementPriceMap, ModelKind, PropertyDescription, Result};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::debug;

/// Re-prices a property in every arrondissement, other features held fixed
#[derive(Debug, Clone)]
pub struct ArrondissementSweep {
    predictor: Arc<PricePredictor>,
    parallel: bool,
}

impl ArrondissementSweep {
    pub fn new(predictor: Arc<PricePredictor>) -> Self {
        Self {
            predictor,
            parallel: true,
        }
    }

    /// Run the per-zone predictions on the rayon pool or sequentially
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Nightly Airbnb price of the property in every arrondissement
    pub fn sweep(&self, property: &PropertyDescription) -> Result<ArrondissementPriceMap> {
        self.sweep_model(property, ModelKind::AirbnbPrice)
    }

    /// Price of the property in every arrondissement under any model
    pub fn sweep_model(
        &self,
        property: &PropertyDescription,
        kind: ModelKind,
    ) -> Result<ArrondissementPriceMap> {
        let zones: Vec<Arrondissement> = Arrondissement::all().collect();
        let price_in = |arrondissement: Arrondissement| -> Result<(Arrondissement, f64)> {
            let price = self.predictor.predict(&property.at(arrondissement), kind)?;
            Ok((arrondissement, price))
        };

        let prices = if self.parallel {
            zones
                .par_iter()
                .map(|&arrondissement| price_in(arrondissement))
                .collect::<Result<Vec<_>>>()?
        } else {
            zones
                .iter()
                .map(|&arrondissement| price_in(arrondissement))
                .collect::<Result<Vec<_>>>()?
        };

        let map: ArrondissementPriceMap = prices.into_iter().collect();
        debug!(model = %kind, zones = map.len(), parallel = self.parallel, "arrondissement sweep");
        Ok(map)
    }
}
