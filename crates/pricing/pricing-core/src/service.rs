//! Composed pricing service
//!
//! Wires the predictor, interval estimator, decomposition engine, sweep and
//! revenue estimator behind one stateless entry point. Every operation is a
//! pure function of its input and the immutable loaded state, so a single
//! service can be shared across threads.

use crate::amenity::AmenitySchema;
use crate::decomposition::{PriceDecompositionEngine, MEDIAN_ARRONDISSEMENT};
use crate::interval::QuartileIntervalEstimator;
use crate::model_adapter::ModelAdapter;
use crate::predictor::PricePredictor;
use crate::report::{AirbnbReport, RentingReport};
use crate::revenue::{MonthlyRevenue, RevenueEstimator};
use crate::sweep::ArrondissementSweep;
use pricing_spi::{
    Arrondissement, ArrondissementPriceMap, Domain, IntervalEstimator, ModelKind,
    PredictionResult, PriceDecomposer, PriceDecomposition, PricingError, PropertyDescription,
    Result,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Model that produces the headline price of a domain
fn price_model(domain: Domain) -> ModelKind {
    match domain {
        Domain::Airbnb => ModelKind::AirbnbPrice,
        Domain::Renting => ModelKind::Rent,
    }
}

/// Stateless entry point for all pricing operations
#[derive(Debug, Clone)]
pub struct PricingService {
    predictor: Arc<PricePredictor>,
    intervals: QuartileIntervalEstimator,
    decomposer: PriceDecompositionEngine,
    sweep: ArrondissementSweep,
    revenue: RevenueEstimator,
}

impl PricingService {
    pub fn builder(adapter: ModelAdapter) -> PricingServiceBuilder {
        PricingServiceBuilder::new(adapter)
    }

    pub fn predictor(&self) -> &PricePredictor {
        &self.predictor
    }

    pub fn intervals(&self) -> &QuartileIntervalEstimator {
        &self.intervals
    }

    pub fn median_arrondissement(&self) -> Arrondissement {
        self.decomposer.median()
    }

    /// Headline price of a property with its quartile interval
    pub fn predict(&self, property: &PropertyDescription, domain: Domain) -> Result<PredictionResult> {
        self.warn_unrecognized(property, price_model(domain))?;
        self.interval_for(property, domain)
    }

    /// Fee charged per cleaning
    pub fn cleaning_fee(&self, property: &PropertyDescription) -> Result<f64> {
        self.predictor.predict(property, ModelKind::CleaningFee)
    }

    /// Baseline / quality / location split of the nightly price
    pub fn decompose(&self, property: &PropertyDescription) -> Result<PriceDecomposition> {
        self.warn_unrecognized(property, ModelKind::AirbnbPrice)?;
        self.decomposer.decompose(property)
    }

    /// Nightly price in every arrondissement
    pub fn sweep(&self, property: &PropertyDescription) -> Result<ArrondissementPriceMap> {
        self.sweep_model(property, ModelKind::AirbnbPrice)
    }

    /// Any loaded model's prediction in every arrondissement
    pub fn sweep_model(
        &self,
        property: &PropertyDescription,
        kind: ModelKind,
    ) -> Result<ArrondissementPriceMap> {
        self.warn_unrecognized(property, kind)?;
        self.sweep.sweep_model(property, kind)
    }

    /// Selected amenity labels a model has no column for
    ///
    /// Empty for models without amenity columns.
    pub fn unrecognized_amenities(
        &self,
        property: &PropertyDescription,
        kind: ModelKind,
    ) -> Result<Vec<String>> {
        let normalizer = self.predictor.normalizer(kind)?;
        if normalizer.amenity_schema().is_empty() {
            return Ok(Vec::new());
        }
        Ok(normalizer.unrecognized_amenities(property))
    }

    fn warn_unrecognized(&self, property: &PropertyDescription, kind: ModelKind) -> Result<()> {
        let dropped = self.unrecognized_amenities(property, kind)?;
        if !dropped.is_empty() {
            warn!(model = %kind, ?dropped, "ignoring unrecognized amenities");
        }
        Ok(())
    }

    fn interval_for(&self, property: &PropertyDescription, domain: Domain) -> Result<PredictionResult> {
        let point = self.predictor.predict(property, price_model(domain))?;
        self.intervals.interval(point, domain)
    }

    /// Monthly figures for a nightly price and cleaning fee
    pub fn monthly_revenue(
        &self,
        nightly_price: f64,
        cleaning_fee: f64,
        arrondissement: Arrondissement,
    ) -> MonthlyRevenue {
        self.revenue.estimate(nightly_price, cleaning_fee, arrondissement)
    }

    pub fn city_median_occupancy(&self) -> Option<f64> {
        self.revenue.city_median_occupancy()
    }

    /// Nightly price, cleaning fee, decomposition and monthly revenue
    pub fn airbnb_report(&self, property: &PropertyDescription) -> Result<AirbnbReport> {
        self.warn_unrecognized(property, ModelKind::AirbnbPrice)?;
        let nightly = self.interval_for(property, Domain::Airbnb)?;
        let cleaning_fee = self.cleaning_fee(property)?;
        let decomposition = self.decomposer.decompose(property)?;
        let revenue = self
            .revenue
            .estimate(nightly.point_estimate, cleaning_fee, property.arrondissement);
        let revenue_range = self
            .revenue
            .estimate_range(&nightly, cleaning_fee, property.arrondissement);

        Ok(AirbnbReport {
            nightly,
            cleaning_fee,
            decomposition,
            revenue,
            revenue_range,
        })
    }

    /// Monthly rent with its interval
    pub fn renting_report(&self, property: &PropertyDescription) -> Result<RentingReport> {
        Ok(RentingReport {
            monthly_rent: self.predict(property, Domain::Renting)?,
            main_rooms: property.main_rooms(),
            furnished: property.furnished,
        })
    }
}

/// Builder for [`PricingService`]
pub struct PricingServiceBuilder {
    adapter: ModelAdapter,
    intervals: QuartileIntervalEstimator,
    median: Option<Arrondissement>,
    revenue: RevenueEstimator,
    amenities: Option<AmenitySchema>,
    parallel_sweep: bool,
}

impl PricingServiceBuilder {
    pub fn new(adapter: ModelAdapter) -> Self {
        Self {
            adapter,
            intervals: QuartileIntervalEstimator::default(),
            median: None,
            revenue: RevenueEstimator::default(),
            amenities: None,
            parallel_sweep: true,
        }
    }

    pub fn intervals(mut self, intervals: QuartileIntervalEstimator) -> Self {
        self.intervals = intervals;
        self
    }

    pub fn median_arrondissement(mut self, median: Arrondissement) -> Self {
        self.median = Some(median);
        self
    }

    pub fn revenue(mut self, revenue: RevenueEstimator) -> Self {
        self.revenue = revenue;
        self
    }

    /// Amenity schema for the Airbnb price model instead of its `amenity__*` columns
    pub fn amenity_schema(mut self, amenities: AmenitySchema) -> Self {
        self.amenities = Some(amenities);
        self
    }

    pub fn parallel_sweep(mut self, parallel: bool) -> Self {
        self.parallel_sweep = parallel;
        self
    }

    /// Build a service; all three models must be loaded
    pub fn build(self) -> Result<PricingService> {
        if let Some(&missing) = ModelKind::ALL.iter().find(|&&kind| !self.adapter.contains(kind)) {
            return Err(PricingError::model_unavailable(missing, "required at startup"));
        }
        self.build_partial()
    }

    /// Build a service around whichever models are loaded
    ///
    /// Requests needing an absent model fail with
    /// [`PricingError::ModelUnavailable`].
    pub fn build_partial(self) -> Result<PricingService> {
        let median = match self.median {
            Some(median) => median,
            None => Arrondissement::new(MEDIAN_ARRONDISSEMENT)?,
        };

        let mut predictor = PricePredictor::new(Arc::new(self.adapter))?;
        if let Some(amenities) = self.amenities {
            predictor = predictor.with_amenity_schema(ModelKind::AirbnbPrice, amenities)?;
        }
        let predictor = Arc::new(predictor);

        info!(
            models = ?predictor.adapter().kinds().collect::<Vec<_>>(),
            median = median.number(),
            parallel_sweep = self.parallel_sweep,
            "pricing service ready"
        );

        Ok(PricingService {
            decomposer: PriceDecompositionEngine::new(Arc::clone(&predictor), median),
            sweep: ArrondissementSweep::new(Arc::clone(&predictor)).parallel(self.parallel_sweep),
            predictor,
            intervals: self.intervals,
            revenue: self.revenue,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear_model::LinearModel;
    use crate::normalizer::{FURNISHED_COLUMN, MAIN_ROOMS_COLUMN, UNFURNISHED_COLUMN};
    use pricing_spi::TargetTransform;

    fn linear(kind: ModelKind, columns: Vec<(String, f64)>, intercept: f64) -> Arc<LinearModel> {
        let (names, coefficients) = columns.into_iter().unzip();
        Arc::new(LinearModel::new(kind, names, coefficients, intercept, TargetTransform::Identity).unwrap())
    }

    fn with_locations(mut columns: Vec<(String, f64)>, step: f64) -> Vec<(String, f64)> {
        for arrondissement in Arrondissement::all() {
            columns.push((arrondissement.column_name(), f64::from(arrondissement.number()) * step));
        }
        columns
    }

    fn adapter() -> ModelAdapter {
        let airbnb = linear(
            ModelKind::AirbnbPrice,
            with_locations(vec![("bedrooms".to_string(), 30.0), ("amenity__wifi".to_string(), 5.0)], 2.0),
            50.0,
        );
        let cleaning = linear(
            ModelKind::CleaningFee,
            vec![("Bedroom".to_string(), 10.0), ("Bathroom".to_string(), 5.0)],
            20.0,
        );
        let rent = linear(
            ModelKind::Rent,
            with_locations(
                vec![
                    (MAIN_ROOMS_COLUMN.to_string(), 400.0),
                    (FURNISHED_COLUMN.to_string(), 150.0),
                    (UNFURNISHED_COLUMN.to_string(), 0.0),
                ],
                10.0,
            ),
            300.0,
        );
        ModelAdapter::new()
            .with_model(ModelKind::AirbnbPrice, airbnb)
            .unwrap()
            .with_model(ModelKind::CleaningFee, cleaning)
            .unwrap()
            .with_model(ModelKind::Rent, rent)
            .unwrap()
    }

    fn service() -> PricingService {
        PricingService::builder(adapter()).parallel_sweep(false).build().unwrap()
    }

    fn property() -> PropertyDescription {
        PropertyDescription::new(Arrondissement::new(11).unwrap())
            .with_bedrooms(2)
            .with_bathrooms(1)
            .with_amenity("Wifi")
    }

    #[test]
    fn test_predict_airbnb_interval() {
        // 50 + 60 + 5 + 22
        let result = service().predict(&property(), Domain::Airbnb).unwrap();
        assert_eq!(result.point_estimate, 137.0);
        assert_eq!(result.quartile, 2);
        assert_eq!(result.rmse, 40.44);
    }

    #[test]
    fn test_predict_renting_interval() {
        // 300 + 3 * 400 + 110
        let result = service()
            .predict(&property().with_furnished(true), Domain::Renting)
            .unwrap();
        assert_eq!(result.point_estimate, 1760.0);
        assert_eq!(result.quartile, 3);
        assert_eq!(result.rmse, 159.46);
    }

    #[test]
    fn test_cleaning_fee() {
        assert_eq!(service().cleaning_fee(&property()).unwrap(), 45.0);
    }

    #[test]
    fn test_default_median() {
        assert_eq!(service().median_arrondissement().number(), MEDIAN_ARRONDISSEMENT);
        let custom = PricingService::builder(adapter())
            .median_arrondissement(Arrondissement::new(15).unwrap())
            .build()
            .unwrap();
        assert_eq!(custom.decompose(&property()).unwrap().location_impact, -8.0);
    }

    #[test]
    fn test_sweep_domains() {
        let service = service();
        let nightly = service.sweep(&property()).unwrap();
        let rent = service.sweep_model(&property(), ModelKind::Rent).unwrap();
        assert!(nightly.is_complete());
        assert!(rent.is_complete());
        assert_eq!(nightly.get(Arrondissement::new(11).unwrap()), Some(137.0));
        assert_eq!(rent.get(Arrondissement::new(1).unwrap()), Some(1510.0));
    }

    #[test]
    fn test_airbnb_report() {
        let report = service().airbnb_report(&property()).unwrap();
        assert_eq!(report.nightly.point_estimate, report.decomposition.final_price);
        assert_eq!(report.cleaning_fee, 45.0);
        assert_eq!(report.revenue.occupancy, 0.5);
        assert!((report.revenue.gross_revenue - 137.0 * 15.0).abs() < 1e-9);
        assert!(report.revenue_range.low.net_income <= report.revenue.net_income);
        assert!(report.revenue.net_income <= report.revenue_range.high.net_income);
    }

    #[test]
    fn test_renting_report() {
        let report = service().renting_report(&property().with_rooms(2)).unwrap();
        assert_eq!(report.main_rooms, 2);
        assert!(!report.furnished);
        // 300 + 800 + 110
        assert_eq!(report.monthly_rent.point_estimate, 1210.0);
    }

    #[test]
    fn test_build_requires_all_models() {
        let airbnb = linear(ModelKind::AirbnbPrice, vec![("bedrooms".to_string(), 30.0)], 50.0);
        let adapter = ModelAdapter::new().with_model(ModelKind::AirbnbPrice, airbnb).unwrap();
        assert!(matches!(
            PricingService::builder(adapter).build(),
            Err(PricingError::ModelUnavailable { model: ModelKind::CleaningFee, .. })
        ));
    }

    #[test]
    fn test_partial_service_fails_per_request() {
        let airbnb = linear(ModelKind::AirbnbPrice, vec![("bedrooms".to_string(), 30.0)], 50.0);
        let adapter = ModelAdapter::new().with_model(ModelKind::AirbnbPrice, airbnb).unwrap();
        let service = PricingService::builder(adapter).build_partial().unwrap();
        assert!(service.predict(&property(), Domain::Airbnb).is_ok());
        assert!(matches!(
            service.airbnb_report(&property()),
            Err(PricingError::ModelUnavailable { model: ModelKind::CleaningFee, .. })
        ));
    }

    #[test]
    fn test_unrecognized_amenities_per_model() {
        let service = service();
        let property = property().with_amenity("Sauna");
        assert_eq!(
            service.unrecognized_amenities(&property, ModelKind::AirbnbPrice).unwrap(),
            vec!["Sauna".to_string()]
        );
        assert!(service
            .unrecognized_amenities(&property, ModelKind::Rent)
            .unwrap()
            .is_empty());
        assert_eq!(service.predict(&property, Domain::Airbnb).unwrap().point_estimate, 137.0);
    }

    #[test]
    fn test_huge_room_count_does_not_overflow() {
        let property = PropertyDescription::new(Arrondissement::new(11).unwrap())
            .with_bedrooms(u32::MAX)
            .with_bathrooms(1);
        let report = service().renting_report(&property).unwrap();
        assert_eq!(report.main_rooms, u32::MAX);
        assert!(report.monthly_rent.point_estimate.is_finite());
        assert_eq!(report.monthly_rent.quartile, 4);
    }
}
