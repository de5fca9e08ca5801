//! Pricing API
//!
//! Consumer-facing configuration for the Paris pricing engine. A
//! [`PricingConfig`] names the model artifacts and calibration tables and
//! builds a ready [`PricingService`].

pub mod config;

// Re-export from core
pub use pricing_core::{
    AirbnbReport, AmenityKey, AmenitySchema, ArrondissementSweep, FeatureNormalizer, LinearModel,
    ModelAdapter, MonthlyRevenue, PriceDecompositionEngine, PricePredictor, PricingService,
    PricingServiceBuilder, QuartileIntervalEstimator, RentingReport, RevenueEstimator, RevenueRange,
};

// Re-export traits and models from SPI
pub use pricing_spi::{
    Arrondissement, ArrondissementPriceMap, Domain, FeatureSchema, FeatureVector, HostAttributes,
    IntervalEstimator, ModelKind, PredictionResult, PriceDecomposer, PriceDecomposition,
    PricingError, PropertyDescription, QuartileBucket, QuartileTable, Regressor, Result, RoomType,
    TargetTransform,
};

pub use config::{ModelPaths, PricingConfig, QuartileConfig, RevenueConfig, SweepConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{IntervalEstimator, PriceDecomposer, Regressor};
    // Configuration
    pub use crate::config::PricingConfig;
    // Service
    pub use crate::{AirbnbReport, PricingService, RentingReport};
    // Inputs and results
    pub use crate::{
        Arrondissement, ArrondissementPriceMap, Domain, HostAttributes, ModelKind,
        PredictionResult, PriceDecomposition, PropertyDescription, RoomType,
    };
    // Error types
    pub use crate::{PricingError, Result};
}
