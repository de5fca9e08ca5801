//! Pricing Core
//!
//! Core implementations for Paris housing price prediction: feature
//! normalization, the model adapter, quartile intervals, counterfactual
//! decomposition, the arrondissement sweep and monthly revenue estimates.

pub mod amenity;
pub mod decomposition;
pub mod interval;
pub mod linear_model;
pub mod model_adapter;
pub mod normalizer;
pub mod predictor;
pub mod report;
pub mod revenue;
pub mod service;
pub mod sweep;

// Re-export SPI traits and models for implementations
pub use pricing_spi::{
    Arrondissement, ArrondissementPriceMap, Domain, FeatureSchema, FeatureVector, HostAttributes,
    IntervalEstimator, ModelKind, PredictionResult, PriceDecomposer, PriceDecomposition,
    PricingError, PropertyDescription, QuartileBucket, QuartileTable, Regressor, Result, RoomType,
    TargetTransform,
};

// Re-export main types
pub use amenity::{AmenityKey, AmenitySchema};
pub use decomposition::PriceDecompositionEngine;
pub use interval::QuartileIntervalEstimator;
pub use linear_model::LinearModel;
pub use model_adapter::ModelAdapter;
pub use normalizer::FeatureNormalizer;
pub use predictor::PricePredictor;
pub use report::{AirbnbReport, RentingReport};
pub use revenue::{MonthlyRevenue, RevenueEstimator, RevenueRange};
pub use service::{PricingService, PricingServiceBuilder};
pub use sweep::ArrondissementSweep;
