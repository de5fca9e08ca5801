//! Pricing Service Provider Interface
//!
//! Defines the contracts, data model and error type shared by every layer of
//! the Paris housing price engine:
//!
//! - [`Regressor`]: an opaque pre-trained model, `predict(features) -> price`
//! - [`IntervalEstimator`]: attaches an uncertainty band to a point estimate
//! - [`PriceDecomposer`]: splits a prediction into additive contribution terms
//! - [`PricingError`]: standardized error type for all pricing operations

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{IntervalEstimator, PriceDecomposer, Regressor};
pub use error::{PricingError, Result};
pub use model::{
    Arrondissement, ArrondissementPriceMap, Domain, FeatureSchema, FeatureVector, HostAttributes,
    ModelKind, PredictionResult, PriceDecomposition, PropertyDescription, QuartileBucket,
    QuartileTable, RoomType, TargetTransform,
};
