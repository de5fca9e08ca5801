//! Pricing error types

use crate::model::{Domain, ModelKind};
use thiserror::Error;

/// Result type alias for pricing operations
pub type Result<T> = std::result::Result<T, PricingError>;

/// Errors that can occur while predicting, bounding or decomposing prices
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Feature vector shape or column order disagrees with the trained model
    #[error("Schema mismatch for {model} model: {reason}")]
    SchemaMismatch { model: ModelKind, reason: String },

    /// Backing model failed to load or was never registered
    #[error("Model unavailable: {model} ({reason})")]
    ModelUnavailable { model: ModelKind, reason: String },

    /// Amenity label not present in the known amenity schema
    #[error("Unrecognized amenity: {0}")]
    UnrecognizedAmenity(String),

    /// Estimate fell outside every quartile bucket
    #[error("Estimate {estimate} is outside every {domain} quartile bucket")]
    OutOfRangeEstimate { domain: Domain, estimate: f64 },

    /// Quartile buckets do not partition the price axis
    #[error("Invalid quartile table: {0}")]
    InvalidQuartileTable(String),

    /// Arrondissement number outside 1..=20
    #[error("Invalid arrondissement: {0} (expected 1..=20)")]
    InvalidArrondissement(u8),

    /// Property description field holds an unusable value
    #[error("Invalid property field '{field}': {reason}")]
    InvalidProperty { field: String, reason: String },

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PricingError {
    /// Shorthand for a [`PricingError::SchemaMismatch`]
    pub fn schema_mismatch(model: ModelKind, reason: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            model,
            reason: reason.into(),
        }
    }

    /// Shorthand for a [`PricingError::ModelUnavailable`]
    pub fn model_unavailable(model: ModelKind, reason: impl Into<String>) -> Self {
        Self::ModelUnavailable {
            model,
            reason: reason.into(),
        }
    }

    /// Whether the error marks a configuration or programming bug rather than bad input
    pub fn is_configuration_bug(&self) -> bool {
        matches!(
            self,
            Self::SchemaMismatch { .. }
                | Self::ModelUnavailable { .. }
                | Self::OutOfRangeEstimate { .. }
                | Self::InvalidQuartileTable(_)
                | Self::Config(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_schema_mismatch_error_message() {
        let error = PricingError::schema_mismatch(ModelKind::AirbnbPrice, "expected 3 values, got 2");
        assert_eq!(
            error.to_string(),
            "Schema mismatch for airbnb_price model: expected 3 values, got 2"
        );
    }

    #[test]
    fn test_model_unavailable_error_message() {
        let error = PricingError::model_unavailable(ModelKind::Rent, "file not found");
        assert_eq!(error.to_string(), "Model unavailable: rent (file not found)");
    }

    #[test]
    fn test_unrecognized_amenity_error_message() {
        let error = PricingError::UnrecognizedAmenity("Jacuzzi".to_string());
        assert_eq!(error.to_string(), "Unrecognized amenity: Jacuzzi");
    }

    #[test]
    fn test_out_of_range_error_fields() {
        let error = PricingError::OutOfRangeEstimate {
            domain: Domain::Renting,
            estimate: f64::NAN,
        };
        if let PricingError::OutOfRangeEstimate { domain, estimate } = &error {
            assert_eq!(*domain, Domain::Renting);
            assert!(estimate.is_nan());
        } else {
            panic!("Expected OutOfRangeEstimate variant");
        }
        assert!(error.to_string().contains("renting"));
    }

    #[test]
    fn test_invalid_arrondissement_error_message() {
        let error = PricingError::InvalidArrondissement(21);
        assert_eq!(
            error.to_string(),
            "Invalid arrondissement: 21 (expected 1..=20)"
        );
    }

    #[test]
    fn test_invalid_property_error_message() {
        let error = PricingError::InvalidProperty {
            field: "host.response_rate".to_string(),
            reason: "must be within [0, 1]".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid property field 'host.response_rate': must be within [0, 1]"
        );
    }

    #[test]
    fn test_configuration_bug_classification() {
        assert!(PricingError::schema_mismatch(ModelKind::CleaningFee, "x").is_configuration_bug());
        assert!(PricingError::InvalidQuartileTable("gap".into()).is_configuration_bug());
        assert!(!PricingError::UnrecognizedAmenity("Sauna".into()).is_configuration_bug());
        assert!(!PricingError::InvalidArrondissement(0).is_configuration_bug());
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn Error> = Box::new(PricingError::Config("missing".into()));
        assert!(error.source().is_none());
    }

    #[test]
    fn test_all_variants_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PricingError>();
    }
}
