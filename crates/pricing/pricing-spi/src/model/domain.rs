//! Pricing domains and model kinds

use serde::{Deserialize, Serialize};
use std::fmt;

/// Market a price belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// Short-term nightly rental
    Airbnb,
    /// Long-term monthly rent
    Renting,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Airbnb => write!(f, "airbnb"),
            Domain::Renting => write!(f, "renting"),
        }
    }
}

/// One of the three pre-trained regressors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    /// Nightly Airbnb price
    AirbnbPrice,
    /// Fee charged per cleaning
    CleaningFee,
    /// Monthly long-term rent
    Rent,
}

impl ModelKind {
    /// All model kinds, in registration order
    pub const ALL: [ModelKind; 3] = [ModelKind::AirbnbPrice, ModelKind::CleaningFee, ModelKind::Rent];

    /// Domain whose quartile table bounds this model's output
    pub fn domain(self) -> Domain {
        match self {
            ModelKind::AirbnbPrice | ModelKind::CleaningFee => Domain::Airbnb,
            ModelKind::Rent => Domain::Renting,
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::AirbnbPrice => write!(f, "airbnb_price"),
            ModelKind::CleaningFee => write!(f, "cleaning_fee"),
            ModelKind::Rent => write!(f, "rent"),
        }
    }
}

/// Transform applied to the price before the model was trained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetTransform {
    /// Model predicts the price directly
    #[default]
    Identity,
    /// Model predicts `ln(1 + price)`
    Log1p,
}

impl TargetTransform {
    /// Map a raw model output back to a price
    pub fn invert(self, raw: f64) -> f64 {
        match self {
            TargetTransform::Identity => raw,
            TargetTransform::Log1p => raw.exp_m1(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_kind_domains() {
        assert_eq!(ModelKind::AirbnbPrice.domain(), Domain::Airbnb);
        assert_eq!(ModelKind::CleaningFee.domain(), Domain::Airbnb);
        assert_eq!(ModelKind::Rent.domain(), Domain::Renting);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Domain::Airbnb.to_string(), "airbnb");
        assert_eq!(Domain::Renting.to_string(), "renting");
        assert_eq!(ModelKind::AirbnbPrice.to_string(), "airbnb_price");
        assert_eq!(ModelKind::CleaningFee.to_string(), "cleaning_fee");
        assert_eq!(ModelKind::Rent.to_string(), "rent");
    }

    #[test]
    fn test_log1p_inverse() {
        let price: f64 = 130.0;
        let raw = price.ln_1p();
        assert!((TargetTransform::Log1p.invert(raw) - price).abs() < 1e-9);
        assert_eq!(TargetTransform::Identity.invert(42.5), 42.5);
    }
}
