//! Trait for additive price attribution

use crate::error::Result;
use crate::model::{PriceDecomposition, PropertyDescription};

/// Splits a property's predicted price into contribution terms
pub trait PriceDecomposer: Send + Sync {
    /// Decompose the price of a property
    fn decompose(&self, property: &PropertyDescription) -> Result<PriceDecomposition>;
}
