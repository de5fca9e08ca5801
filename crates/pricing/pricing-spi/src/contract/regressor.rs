//! Opaque pre-trained regressor contract

use crate::error::Result;
use crate::model::TargetTransform;

/// A pre-trained regression model treated as a black box
///
/// Implementations are loaded once and shared read-only across requests,
/// hence the `Send + Sync` bound.
///
/// # Example
///
/// ```rust,ignore
/// use pricing_spi::Regressor;
///
/// fn price<R: Regressor>(model: &R, features: &[f64]) -> pricing_spi::Result<f64> {
///     let raw = model.predict(features)?;
///     Ok(model.target().invert(raw))
/// }
/// ```
pub trait Regressor: Send + Sync {
    /// Ordered feature names the model was trained on
    fn feature_names(&self) -> &[String];

    /// Raw model output for one row laid out as [`Regressor::feature_names`]
    fn predict(&self, features: &[f64]) -> Result<f64>;

    /// Transform the training target went through
    fn target(&self) -> TargetTransform {
        TargetTransform::Identity
    }
}
