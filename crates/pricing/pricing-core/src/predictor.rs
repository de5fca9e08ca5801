//! Normalizer + adapter path shared by every prediction

use crate::amenity::AmenitySchema;
use crate::model_adapter::ModelAdapter;
use crate::normalizer::FeatureNormalizer;
use pricing_spi::{FeatureVector, ModelKind, PricingError, PropertyDescription, Result};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Encodes properties and runs them through the matching regressor
#[derive(Debug)]
pub struct PricePredictor {
    adapter: Arc<ModelAdapter>,
    normalizers: BTreeMap<ModelKind, FeatureNormalizer>,
}

impl PricePredictor {
    /// Compile a normalizer for every model the adapter holds
    pub fn new(adapter: Arc<ModelAdapter>) -> Result<Self> {
        let normalizers = adapter
            .kinds()
            .map(|kind| -> Result<(ModelKind, FeatureNormalizer)> {
                Ok((kind, FeatureNormalizer::new(adapter.schema(kind)?)?))
            })
            .collect::<Result<BTreeMap<_, _>>>()?;
        Ok(Self {
            adapter,
            normalizers,
        })
    }

    /// Replace the amenity schema used for one model
    pub fn with_amenity_schema(mut self, kind: ModelKind, amenities: AmenitySchema) -> Result<Self> {
        let schema = self.adapter.schema(kind)?;
        self.normalizers
            .insert(kind, FeatureNormalizer::with_amenity_schema(schema, amenities)?);
        Ok(self)
    }

    pub fn adapter(&self) -> &ModelAdapter {
        &self.adapter
    }

    pub fn normalizer(&self, kind: ModelKind) -> Result<&FeatureNormalizer> {
        self.normalizers
            .get(&kind)
            .ok_or_else(|| PricingError::model_unavailable(kind, "not loaded"))
    }

    /// Feature vector a model would see for this property
    pub fn encode(&self, property: &PropertyDescription, kind: ModelKind) -> Result<FeatureVector> {
        self.normalizer(kind)?.normalize(property)
    }

    /// Predicted price of a property under one model
    pub fn predict(&self, property: &PropertyDescription, kind: ModelKind) -> Result<f64> {
        let vector = self.encode(property, kind)?;
        self.adapter.predict(&vector, kind)
    }
}
