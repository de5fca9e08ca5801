//! Uniform access to the pre-trained regressors
//!
//! The adapter owns one [`Regressor`] per [`ModelKind`], checks every
//! incoming [`FeatureVector`] against the schema the model was trained on,
//! and maps the raw output back to a non-negative price.

use crate::linear_model::LinearModel;
use pricing_spi::{FeatureSchema, FeatureVector, ModelKind, PricingError, Regressor, Result};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

struct LoadedModel {
    regressor: Arc<dyn Regressor>,
    schema: Arc<FeatureSchema>,
}

/// Read-only registry of loaded regressors
#[derive(Default)]
pub struct ModelAdapter {
    models: BTreeMap<ModelKind, LoadedModel>,
}

impl ModelAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the linear artifacts for every listed kind
    ///
    /// Fails on the first artifact that cannot be loaded; a service must not
    /// start with a missing model.
    pub fn load<I, P>(artifacts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (ModelKind, P)>,
        P: AsRef<Path>,
    {
        let mut adapter = Self::new();
        for (kind, path) in artifacts {
            adapter.register(kind, Arc::new(LinearModel::load(kind, path)?))?;
        }
        Ok(adapter)
    }

    /// Builder-style [`ModelAdapter::register`]
    pub fn with_model(mut self, kind: ModelKind, regressor: Arc<dyn Regressor>) -> Result<Self> {
        self.register(kind, regressor)?;
        Ok(self)
    }

    /// Register a regressor for a kind, replacing any previous one
    pub fn register(&mut self, kind: ModelKind, regressor: Arc<dyn Regressor>) -> Result<()> {
        let schema = Arc::new(FeatureSchema::new(kind, regressor.feature_names().to_vec())?);
        self.models.insert(kind, LoadedModel { regressor, schema });
        Ok(())
    }

    /// Kinds with a registered regressor
    pub fn kinds(&self) -> impl Iterator<Item = ModelKind> + '_ {
        self.models.keys().copied()
    }

    pub fn contains(&self, kind: ModelKind) -> bool {
        self.models.contains_key(&kind)
    }

    /// Feature schema a kind's regressor was trained on
    pub fn schema(&self, kind: ModelKind) -> Result<Arc<FeatureSchema>> {
        self.model(kind).map(|model| Arc::clone(&model.schema))
    }

    /// Predict a non-negative price for a vector laid out as the model expects
    pub fn predict(&self, vector: &FeatureVector, kind: ModelKind) -> Result<f64> {
        let model = self.model(kind)?;

        if !Arc::ptr_eq(vector.schema(), &model.schema) {
            vector
                .schema()
                .ensure_matches(model.schema.columns())
                .map_err(|error| match error {
                    PricingError::SchemaMismatch { reason, .. } => {
                        PricingError::schema_mismatch(kind, reason)
                    }
                    other => other,
                })?;
        }

        let raw = model.regressor.predict(vector.values())?;
        let price = model.regressor.target().invert(raw);
        if !price.is_finite() {
            return Err(PricingError::OutOfRangeEstimate {
                domain: kind.domain(),
                estimate: price,
            });
        }

        let price = price.max(0.0);
        debug!(model = %kind, raw, price, "model prediction");
        Ok(price)
    }

    fn model(&self, kind: ModelKind) -> Result<&LoadedModel> {
        self.models
            .get(&kind)
            .ok_or_else(|| PricingError::model_unavailable(kind, "not loaded"))
    }
}

impl std::fmt::Debug for ModelAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelAdapter")
            .field("models", &self.models.keys().collect::<Vec<_>>())
            .finish()
    }
}
