//! JSON linear-model artifact
//!
//! A minimal serialized regressor: ordered feature names, one coefficient per
//! feature, an intercept and the training-target transform.
//!
//! ```json
//! {
//!   "feature_names": ["Bedroom", "Bathroom"],
//!   "coefficients": [12.5, 8.0],
//!   "intercept": 20.0,
//!   "target": "identity"
//! }
//! ```

use pricing_spi::{ModelKind, PricingError, Regressor, Result, TargetTransform};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LinearArtifact {
    feature_names: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
    #[serde(default)]
    target: TargetTransform,
}

/// Linear regressor `intercept + Σ coefficient·feature`
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    kind: ModelKind,
    feature_names: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
    target: TargetTransform,
}

impl LinearModel {
    pub fn new(
        kind: ModelKind,
        feature_names: Vec<String>,
        coefficients: Vec<f64>,
        intercept: f64,
        target: TargetTransform,
    ) -> Result<Self> {
        if feature_names.len() != coefficients.len() {
            return Err(PricingError::model_unavailable(
                kind,
                format!(
                    "{} feature names but {} coefficients",
                    feature_names.len(),
                    coefficients.len()
                ),
            ));
        }
        if !intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
            return Err(PricingError::model_unavailable(kind, "non-finite parameters"));
        }

        Ok(Self {
            kind,
            feature_names,
            coefficients,
            intercept,
            target,
        })
    }

    /// Parse an artifact from JSON text
    pub fn from_json_str(kind: ModelKind, json: &str) -> Result<Self> {
        let artifact: LinearArtifact = serde_json::from_str(json)
            .map_err(|e| PricingError::model_unavailable(kind, e.to_string()))?;
        Self::from_artifact(kind, artifact)
    }

    /// Load an artifact file; any failure is [`PricingError::ModelUnavailable`]
    pub fn load(kind: ModelKind, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            PricingError::model_unavailable(kind, format!("{}: {}", path.display(), e))
        })?;
        let artifact: LinearArtifact = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            PricingError::model_unavailable(kind, format!("{}: {}", path.display(), e))
        })?;

        let model = Self::from_artifact(kind, artifact)?;
        info!(model = %kind, path = %path.display(), features = model.feature_names.len(), "loaded model");
        Ok(model)
    }

    fn from_artifact(kind: ModelKind, artifact: LinearArtifact) -> Result<Self> {
        Self::new(
            kind,
            artifact.feature_names,
            artifact.coefficients,
            artifact.intercept,
            artifact.target,
        )
    }

    /// Serialize back to the artifact format
    pub fn to_json_string(&self) -> Result<String> {
        let artifact = LinearArtifact {
            feature_names: self.feature_names.clone(),
            coefficients: self.coefficients.clone(),
            intercept: self.intercept,
            target: self.target,
        };
        serde_json::to_string_pretty(&artifact)
            .map_err(|e| PricingError::model_unavailable(self.kind, e.to_string()))
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl Regressor for LinearModel {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.coefficients.len() {
            return Err(PricingError::schema_mismatch(
                self.kind,
                format!(
                    "expected {} features, got {}",
                    self.coefficients.len(),
                    features.len()
                ),
            ));
        }

        Ok(self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(c, x)| c * x)
                .sum::<f64>())
    }

    fn target(&self) -> TargetTransform {
        self.target
    }
}
