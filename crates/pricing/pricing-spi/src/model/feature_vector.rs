//! Fixed-schema numeric feature vector

use super::FeatureSchema;
use crate::error::{PricingError, Result};
use std::sync::Arc;

/// Numeric record laid out positionally against a [`FeatureSchema`]
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    schema: Arc<FeatureSchema>,
    values: Vec<f64>,
}

impl FeatureVector {
    /// All-zero vector for the schema
    pub fn zeros(schema: Arc<FeatureSchema>) -> Self {
        let values = vec![0.0; schema.len()];
        Self { schema, values }
    }

    /// Wrap raw values, which must have one entry per schema column
    pub fn from_values(schema: Arc<FeatureSchema>, values: Vec<f64>) -> Result<Self> {
        if values.len() != schema.len() {
            return Err(PricingError::schema_mismatch(
                schema.model(),
                format!("expected {} values, got {}", schema.len(), values.len()),
            ));
        }
        Ok(Self { schema, values })
    }

    pub fn schema(&self) -> &Arc<FeatureSchema> {
        &self.schema
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of a named column
    pub fn get(&self, column: &str) -> Option<f64> {
        self.schema.position(column).map(|position| self.values[position])
    }

    /// Set a named column; unknown columns are a schema mismatch
    pub fn set(&mut self, column: &str, value: f64) -> Result<()> {
        let position = self.schema.position(column).ok_or_else(|| {
            PricingError::schema_mismatch(self.schema.model(), format!("no column '{}'", column))
        })?;
        self.values[position] = value;
        Ok(())
    }

    /// Set a column by position
    ///
    /// # Panics
    ///
    /// Panics if `position` is outside the schema.
    pub fn set_at(&mut self, position: usize, value: f64) {
        self.values[position] = value;
    }

    /// Column names paired with their values
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.schema
            .columns()
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelKind;

    fn schema() -> Arc<FeatureSchema> {
        Arc::new(
            FeatureSchema::new(
                ModelKind::CleaningFee,
                vec!["Bedroom".to_string(), "Bathroom".to_string()],
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_zeros_and_set() {
        let mut vector = FeatureVector::zeros(schema());
        assert_eq!(vector.values(), &[0.0, 0.0]);

        vector.set("Bathroom", 2.0).unwrap();
        assert_eq!(vector.get("Bathroom"), Some(2.0));
        assert_eq!(vector.values(), &[0.0, 2.0]);
    }

    #[test]
    fn test_set_unknown_column_fails() {
        let mut vector = FeatureVector::zeros(schema());
        let error = vector.set("Sauna", 1.0).unwrap_err();
        assert!(matches!(error, PricingError::SchemaMismatch { model: ModelKind::CleaningFee, .. }));
    }

    #[test]
    fn test_from_values_checks_length() {
        assert!(FeatureVector::from_values(schema(), vec![1.0, 1.0]).is_ok());
        assert!(FeatureVector::from_values(schema(), vec![1.0]).is_err());
    }

    #[test]
    fn test_iter_pairs_names_and_values() {
        let vector = FeatureVector::from_values(schema(), vec![3.0, 1.0]).unwrap();
        let pairs: Vec<_> = vector.iter().collect();
        assert_eq!(pairs, vec![("Bedroom", 3.0), ("Bathroom", 1.0)]);
    }
}
