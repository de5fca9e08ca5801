//! Ordered feature schema of a trained model

use super::ModelKind;
use crate::error::{PricingError, Result};
use std::collections::HashMap;

/// Ordered column names a regressor was trained on
///
/// Column order is significant: a [`FeatureVector`](super::FeatureVector)
/// stores its values positionally against this list.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSchema {
    model: ModelKind,
    columns: Vec<String>,
    index: HashMap<String, usize>,
}

impl FeatureSchema {
    /// Build a schema, rejecting empty or duplicated column lists
    pub fn new(model: ModelKind, columns: Vec<String>) -> Result<Self> {
        if columns.is_empty() {
            return Err(PricingError::schema_mismatch(model, "schema has no columns"));
        }

        let mut index = HashMap::with_capacity(columns.len());
        for (position, column) in columns.iter().enumerate() {
            if index.insert(column.clone(), position).is_some() {
                return Err(PricingError::schema_mismatch(
                    model,
                    format!("duplicate column '{}'", column),
                ));
            }
        }

        Ok(Self {
            model,
            columns,
            index,
        })
    }

    /// Model this schema belongs to
    pub fn model(&self) -> ModelKind {
        self.model
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position of a column, if the schema has it
    pub fn position(&self, column: &str) -> Option<usize> {
        self.index.get(column).copied()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.index.contains_key(column)
    }

    /// Check that `expected` lists exactly these columns in the same order
    pub fn ensure_matches(&self, expected: &[String]) -> Result<()> {
        if self.columns.len() != expected.len() {
            return Err(PricingError::schema_mismatch(
                self.model,
                format!(
                    "expected {} features, got {}",
                    expected.len(),
                    self.columns.len()
                ),
            ));
        }

        match self
            .columns
            .iter()
            .zip(expected)
            .position(|(actual, wanted)| actual != wanted)
        {
            Some(position) => Err(PricingError::schema_mismatch(
                self.model,
                format!(
                    "feature {} is '{}', model expects '{}'",
                    position, self.columns[position], expected[position]
                ),
            )),
            None => Ok(()),
        }
    }
}
