//! Property-to-feature-vector normalization
//!
//! A [`FeatureNormalizer`] is compiled once from a model's ordered feature
//! names. Every column must be one the normalizer knows how to fill; the
//! amenity flags are filled through an [`AmenitySchema`].

use crate::amenity::{AmenitySchema, AMENITY_PREFIX};
use pricing_spi::{
    Arrondissement, FeatureSchema, FeatureVector, ModelKind, PricingError, PropertyDescription,
    Result, RoomType,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Main-room count column of the rent model
pub const MAIN_ROOMS_COLUMN: &str = "Nombre de pièces principales";
/// Furnished flag column of the rent model
pub const FURNISHED_COLUMN: &str = "Type de locationom_meublé";
/// Unfurnished flag column of the rent model
pub const UNFURNISHED_COLUMN: &str = "Type de locationom_non meublé";

/// What a model column encodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FeatureColumn {
    Superhost,
    ListingCount,
    IdentityVerified,
    ResponseRate,
    Bedrooms,
    Bathrooms,
    Location(Arrondissement),
    Room(RoomType),
    Amenity,
    MainRooms,
    Furnished,
    Unfurnished,
}

impl FeatureColumn {
    fn parse(column: &str) -> Option<Self> {
        let parsed = match column {
            "host_is_superhost" => Self::Superhost,
            "host_listings_count" => Self::ListingCount,
            "host_identity_verified" => Self::IdentityVerified,
            "host_response_rate" => Self::ResponseRate,
            "bedrooms" | "Bedroom" => Self::Bedrooms,
            "bathrooms_text" | "Bathroom" => Self::Bathrooms,
            MAIN_ROOMS_COLUMN => Self::MainRooms,
            FURNISHED_COLUMN => Self::Furnished,
            UNFURNISHED_COLUMN => Self::Unfurnished,
            _ if column.starts_with(AMENITY_PREFIX) => Self::Amenity,
            _ => {
                if let Some(arrondissement) = Arrondissement::from_column_name(column) {
                    Self::Location(arrondissement)
                } else {
                    Self::Room(RoomType::from_column_name(column)?)
                }
            }
        };
        Some(parsed)
    }

    fn value(self, property: &PropertyDescription) -> f64 {
        let flag = |on: bool| if on { 1.0 } else { 0.0 };
        match self {
            Self::Superhost => flag(property.host.is_superhost),
            Self::ListingCount => f64::from(property.host.listing_count),
            Self::IdentityVerified => flag(property.host.identity_verified),
            Self::ResponseRate => property.host.response_rate.unwrap_or(0.0),
            Self::Bedrooms => f64::from(property.bedrooms),
            Self::Bathrooms => f64::from(property.bathrooms),
            Self::Location(arrondissement) => flag(property.arrondissement == arrondissement),
            Self::Room(room_type) => flag(property.room_type == room_type),
            Self::Amenity => 0.0,
            Self::MainRooms => f64::from(property.main_rooms()),
            Self::Furnished => flag(property.furnished),
            Self::Unfurnished => flag(!property.furnished),
        }
    }
}

/// Encodes a [`PropertyDescription`] into one model's feature vector
#[derive(Debug, Clone)]
pub struct FeatureNormalizer {
    schema: Arc<FeatureSchema>,
    columns: Vec<FeatureColumn>,
    amenities: AmenitySchema,
    amenity_positions: HashMap<String, usize>,
}

impl FeatureNormalizer {
    /// Compile a normalizer whose amenities are the schema's `amenity__*` columns
    pub fn new(schema: Arc<FeatureSchema>) -> Result<Self> {
        let amenities = AmenitySchema::from_columns(schema.columns().iter().map(String::as_str));
        Self::with_amenity_schema(schema, amenities)
    }

    /// Compile a normalizer with an explicit amenity schema
    ///
    /// Every amenity key must point at an `amenity__*` column of the schema.
    /// Amenity columns missing from `amenities` always encode as absent.
    pub fn with_amenity_schema(schema: Arc<FeatureSchema>, amenities: AmenitySchema) -> Result<Self> {
        let model = schema.model();
        let columns = schema
            .columns()
            .iter()
            .map(|column| {
                FeatureColumn::parse(column).ok_or_else(|| {
                    PricingError::schema_mismatch(model, format!("unsupported column '{}'", column))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut amenity_positions = HashMap::with_capacity(amenities.len());
        for key in amenities.keys() {
            match schema.position(&key.column) {
                Some(position) if columns[position] == FeatureColumn::Amenity => {
                    amenity_positions.insert(key.column.clone(), position);
                }
                _ => {
                    return Err(PricingError::schema_mismatch(
                        model,
                        format!("amenity '{}' has no column '{}'", key.label, key.column),
                    ))
                }
            }
        }

        Ok(Self {
            schema,
            columns,
            amenities,
            amenity_positions,
        })
    }

    pub fn model(&self) -> ModelKind {
        self.schema.model()
    }

    pub fn schema(&self) -> &Arc<FeatureSchema> {
        &self.schema
    }

    pub fn amenity_schema(&self) -> &AmenitySchema {
        &self.amenities
    }

    /// Selected amenity labels this normalizer does not recognize
    pub fn unrecognized_amenities(&self, property: &PropertyDescription) -> Vec<String> {
        property
            .selected_amenities()
            .filter(|label| self.amenities.resolve(label).is_none())
            .map(str::to_string)
            .collect()
    }

    /// Encode a property, dropping unrecognized amenity labels
    pub fn normalize(&self, property: &PropertyDescription) -> Result<FeatureVector> {
        property.validate()?;

        let mut vector = FeatureVector::zeros(Arc::clone(&self.schema));
        for (position, column) in self.columns.iter().enumerate() {
            vector.set_at(position, column.value(property));
        }

        let mut dropped = Vec::new();
        for label in property.selected_amenities() {
            let position = self
                .amenities
                .resolve(label)
                .and_then(|key| self.amenity_positions.get(&key.column));
            match position {
                Some(&position) => vector.set_at(position, 1.0),
                None => dropped.push(label),
            }
        }
        if !dropped.is_empty() && !self.amenities.is_empty() {
            debug!(model = %self.model(), ?dropped, "dropping unrecognized amenities");
        }

        Ok(vector)
    }

    /// Encode a property, rejecting any unrecognized amenity label
    pub fn normalize_strict(&self, property: &PropertyDescription) -> Result<FeatureVector> {
        if let Some(label) = self.unrecognized_amenities(property).into_iter().next() {
            return Err(PricingError::UnrecognizedAmenity(label));
        }
        self.normalize(property)
    }
}
