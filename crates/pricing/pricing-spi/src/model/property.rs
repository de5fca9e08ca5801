//! Structured property description supplied by the caller

use super::Arrondissement;
use crate::error::{PricingError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Listing type offered on the short-term market
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoomType {
    #[default]
    #[serde(rename = "Entire home/apt")]
    EntireHome,
    #[serde(rename = "Hotel room")]
    HotelRoom,
    #[serde(rename = "Private room")]
    PrivateRoom,
    #[serde(rename = "Shared room")]
    SharedRoom,
}

impl RoomType {
    /// Prefix shared by every room-type one-hot column
    pub const COLUMN_PREFIX: &'static str = "room_";

    pub const ALL: [RoomType; 4] = [
        RoomType::EntireHome,
        RoomType::HotelRoom,
        RoomType::PrivateRoom,
        RoomType::SharedRoom,
    ];

    /// Label used in listings and in model column names
    pub fn label(self) -> &'static str {
        match self {
            RoomType::EntireHome => "Entire home/apt",
            RoomType::HotelRoom => "Hotel room",
            RoomType::PrivateRoom => "Private room",
            RoomType::SharedRoom => "Shared room",
        }
    }

    /// One-hot column name used by the Airbnb model
    pub fn column_name(self) -> String {
        format!("{}{}", Self::COLUMN_PREFIX, self.label())
    }

    /// Parse a one-hot column name back into a room type
    pub fn from_column_name(column: &str) -> Option<Self> {
        let label = column.strip_prefix(Self::COLUMN_PREFIX)?;
        Self::ALL.into_iter().find(|room_type| room_type.label() == label)
    }
}

/// Host profile attributes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HostAttributes {
    pub is_superhost: bool,
    /// Number of listings the host manages
    pub listing_count: u32,
    pub identity_verified: bool,
    /// Share of messages answered, within [0, 1]
    pub response_rate: Option<f64>,
}

/// A property as described by the caller, before encoding
///
/// Serves both domains: `room_type`, `amenities` and `host` feed the Airbnb
/// models, `rooms` and `furnished` feed the rent model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDescription {
    pub arrondissement: Arrondissement,
    #[serde(default = "one")]
    pub bedrooms: u32,
    #[serde(default = "one")]
    pub bathrooms: u32,
    #[serde(default)]
    pub room_type: RoomType,
    /// Amenity display label to selection; accepts a plain list of labels too
    #[serde(default, deserialize_with = "deserialize_amenities")]
    pub amenities: BTreeMap<String, bool>,
    #[serde(default)]
    pub host: HostAttributes,
    /// Main rooms for the rent model
    #[serde(default)]
    pub rooms: Option<u32>,
    #[serde(default)]
    pub furnished: bool,
}

fn one() -> u32 {
    1
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AmenityInput {
    Labels(Vec<String>),
    Selection(BTreeMap<String, bool>),
}

fn deserialize_amenities<'de, D>(deserializer: D) -> std::result::Result<BTreeMap<String, bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match AmenityInput::deserialize(deserializer)? {
        AmenityInput::Labels(labels) => labels.into_iter().map(|label| (label, true)).collect(),
        AmenityInput::Selection(selection) => selection,
    })
}

impl PropertyDescription {
    /// Minimal one-bedroom, one-bathroom listing with no amenities
    pub fn new(arrondissement: Arrondissement) -> Self {
        Self {
            arrondissement,
            bedrooms: 1,
            bathrooms: 1,
            room_type: RoomType::default(),
            amenities: BTreeMap::new(),
            host: HostAttributes::default(),
            rooms: None,
            furnished: false,
        }
    }

    pub fn with_bedrooms(mut self, bedrooms: u32) -> Self {
        self.bedrooms = bedrooms;
        self
    }

    pub fn with_bathrooms(mut self, bathrooms: u32) -> Self {
        self.bathrooms = bathrooms;
        self
    }

    pub fn with_room_type(mut self, room_type: RoomType) -> Self {
        self.room_type = room_type;
        self
    }

    pub fn with_amenity(mut self, label: impl Into<String>) -> Self {
        self.amenities.insert(label.into(), true);
        self
    }

    pub fn with_host(mut self, host: HostAttributes) -> Self {
        self.host = host;
        self
    }

    pub fn with_rooms(mut self, rooms: u32) -> Self {
        self.rooms = Some(rooms);
        self
    }

    pub fn with_furnished(mut self, furnished: bool) -> Self {
        self.furnished = furnished;
        self
    }

    /// Same property moved to another arrondissement
    pub fn at(&self, arrondissement: Arrondissement) -> Self {
        Self {
            arrondissement,
            ..self.clone()
        }
    }

    /// Labels of the amenities marked as present
    pub fn selected_amenities(&self) -> impl Iterator<Item = &str> {
        self.amenities
            .iter()
            .filter(|&(_, &selected)| selected)
            .map(|(label, _)| label.as_str())
    }

    /// Main rooms for the rent model
    ///
    /// Main rooms are the bedrooms plus the living room, so without an
    /// explicit count a studio has one and a two-bedroom flat has three.
    pub fn main_rooms(&self) -> u32 {
        self.rooms.unwrap_or_else(|| self.bedrooms.saturating_add(1))
    }

    /// Check the fields the encoders cannot reject on their own
    pub fn validate(&self) -> Result<()> {
        if let Some(rate) = self.host.response_rate {
            if !(0.0..=1.0).contains(&rate) {
                return Err(PricingError::InvalidProperty {
                    field: "host.response_rate".to_string(),
                    reason: format!("must be within [0, 1], got {}", rate),
                });
            }
        }
        Ok(())
    }
}
