//! Deterministic linear models shared by the integration tests

#![allow(dead_code)]

use pricing_facade::{
    Arrondissement, HostAttributes, LinearModel, ModelAdapter, ModelKind, PricingService,
    PropertyDescription, RoomType, TargetTransform, FURNISHED_COLUMN, MAIN_ROOMS_COLUMN,
    UNFURNISHED_COLUMN,
};
use std::sync::Arc;

/// Per-arrondissement premium of the nightly model
pub const NIGHTLY_LOCATION_STEP: f64 = 4.0;
/// Per-arrondissement premium of the rent model
pub const RENT_LOCATION_STEP: f64 = 15.0;

fn linear(kind: ModelKind, columns: Vec<(String, f64)>, intercept: f64) -> LinearModel {
    let (names, coefficients) = columns.into_iter().unzip();
    LinearModel::new(kind, names, coefficients, intercept, TargetTransform::Identity).unwrap()
}

fn location_columns(step: f64) -> impl Iterator<Item = (String, f64)> {
    Arrondissement::all()
        .into_iter()
        .map(move |arrondissement| (arrondissement.column_name(), f64::from(arrondissement.number()) * step))
}

pub fn airbnb_model() -> LinearModel {
    let mut columns = vec![
        ("host_is_superhost".to_string(), 12.0),
        ("host_listings_count".to_string(), 0.5),
        ("host_identity_verified".to_string(), 3.0),
        ("bathrooms_text".to_string(), 15.0),
        ("bedrooms".to_string(), 35.0),
    ];
    columns.extend(location_columns(NIGHTLY_LOCATION_STEP));
    columns.extend([
        (RoomType::EntireHome.column_name(), 20.0),
        (RoomType::HotelRoom.column_name(), 10.0),
        (RoomType::PrivateRoom.column_name(), -10.0),
        (RoomType::SharedRoom.column_name(), -25.0),
        ("amenity__wifi".to_string(), 4.0),
        ("amenity__air_conditioning".to_string(), 9.0),
        ("amenity__elevator".to_string(), 6.0),
    ]);
    linear(ModelKind::AirbnbPrice, columns, 30.0)
}

pub fn cleaning_model() -> LinearModel {
    linear(
        ModelKind::CleaningFee,
        vec![("Bedroom".to_string(), 8.0), ("Bathroom".to_string(), 6.0)],
        15.0,
    )
}

pub fn rent_model() -> LinearModel {
    let mut columns = vec![(MAIN_ROOMS_COLUMN.to_string(), 350.0)];
    columns.extend(location_columns(RENT_LOCATION_STEP));
    columns.extend([
        (FURNISHED_COLUMN.to_string(), 120.0),
        (UNFURNISHED_COLUMN.to_string(), 0.0),
    ]);
    linear(ModelKind::Rent, columns, 250.0)
}

pub fn adapter() -> ModelAdapter {
    ModelAdapter::new()
        .with_model(ModelKind::AirbnbPrice, Arc::new(airbnb_model()))
        .unwrap()
        .with_model(ModelKind::CleaningFee, Arc::new(cleaning_model()))
        .unwrap()
        .with_model(ModelKind::Rent, Arc::new(rent_model()))
        .unwrap()
}

pub fn service() -> PricingService {
    PricingService::builder(adapter()).build().unwrap()
}

pub fn arrondissement(number: u8) -> Arrondissement {
    Arrondissement::new(number).unwrap()
}

/// Two-bedroom flat with wifi and an elevator, run by a verified superhost
pub fn sample_property(number: u8) -> PropertyDescription {
    PropertyDescription::new(arrondissement(number))
        .with_bedrooms(2)
        .with_bathrooms(1)
        .with_amenity("Wifi")
        .with_amenity("Elevator")
        .with_host(HostAttributes {
            is_superhost: true,
            listing_count: 3,
            identity_verified: true,
            response_rate: None,
        })
}
