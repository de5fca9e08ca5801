//! Pricing Facade
//!
//! High-level API for Paris housing price prediction. Re-exports all public
//! types from the pricing stack for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use pricing_api::*;

// Explicit re-exports for documentation
pub use pricing_api::prelude;
pub use pricing_core::amenity::clean_amenity_name;
pub use pricing_core::decomposition::MEDIAN_ARRONDISSEMENT;
pub use pricing_core::normalizer::{FURNISHED_COLUMN, MAIN_ROOMS_COLUMN, UNFURNISHED_COLUMN};
