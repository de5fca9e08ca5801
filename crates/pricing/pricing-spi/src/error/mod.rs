//! Error module containing error types and result aliases

mod pricing_error;

pub use pricing_error::{PricingError, Result};
