//! Per-request result bundles

use crate::revenue::{MonthlyRevenue, RevenueRange};
use pricing_spi::{PredictionResult, PriceDecomposition};
use serde::{Deserialize, Serialize};

/// Everything computed for a short-term listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirbnbReport {
    pub nightly: PredictionResult,
    pub cleaning_fee: f64,
    pub decomposition: PriceDecomposition,
    pub revenue: MonthlyRevenue,
    pub revenue_range: RevenueRange,
}

/// Everything computed for a long-term rental
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentingReport {
    pub monthly_rent: PredictionResult,
    pub main_rooms: u32,
    pub furnished: bool,
}
