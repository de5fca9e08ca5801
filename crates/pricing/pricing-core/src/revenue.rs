//! Monthly revenue estimate for a short-term listing

use pricing_spi::{Arrondissement, PredictionResult, PricingError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Gross revenue, cleaning costs and net income over one month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// Share of nights booked, within [0, 1]
    pub occupancy: f64,
    pub gross_revenue: f64,
    /// Expected turnovers per month
    pub cleanings: f64,
    pub cleaning_costs: f64,
    pub net_income: f64,
}

/// Net income at the lower and upper end of the nightly price interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueRange {
    pub low: MonthlyRevenue,
    pub high: MonthlyRevenue,
}

/// Turns a nightly price and cleaning fee into monthly figures
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueEstimator {
    nights_per_month: f64,
    average_stay_nights: f64,
    default_occupancy: f64,
    occupancy: BTreeMap<Arrondissement, f64>,
}

impl RevenueEstimator {
    /// Build an estimator; occupancy rates are fractions in [0, 1]
    pub fn new(
        nights_per_month: f64,
        average_stay_nights: f64,
        default_occupancy: f64,
        occupancy: BTreeMap<Arrondissement, f64>,
    ) -> Result<Self> {
        if !(nights_per_month > 0.0) {
            return Err(PricingError::Config(format!(
                "nights_per_month must be positive, got {}",
                nights_per_month
            )));
        }
        if !(average_stay_nights > 0.0) {
            return Err(PricingError::Config(format!(
                "average_stay_nights must be positive, got {}",
                average_stay_nights
            )));
        }
        let rates = occupancy.values().chain(std::iter::once(&default_occupancy));
        for &rate in rates {
            if !(0.0..=1.0).contains(&rate) {
                return Err(PricingError::Config(format!(
                    "occupancy must be within [0, 1], got {}",
                    rate
                )));
            }
        }

        Ok(Self {
            nights_per_month,
            average_stay_nights,
            default_occupancy,
            occupancy,
        })
    }

    /// Occupancy of an arrondissement, or the default when none is known
    pub fn occupancy_for(&self, arrondissement: Arrondissement) -> f64 {
        match self.occupancy.get(&arrondissement) {
            Some(&rate) => rate,
            None => {
                warn!(
                    arrondissement = arrondissement.number(),
                    default = self.default_occupancy,
                    "no occupancy data, using default"
                );
                self.default_occupancy
            }
        }
    }

    /// Median occupancy across the known arrondissements
    pub fn city_median_occupancy(&self) -> Option<f64> {
        let mut rates: Vec<f64> = self.occupancy.values().copied().collect();
        if rates.is_empty() {
            return None;
        }
        rates.sort_by(f64::total_cmp);
        let mid = rates.len() / 2;
        Some(if rates.len() % 2 == 0 {
            (rates[mid - 1] + rates[mid]) / 2.0
        } else {
            rates[mid]
        })
    }

    /// Monthly figures for a nightly price in an arrondissement
    pub fn estimate(
        &self,
        nightly_price: f64,
        cleaning_fee: f64,
        arrondissement: Arrondissement,
    ) -> MonthlyRevenue {
        self.estimate_at(nightly_price, cleaning_fee, self.occupancy_for(arrondissement))
    }

    /// Monthly figures at both ends of the nightly price interval
    ///
    /// Cleaning frequency and fee do not depend on the nightly price, so the
    /// cleaning costs are the same at both ends.
    pub fn estimate_range(
        &self,
        nightly: &PredictionResult,
        cleaning_fee: f64,
        arrondissement: Arrondissement,
    ) -> RevenueRange {
        let occupancy = self.occupancy_for(arrondissement);
        RevenueRange {
            low: self.estimate_at(nightly.interval_lower, cleaning_fee, occupancy),
            high: self.estimate_at(nightly.interval_upper, cleaning_fee, occupancy),
        }
    }

    fn estimate_at(&self, nightly_price: f64, cleaning_fee: f64, occupancy: f64) -> MonthlyRevenue {
        let booked_nights = self.nights_per_month * occupancy;
        let gross_revenue = nightly_price * booked_nights;
        let cleanings = booked_nights / self.average_stay_nights;
        let cleaning_costs = cleanings * cleaning_fee;
        MonthlyRevenue {
            occupancy,
            gross_revenue,
            cleanings,
            cleaning_costs,
            net_income: gross_revenue - cleaning_costs,
        }
    }
}

impl Default for RevenueEstimator {
    fn default() -> Self {
        Self {
            nights_per_month: 30.0,
            average_stay_nights: 4.8,
            default_occupancy: 0.5,
            occupancy: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arrondissement(number: u8) -> Arrondissement {
        Arrondissement::new(number).unwrap()
    }

    fn estimator() -> RevenueEstimator {
        let occupancy = [(arrondissement(1), 0.72), (arrondissement(11), 0.6), (arrondissement(19), 0.48)]
            .into_iter()
            .collect();
        RevenueEstimator::new(30.0, 4.8, 0.5, occupancy).unwrap()
    }

    #[test]
    fn test_monthly_figures() {
        let revenue = estimator().estimate(100.0, 48.0, arrondissement(11));
        assert_eq!(revenue.occupancy, 0.6);
        assert!((revenue.gross_revenue - 1800.0).abs() < 1e-9);
        assert!((revenue.cleanings - 3.75).abs() < 1e-9);
        assert!((revenue.cleaning_costs - 180.0).abs() < 1e-9);
        assert!((revenue.net_income - 1620.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_occupancy_when_unknown() {
        let revenue = estimator().estimate(100.0, 0.0, arrondissement(5));
        assert_eq!(revenue.occupancy, 0.5);
        assert!((revenue.gross_revenue - 1500.0).abs() < 1e-9);
    }

    #[test]
    fn test_range_keeps_cleaning_costs() {
        let nightly = PredictionResult::from_rmse(130.0, 40.0, 2);
        let range = estimator().estimate_range(&nightly, 40.0, arrondissement(1));
        assert_eq!(range.low.cleaning_costs, range.high.cleaning_costs);
        assert!(range.low.net_income < range.high.net_income);
        assert!((range.low.gross_revenue - 90.0 * 30.0 * 0.72).abs() < 1e-9);
    }

    #[test]
    fn test_city_median_occupancy() {
        assert_eq!(estimator().city_median_occupancy(), Some(0.6));
        assert_eq!(RevenueEstimator::default().city_median_occupancy(), None);

        let even = RevenueEstimator::new(
            30.0,
            4.8,
            0.5,
            [(arrondissement(1), 0.4), (arrondissement(2), 0.8)].into_iter().collect(),
        )
        .unwrap();
        assert!((even.city_median_occupancy().unwrap() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        assert!(RevenueEstimator::new(0.0, 4.8, 0.5, BTreeMap::new()).is_err());
        assert!(RevenueEstimator::new(30.0, 0.0, 0.5, BTreeMap::new()).is_err());
        assert!(RevenueEstimator::new(30.0, 4.8, 1.5, BTreeMap::new()).is_err());
        let bad_rate = [(arrondissement(3), 72.0)].into_iter().collect();
        assert!(matches!(
            RevenueEstimator::new(30.0, 4.8, 0.5, bad_rate),
            Err(PricingError::Config(_))
        ));
    }
}
