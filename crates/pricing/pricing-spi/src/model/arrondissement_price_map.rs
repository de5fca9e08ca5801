//! Per-arrondissement price table

use super::Arrondissement;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Predicted price per arrondissement, keyed by INSEE code
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArrondissementPriceMap {
    prices: BTreeMap<u32, f64>,
}

impl ArrondissementPriceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the price for an arrondissement, replacing any previous one
    pub fn insert(&mut self, arrondissement: Arrondissement, price: f64) {
        self.prices.insert(arrondissement.insee_code(), price);
    }

    pub fn get(&self, arrondissement: Arrondissement) -> Option<f64> {
        self.prices.get(&arrondissement.insee_code()).copied()
    }

    pub fn get_insee(&self, insee_code: u32) -> Option<f64> {
        self.prices.get(&insee_code).copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Whether every arrondissement has a price
    pub fn is_complete(&self) -> bool {
        Arrondissement::all().all(|arrondissement| self.get(arrondissement).is_some())
    }

    /// Entries in ascending INSEE order
    pub fn iter(&self) -> impl Iterator<Item = (Arrondissement, f64)> + '_ {
        self.prices.iter().filter_map(|(&code, &price)| {
            Arrondissement::from_insee_code(code)
                .ok()
                .map(|arrondissement| (arrondissement, price))
        })
    }

    /// Cheapest and most expensive prices, if any
    pub fn price_range(&self) -> Option<(f64, f64)> {
        let mut prices = self.prices.values().copied();
        let first = prices.next()?;
        Some(prices.fold((first, first), |(low, high), price| {
            (low.min(price), high.max(price))
        }))
    }
}

impl FromIterator<(Arrondissement, f64)> for ArrondissementPriceMap {
    fn from_iter<I: IntoIterator<Item = (Arrondissement, f64)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (arrondissement, price) in iter {
            map.insert(arrondissement, price);
        }
        map
    }
}
