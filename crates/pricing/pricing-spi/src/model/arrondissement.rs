//! Paris arrondissement identifiers

use crate::error::{PricingError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

const NAMES: [&str; 20] = [
    "1er Ardt - Louvre",
    "2e Ardt - Bourse",
    "3e Ardt - Temple",
    "4e Ardt - Hôtel-de-Ville",
    "5e Ardt - Panthéon",
    "6e Ardt - Luxembourg",
    "7e Ardt - Palais-Bourbon",
    "8e Ardt - Élysée",
    "9e Ardt - Opéra",
    "10e Ardt - Entrepôt",
    "11e Ardt - Popincourt",
    "12e Ardt - Reuilly",
    "13e Ardt - Gobelins",
    "14e Ardt - Observatoire",
    "15e Ardt - Vaugirard",
    "16e Ardt - Passy",
    "17e Ardt - Batignolles-Monceau",
    "18e Ardt - Buttes-Montmartre",
    "19e Ardt - Buttes-Chaumont",
    "20e Ardt - Ménilmontant",
];

/// One of the 20 Paris arrondissements
///
/// Serialized as its number (1..=20); deserialization rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Arrondissement(u8);

impl Arrondissement {
    /// Number of arrondissements in Paris
    pub const COUNT: usize = 20;

    /// Prefix shared by every arrondissement one-hot column
    pub const COLUMN_PREFIX: &'static str = "Arrondissement_";

    /// Create from the arrondissement number
    pub fn new(number: u8) -> Result<Self> {
        if (1..=Self::COUNT as u8).contains(&number) {
            Ok(Self(number))
        } else {
            Err(PricingError::InvalidArrondissement(number))
        }
    }

    /// Every arrondissement in ascending order
    pub fn all() -> impl Iterator<Item = Arrondissement> {
        (1..=Self::COUNT as u8).map(Arrondissement)
    }

    /// Look up an arrondissement by its INSEE code (75101..=75120)
    pub fn from_insee_code(code: u32) -> Result<Self> {
        code.checked_sub(75100)
            .and_then(|n| u8::try_from(n).ok())
            .ok_or(PricingError::InvalidArrondissement(0))
            .and_then(Self::new)
    }

    /// Arrondissement number
    pub fn number(self) -> u8 {
        self.0
    }

    /// Official 5-digit INSEE code, the key of the geographic boundary dataset
    pub fn insee_code(self) -> u32 {
        75100 + u32::from(self.0)
    }

    /// Human-readable display name
    pub fn name(self) -> &'static str {
        NAMES[usize::from(self.0) - 1]
    }

    /// One-hot column name used by the trained models
    pub fn column_name(self) -> String {
        if self.0 == 1 {
            format!("{}1er", Self::COLUMN_PREFIX)
        } else {
            format!("{}{}e", Self::COLUMN_PREFIX, self.0)
        }
    }

    /// Parse a one-hot column name back into an arrondissement
    pub fn from_column_name(column: &str) -> Option<Self> {
        let suffix = column.strip_prefix(Self::COLUMN_PREFIX)?;
        let digits = suffix.strip_suffix("er").or_else(|| suffix.strip_suffix('e'))?;
        let number = digits.parse::<u8>().ok()?;
        let arrondissement = Self::new(number).ok()?;
        (arrondissement.column_name() == column).then_some(arrondissement)
    }
}

impl TryFrom<u8> for Arrondissement {
    type Error = PricingError;

    fn try_from(number: u8) -> Result<Self> {
        Self::new(number)
    }
}

impl From<Arrondissement> for u8 {
    fn from(arrondissement: Arrondissement) -> u8 {
        arrondissement.0
    }
}

impl fmt::Display for Arrondissement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
