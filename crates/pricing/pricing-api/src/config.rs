//! Pricing configuration types.

use pricing_core::{ModelAdapter, PricingService, QuartileIntervalEstimator, RevenueEstimator};
use pricing_spi::{
    Arrondissement, Domain, ModelKind, PricingError, QuartileBucket, QuartileTable, Result,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

// ============================================================================
// Model Artifacts
// ============================================================================

/// Locations of the three trained model artifacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelPaths {
    /// Nightly Airbnb price model.
    pub airbnb_price: PathBuf,
    /// Per-cleaning fee model.
    pub cleaning_fee: PathBuf,
    /// Monthly rent model.
    pub rent: PathBuf,
}

impl ModelPaths {
    /// Artifacts named after their model inside one directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            airbnb_price: dir.join("airbnb_price.json"),
            cleaning_fee: dir.join("cleaning_fee.json"),
            rent: dir.join("rent.json"),
        }
    }

    pub fn path(&self, kind: ModelKind) -> &Path {
        match kind {
            ModelKind::AirbnbPrice => &self.airbnb_price,
            ModelKind::CleaningFee => &self.cleaning_fee,
            ModelKind::Rent => &self.rent,
        }
    }

    /// Resolve relative paths against `base`.
    pub fn relative_to(mut self, base: &Path) -> Self {
        for path in [&mut self.airbnb_price, &mut self.cleaning_fee, &mut self.rent] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }
}

impl Default for ModelPaths {
    fn default() -> Self {
        Self::in_dir("models")
    }
}

// ============================================================================
// Quartile Calibration
// ============================================================================

/// Quartile buckets for both domains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuartileConfig {
    pub airbnb: Vec<QuartileBucket>,
    pub renting: Vec<QuartileBucket>,
}

impl QuartileConfig {
    /// Validated interval estimator.
    pub fn estimator(&self) -> Result<QuartileIntervalEstimator> {
        QuartileIntervalEstimator::new(
            QuartileTable::new(Domain::Airbnb, self.airbnb.clone())?,
            QuartileTable::new(Domain::Renting, self.renting.clone())?,
        )
    }
}

impl Default for QuartileConfig {
    fn default() -> Self {
        Self {
            airbnb: QuartileTable::airbnb_default().buckets().to_vec(),
            renting: QuartileTable::renting_default().buckets().to_vec(),
        }
    }
}

// ============================================================================
// Revenue
// ============================================================================

/// Monthly revenue parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenueConfig {
    pub nights_per_month: f64,
    /// Average booking length; one cleaning per stay.
    pub average_stay_nights: f64,
    /// Occupancy fraction used where no rate is known.
    pub default_occupancy: f64,
    /// Occupancy percentage (0-100) keyed by arrondissement number.
    pub occupancy_percent: BTreeMap<u8, f64>,
}

impl RevenueConfig {
    pub fn estimator(&self) -> Result<RevenueEstimator> {
        let occupancy = self
            .occupancy_percent
            .iter()
            .map(|(&number, &percent)| Ok((Arrondissement::new(number)?, percent / 100.0)))
            .collect::<Result<BTreeMap<_, _>>>()?;
        RevenueEstimator::new(
            self.nights_per_month,
            self.average_stay_nights,
            self.default_occupancy,
            occupancy,
        )
    }
}

impl Default for RevenueConfig {
    fn default() -> Self {
        Self {
            nights_per_month: 30.0,
            average_stay_nights: 4.8,
            default_occupancy: 0.5,
            occupancy_percent: BTreeMap::new(),
        }
    }
}

// ============================================================================
// Sweep
// ============================================================================

/// Arrondissement sweep settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Run the 20 predictions on the rayon pool.
    pub parallel: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

// ============================================================================
// Pricing Configuration
// ============================================================================

/// Complete configuration of a pricing service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub models: ModelPaths,
    pub quartiles: QuartileConfig,
    /// Reference location of the decomposition.
    pub median_arrondissement: u8,
    pub revenue: RevenueConfig,
    pub sweep: SweepConfig,
}

impl PricingConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PricingError::Config(e.to_string()))
    }

    /// Read a JSON config; relative model paths resolve against its directory.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| PricingError::Config(format!("{}: {}", path.display(), e)))?;
        let mut config = Self::from_json_str(&json)?;
        if let Some(base) = path.parent() {
            config.models = config.models.relative_to(base);
        }
        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Load every model artifact and build the service.
    pub fn build(&self) -> Result<PricingService> {
        let adapter = ModelAdapter::load(
            ModelKind::ALL
                .iter()
                .map(|&kind| (kind, self.models.path(kind))),
        )?;
        self.build_with_adapter(adapter)
    }

    /// Build the service around already loaded or injected models.
    pub fn build_with_adapter(&self, adapter: ModelAdapter) -> Result<PricingService> {
        PricingService::builder(adapter)
            .intervals(self.quartiles.estimator()?)
            .median_arrondissement(Arrondissement::new(self.median_arrondissement)?)
            .revenue(self.revenue.estimator()?)
            .parallel_sweep(self.sweep.parallel)
            .build()
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            models: ModelPaths::default(),
            quartiles: QuartileConfig::default(),
            median_arrondissement: 10,
            revenue: RevenueConfig::default(),
            sweep: SweepConfig::default(),
        }
    }
}
