//! # paris-price
//!
//! Command-line interface for the Paris housing price engine.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pricing_facade::prelude::*;
use pricing_facade::ModelPaths;
use serde::Serialize;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "paris-price")]
#[command(about = "Paris short-term and long-term rental price estimates", long_about = None)]
struct Cli {
    /// Pricing configuration (JSON)
    #[arg(short, long, global = true, env = "PARIS_PRICE_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding airbnb_price.json, cleaning_fee.json and rent.json
    #[arg(long, global = true)]
    models: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum DomainArg {
    Airbnb,
    Renting,
}

impl From<DomainArg> for Domain {
    fn from(arg: DomainArg) -> Self {
        match arg {
            DomainArg::Airbnb => Domain::Airbnb,
            DomainArg::Renting => Domain::Renting,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Predict a price with its quartile interval
    Predict {
        /// Property description (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Market to price for
        #[arg(short, long, value_enum, default_value = "airbnb")]
        domain: DomainArg,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Split the nightly price into baseline, quality and location
    Decompose {
        /// Property description (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Price the property in all 20 arrondissements
    Sweep {
        /// Property description (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Market to price for
        #[arg(short, long, value_enum, default_value = "airbnb")]
        domain: DomainArg,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Full report: price, interval, cleaning fee, decomposition and revenue
    Report {
        /// Property description (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Market to report on
        #[arg(short, long, value_enum, default_value = "airbnb")]
        domain: DomainArg,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn load_config(config: Option<&Path>, models: Option<&Path>) -> Result<PricingConfig> {
    let mut config = match config {
        Some(path) => PricingConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PricingConfig::default(),
    };
    if let Some(dir) = models {
        config.models = ModelPaths::in_dir(dir);
    }
    Ok(config)
}

fn load_property(path: &Path) -> Result<PropertyDescription> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read property {}", path.display()))?;
    let property: PropertyDescription = serde_json::from_str(&json)
        .with_context(|| format!("Invalid property description in {}", path.display()))?;
    debug!(?property, "property loaded");
    Ok(property)
}

fn write_output<T: Serialize>(output: Option<PathBuf>, value: &T) -> Result<()> {
    if let Some(path) = output {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output {}", path.display()))?;
        serde_json::to_writer_pretty(file, value).context("Failed to write JSON")?;
        println!("\nResults written to {:?}", path);
    }
    Ok(())
}

fn print_prediction(label: &str, result: &PredictionResult) {
    println!("{}: {:.2} EUR", label, result.point_estimate);
    println!(
        "Interval: {:.2} - {:.2} EUR (quartile {}, RMSE {:.2})",
        result.interval_lower, result.interval_upper, result.quartile, result.rmse
    );
}

fn print_decomposition(decomposition: &PriceDecomposition) {
    println!("Baseline price:   {:>9.2} EUR", decomposition.baseline_price);
    println!("Quality impact:   {:>+9.2} EUR", decomposition.quality_impact);
    println!("Location impact:  {:>+9.2} EUR", decomposition.location_impact);
    println!("Final price:      {:>9.2} EUR", decomposition.final_price);
}

fn price_label(domain: Domain) -> &'static str {
    match domain {
        Domain::Airbnb => "Nightly price",
        Domain::Renting => "Monthly rent",
    }
}

fn run_predict(
    service: &PricingService,
    input: PathBuf,
    domain: Domain,
    output: Option<PathBuf>,
) -> Result<()> {
    let property = load_property(&input)?;
    let result = service.predict(&property, domain)?;

    println!("=== {} Prediction ({}) ===", domain, property.arrondissement);
    print_prediction(price_label(domain), &result);

    write_output(output, &result)
}

fn run_decompose(service: &PricingService, input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let property = load_property(&input)?;
    let decomposition = service.decompose(&property)?;

    println!(
        "=== Price Decomposition ({} vs {}) ===",
        property.arrondissement,
        service.median_arrondissement()
    );
    print_decomposition(&decomposition);

    write_output(output, &decomposition)
}

fn run_sweep(
    service: &PricingService,
    input: PathBuf,
    domain: Domain,
    output: Option<PathBuf>,
) -> Result<()> {
    let property = load_property(&input)?;
    let kind = match domain {
        Domain::Airbnb => ModelKind::AirbnbPrice,
        Domain::Renting => ModelKind::Rent,
    };
    let prices = service.sweep_model(&property, kind)?;

    println!("=== {} by Arrondissement ===", price_label(domain));
    for (arrondissement, price) in prices.iter() {
        let marker = if arrondissement == property.arrondissement { " *" } else { "" };
        println!("{:<30} {:>10.2} EUR{}", arrondissement.name(), price, marker);
    }
    if let Some((low, high)) = prices.price_range() {
        println!("\nRange: {:.2} - {:.2} EUR", low, high);
    }

    write_output(output, &prices)
}

fn run_report(
    service: &PricingService,
    input: PathBuf,
    domain: Domain,
    output: Option<PathBuf>,
) -> Result<()> {
    let property = load_property(&input)?;

    match domain {
        Domain::Airbnb => {
            let report = service.airbnb_report(&property)?;

            println!("=== Airbnb Report ({}) ===", property.arrondissement);
            print_prediction(price_label(domain), &report.nightly);
            println!("Cleaning fee: {:.2} EUR", report.cleaning_fee);
            println!();
            print_decomposition(&report.decomposition);
            println!();
            println!("Occupancy: {:.0}%", report.revenue.occupancy * 100.0);
            println!("Gross revenue: {:.2} EUR/month", report.revenue.gross_revenue);
            println!(
                "Cleaning costs: {:.2} EUR/month ({:.1} cleanings)",
                report.revenue.cleaning_costs, report.revenue.cleanings
            );
            println!(
                "Net income: {:.2} EUR/month ({:.2} - {:.2})",
                report.revenue.net_income,
                report.revenue_range.low.net_income,
                report.revenue_range.high.net_income
            );

            write_output(output, &report)
        }
        Domain::Renting => {
            let report = service.renting_report(&property)?;

            println!("=== Renting Report ({}) ===", property.arrondissement);
            print_prediction(price_label(domain), &report.monthly_rent);
            println!(
                "Main rooms: {} ({})",
                report.main_rooms,
                if report.furnished { "furnished" } else { "unfurnished" }
            );

            write_output(output, &report)
        }
    }
}

fn main() -> Result<()> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pricing=info,paris_price=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref(), cli.models.as_deref())?;
    let service = config.build().context("Failed to build pricing service")?;

    match cli.command {
        Commands::Predict {
            input,
            domain,
            output,
        } => run_predict(&service, input, domain.into(), output),

        Commands::Decompose { input, output } => run_decompose(&service, input, output),

        Commands::Sweep {
            input,
            domain,
            output,
        } => run_sweep(&service, input, domain.into(), output),

        Commands::Report {
            input,
            domain,
            output,
        } => run_report(&service, input, domain.into(), output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_report_command() {
        let cli = Cli::try_parse_from([
            "paris-price",
            "--config",
            "pricing.json",
            "report",
            "--input",
            "flat.json",
            "--domain",
            "renting",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("pricing.json")));
        assert!(matches!(
            cli.command,
            Commands::Report {
                domain: DomainArg::Renting,
                output: None,
                ..
            }
        ));
    }

    #[test]
    fn test_domain_defaults_to_airbnb() {
        let cli = Cli::try_parse_from(["paris-price", "sweep", "-i", "flat.json"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Sweep {
                domain: DomainArg::Airbnb,
                ..
            }
        ));
    }

    #[test]
    fn test_models_flag_overrides_config_paths() {
        let config = load_config(None, Some(Path::new("/srv/models"))).unwrap();
        assert_eq!(config.models.rent, PathBuf::from("/srv/models/rent.json"));
    }

    #[test]
    fn test_load_property() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "arrondissement": 5, "bedrooms": 3, "amenities": ["Wifi"] }}"#).unwrap();
        let property = load_property(file.path()).unwrap();
        assert_eq!(property.arrondissement.number(), 5);
        assert_eq!(property.bedrooms, 3);
        assert_eq!(property.selected_amenities().collect::<Vec<_>>(), vec!["Wifi"]);

        let missing = load_property(Path::new("/nonexistent/flat.json"));
        assert!(missing.is_err());
    }
}
