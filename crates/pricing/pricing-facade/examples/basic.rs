//! Basic pricing example - prices a flat in the 11th with hand-built models.

use pricing_facade::prelude::*;
use pricing_facade::{LinearModel, ModelAdapter, TargetTransform};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Paris Pricing ===\n");

    let mut nightly_columns = vec!["bedrooms".to_string(), "bathrooms_text".to_string()];
    let mut nightly_weights = vec![0.25, 0.1];
    for arrondissement in Arrondissement::all() {
        nightly_columns.push(arrondissement.column_name());
        nightly_weights.push(0.3 - f64::from(arrondissement.number()) * 0.015);
    }
    nightly_columns.push("amenity__wifi".to_string());
    nightly_weights.push(0.05);

    // Nightly model trained on log prices
    let nightly = LinearModel::new(
        ModelKind::AirbnbPrice,
        nightly_columns,
        nightly_weights,
        4.3,
        TargetTransform::Log1p,
    )?;
    let cleaning = LinearModel::new(
        ModelKind::CleaningFee,
        vec!["Bedroom".to_string(), "Bathroom".to_string()],
        vec![10.0, 8.0],
        20.0,
        TargetTransform::Identity,
    )?;
    let rent = LinearModel::new(
        ModelKind::Rent,
        vec![
            "Nombre de pièces principales".to_string(),
            "Type de locationom_meublé".to_string(),
        ],
        vec![420.0, 150.0],
        300.0,
        TargetTransform::Identity,
    )?;

    let adapter = ModelAdapter::new()
        .with_model(ModelKind::AirbnbPrice, Arc::new(nightly))?
        .with_model(ModelKind::CleaningFee, Arc::new(cleaning))?
        .with_model(ModelKind::Rent, Arc::new(rent))?;
    let service = PricingConfig::default().build_with_adapter(adapter)?;

    let property = PropertyDescription::new(Arrondissement::new(11)?)
        .with_bedrooms(2)
        .with_amenity("Wifi");

    let report = service.airbnb_report(&property)?;
    println!(
        "Nightly price: {:.0} EUR (Q{}, {:.0}-{:.0})",
        report.nightly.point_estimate,
        report.nightly.quartile,
        report.nightly.interval_lower,
        report.nightly.interval_upper
    );
    println!("Cleaning fee: {:.0} EUR", report.cleaning_fee);
    println!(
        "Baseline {:.0} + quality {:+.0} + location {:+.0}",
        report.decomposition.baseline_price,
        report.decomposition.quality_impact,
        report.decomposition.location_impact
    );
    println!(
        "Monthly net income: {:.0} EUR ({:.0}-{:.0})\n",
        report.revenue.net_income,
        report.revenue_range.low.net_income,
        report.revenue_range.high.net_income
    );

    let renting = service.renting_report(&property)?;
    println!(
        "Monthly rent: {:.0} EUR for {} main rooms\n",
        renting.monthly_rent.point_estimate, renting.main_rooms
    );

    println!("Across Paris:");
    for (arrondissement, price) in service.sweep(&property)?.iter() {
        println!("  {:<28} {:>6.0} EUR", arrondissement.name(), price);
    }

    Ok(())
}
