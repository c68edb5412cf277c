//! Utility to inspect the reference data file and report which form fields it covers.

use credit_dashboard::glossary::Glossary;
use credit_dashboard::models::REQUIRED_FIELDS;
use credit_dashboard::reference::ReferenceTable;
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Main entry point for the reference inspection utility.
///
/// Reads the CSV named by the first argument, or `REFERENCE_DATA_PATH`, and
/// prints row counts, required-field coverage and the comparable features.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    let path = env::args()
        .nth(1)
        .or_else(|| env::var("REFERENCE_DATA_PATH").ok())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("application_train.csv"));

    let table = ReferenceTable::load(&path)?;
    println!("Reference data: {}", path.display());
    println!("- rows: {}", table.len());
    println!("- columns: {}", table.columns().count());
    println!();

    println!("Required form fields:");
    for spec in REQUIRED_FIELDS {
        let marker = if table.has_column(spec.name) { "ok" } else { "MISSING" };
        println!("  - {}: {}", spec.name, marker);
    }
    println!();

    let glossary = Glossary::builtin();
    let sample = table.sample(1000, 42, &glossary);
    println!(
        "Comparable features in a {}-row sample:",
        sample.rows()
    );
    for feature in sample.features() {
        println!("  - {}: {}", feature, glossary.label(feature));
    }

    Ok(())
}
