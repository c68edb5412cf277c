//! Utility to score one client from the command line and print the dashboard.
//!
//! Usage: `score_client [CLIENT_ID]`. Without an identifier the default form
//! values are scored.

use credit_dashboard::comparison::ComparisonSelection;
use credit_dashboard::config::Config;
use credit_dashboard::form::FormSession;
use credit_dashboard::glossary::Glossary;
use credit_dashboard::reference::ReferenceTable;
use credit_dashboard::render;
use credit_dashboard::scoring_client::ScoringClient;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    let glossary = Glossary::builtin();
    let mut form = FormSession::new();
    let mut sample = None;

    if let Some(raw) = env::args().nth(1) {
        let client_id: i64 = raw.parse()?;
        let table = ReferenceTable::load(&config.reference_data_path)?;
        let outcome = form.prefill(Some(&table), client_id);
        if let Some(warning) = outcome.warning() {
            eprintln!("warning: {}", warning);
        }
        sample = Some(table.sample(
            config.reference_sample_size,
            config.reference_sample_seed,
            &glossary,
        ));
    }

    let client = ScoringClient::new(config.scoring_api_url.clone(), config.scoring_timeout())?;
    let record = form.to_record();
    let response = client.score(&record).await?;

    let view = render::dashboard(
        &response,
        &record,
        &glossary,
        sample.as_ref(),
        &ComparisonSelection::default(),
    );
    eprintln!("{}", view.gauge.message);
    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}
