//! One-country smoke run: scrape a single country (first positional
//! argument, defaulting to the first configured one) and write the result
//! to a separate file, leaving the real output untouched.

use std::error::Error;
use std::path::PathBuf;

use chrono::Utc;
use log::info;

use jobmarket_scraper_lib::{document, logger, HttpPageClient, ScrapeOptions, ScrapeOrchestrator, COUNTRIES};

fn main() -> Result<(), Box<dyn Error>> {
    logger::init(None);

    let country = std::env::args()
        .nth(1)
        .unwrap_or_else(|| COUNTRIES[0].name.to_string());
    info!("Spot-checking scrape for {}", country);

    let options = ScrapeOptions {
        output_path: PathBuf::from("data/test_data.json"),
        ..ScrapeOptions::default()
    };
    let output_path = options.output_path.clone();
    let page_load_timeout = options.page_load_timeout;

    let orchestrator = ScrapeOrchestrator::new(options);
    let mut client = HttpPageClient::new(page_load_timeout);
    let result = orchestrator.scrape_country(&mut client, &country);

    let document = document::assemble(vec![result], Utc::now());
    document::save_document(&document, &output_path)?;

    info!("Spot-check data saved to {:?}", output_path);
    Ok(())
}
