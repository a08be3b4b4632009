use std::error::Error;
use std::path::Path;

use chrono::Utc;
use log::info;

use jobmarket_scraper_lib::{document, logger, HttpPageClient, PageClient, ScrapeOptions, ScrapeOrchestrator};

fn main() -> Result<(), Box<dyn Error>> {
    logger::init(Some(Path::new("scraper.log")));
    info!("Starting job market scraper...");

    let options = ScrapeOptions::default();
    let output_path = options.output_path.clone();
    let page_load_timeout = options.page_load_timeout;

    let orchestrator = ScrapeOrchestrator::new(options);
    let results = orchestrator
        .scrape_all(|| Box::new(HttpPageClient::new(page_load_timeout)) as Box<dyn PageClient>);

    let document = document::assemble(results, Utc::now());
    document::save_document(&document, &output_path)?;

    info!("Scraping completed successfully");
    Ok(())
}
