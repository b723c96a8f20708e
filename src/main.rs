use clap::Parser;
use patent_scrape::{PatentRecord, ScrapeError, Scraper};
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let scraper = match build_scraper(&args) {
        Ok(scraper) => scraper,
        Err(e) => {
            ::log::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Patents are scraped one after another; failures are skipped
    let mut records = Vec::with_capacity(args.patents.len());
    for input in &args.patents {
        match scrape_one(&scraper, input).await {
            Ok(record) => records.push(record),
            Err(e) => ::log::error!("Skipping {}: {}", input, e),
        }
    }

    if records.is_empty() {
        ::log::error!("No patent could be scraped");
        return ExitCode::FAILURE;
    }

    let json = if records.len() == 1 {
        serde_json::to_string_pretty(&records[0])
    } else {
        serde_json::to_string_pretty(&records)
    };
    let json = match json {
        Ok(json) => json,
        Err(e) => {
            ::log::error!("Failed to serialize records: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match &args.output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, json) {
                ::log::error!("Failed to write {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
            ::log::info!("Saved {} record(s) to {}", records.len(), path.display());
        }
        None => println!("{}", json),
    }

    ExitCode::SUCCESS
}

fn build_scraper(args: &Args) -> Result<Scraper, ScrapeError> {
    let mut scraper = match &args.config {
        Some(path) => Scraper::new().with_config_file(path)?,
        None => Scraper::new(),
    };

    if let Some(base_url) = &args.base_url {
        let mut config = scraper.config().clone();
        config.base_url = base_url.clone();
        // Catch a malformed override before scraping starts
        config.expected_host()?;
        scraper = scraper.with_config(config);
    }
    if let Some(timeout) = args.timeout {
        scraper = scraper.with_timeout(timeout);
    }

    Ok(scraper)
}

async fn scrape_one(scraper: &Scraper, input: &str) -> Result<PatentRecord, ScrapeError> {
    let url = scraper.canonical_url(input)?;
    scraper.scrape(&url).await
}
