use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "patent-scrape")]
#[command(about = "Extracts structured records from patent pages")]
#[command(version)]
pub struct Args {
    /// Patent page URLs or bare identifiers (e.g. US1234567B2)
    #[arg(required = true)]
    pub patents: Vec<String>,

    /// Write JSON to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Override the patent site base URL
    #[arg(long)]
    pub base_url: Option<String>,
}
