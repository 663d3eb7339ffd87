use std::error::Error;

use clap::Parser;
use pix_archive::db::pix::collection::{run_collection, CollectionConfig};
use pix_archive::db::pix::{lib_olinda, PixDataset};
use pix_archive::db::prod_db::ProdDb;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// First year to collect, inclusive
    #[arg(long, default_value_t = 2023)]
    start_year: i16,

    /// Last year to collect, inclusive
    #[arg(long, default_value_t = 2025)]
    end_year: i16,
}

/// Pull the three PIX open-data datasets for every month of the range.
/// Individual months that fail or come back empty are logged and skipped;
/// the job still exits 0.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let client = lib_olinda::client()?;

    let statistics = ProdDb::pix_statistics();
    let keys = ProdDb::pix_keys();
    let municipalities = ProdDb::pix_municipalities();
    let datasets: [&dyn PixDataset; 3] = [&statistics, &keys, &municipalities];

    let config = CollectionConfig {
        start_year: args.start_year,
        end_year: args.end_year,
        ..Default::default()
    };
    run_collection(&client, &config, &datasets)?;

    Ok(())
}
