use std::error::Error;
use std::path::Path;
use std::time::Duration;

use log::info;
use reqwest::blocking::Client;

use crate::db::pix::lib_olinda::{fetch_and_save, FetchOutcome};
use crate::db::pix::PixDataset;
use crate::interval::month::Month;

pub struct CollectionConfig {
    /// First year to collect, inclusive.
    pub start_year: i16,
    /// Last year to collect, inclusive.
    pub end_year: i16,
    /// Pause after each successful download.
    pub pause: Duration,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        CollectionConfig {
            start_year: 2023,
            end_year: 2025,
            pause: Duration::from_millis(250),
        }
    }
}

/// Download every (dataset, month) pair of the configured range, in order.
///
/// Failed or empty queries don't stop the run; their outcomes are collected
/// in the returned vector, in call order.  Only a filesystem write failure
/// aborts.
pub fn run_collection(
    client: &Client,
    config: &CollectionConfig,
    datasets: &[&dyn PixDataset],
) -> Result<Vec<FetchOutcome>, Box<dyn Error>> {
    let mut outcomes: Vec<FetchOutcome> = Vec::new();
    for year in config.start_year..=config.end_year {
        for m in 1..=12 {
            let month = Month::new(year, m);
            info!("collecting PIX data for {} ...", month);
            for dataset in datasets {
                let url = dataset.url(&month);
                let filename = dataset.filename(&month);
                let outcome = fetch_and_save(client, &url, Path::new(&filename), config.pause)?;
                outcomes.push(outcome);
            }
        }
    }
    info!("collection done; some queries may have returned empty results or errors");
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pix::lib_olinda;
    use std::fs;

    /// Points at a closed local port, so every fetch fails at the
    /// transport level.
    struct UnreachableDataset {
        base_dir: String,
    }

    impl PixDataset for UnreachableDataset {
        fn url(&self, month: &Month) -> String {
            format!(
                "http://127.0.0.1:9/odata/Dataset(Database=@Database)?@Database='{}'",
                month.yyyymm()
            )
        }

        fn filename(&self, month: &Month) -> String {
            format!("{}/dataset_{}.csv", self.base_dir, month.yyyymm())
        }
    }

    #[test]
    fn test_one_call_per_month() -> Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let dataset = UnreachableDataset {
            base_dir: dir.path().to_str().unwrap().to_string(),
        };
        let config = CollectionConfig {
            start_year: 2024,
            end_year: 2024,
            pause: Duration::ZERO,
        };
        let client = lib_olinda::client()?;
        let outcomes = run_collection(&client, &config, &[&dataset])?;
        assert_eq!(outcomes.len(), 12);
        assert!(outcomes
            .iter()
            .all(|o| matches!(o, FetchOutcome::Failed(_))));
        // failures never leave files behind
        assert_eq!(fs::read_dir(dir.path())?.count(), 0);
        Ok(())
    }

    #[test]
    fn test_default_config() {
        let config = CollectionConfig::default();
        assert_eq!(config.start_year, 2023);
        assert_eq!(config.end_year, 2025);
        assert_eq!(config.pause, Duration::from_millis(250));
    }
}
