use std::error::Error;
use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::thread;
use std::time::Duration;

use log::{error, info, warn};
use reqwest::blocking::Client;
use serde_json::{Map, Value};

pub const OLINDA_ROOT: &str =
    "https://olinda.bcb.gov.br/olinda/servico/Pix_DadosAbertos/versao/v1/odata";

/// Recognized failure kinds of one fetch.  Both are absorbed at the fetch
/// boundary and only surface in the [FetchOutcome].
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to decode response body as json: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Outcome of one (dataset, month) query.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The CSV file was written with this many data rows.
    Saved { rows: usize },
    /// Valid response with zero records.  Expected for periods the API has
    /// not published yet, not an error.
    Empty,
    /// Transport or decode failure, already logged.
    Failed(FetchError),
}

impl FetchOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, FetchOutcome::Saved { .. })
    }
}

/// Client used for all Olinda queries.
pub fn client() -> Result<Client, Box<dyn Error>> {
    let client = Client::builder().timeout(Duration::from_secs(60)).build()?;
    Ok(client)
}

/// Fetch one query and persist it as CSV, if it returned any records.
///
/// Transport and decode failures are logged and absorbed into the returned
/// [FetchOutcome], as is an empty result.  Only a filesystem failure comes
/// back as `Err`.  Sleeps for `pause` after a successful write.
pub fn fetch_and_save(
    client: &Client,
    url: &str,
    path: &Path,
    pause: Duration,
) -> Result<FetchOutcome, Box<dyn Error>> {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    let rows = match fetch_rows(client, url) {
        Ok(rows) => rows,
        Err(e) => {
            error!("failed to get {}: {}", name, e);
            return Ok(FetchOutcome::Failed(e));
        }
    };
    if rows.is_empty() {
        warn!("0 records for {}, url: {}", name, url);
        return Ok(FetchOutcome::Empty);
    }
    let count = write_csv(&rows, path)?;
    info!("saved {} ({} rows)", name, count);
    thread::sleep(pause);
    Ok(FetchOutcome::Saved { rows: count })
}

fn fetch_rows(client: &Client, url: &str) -> Result<Vec<Map<String, Value>>, FetchError> {
    let body = client.get(url).send()?.error_for_status()?.text()?;
    let payload: Value = serde_json::from_str(&body)?;
    Ok(rows_from_payload(&payload))
}

/// Extract the "value" records of an OData response.  A missing or
/// wrongly-shaped field counts as an empty result, not an error.
pub fn rows_from_payload(payload: &Value) -> Vec<Map<String, Value>> {
    match payload.get("value").and_then(Value::as_array) {
        Some(records) => records.iter().filter_map(Value::as_object).cloned().collect(),
        None => Vec::new(),
    }
}

/// Write the records to `path`, one column per key of the first record.
/// The file gets a BOM so spreadsheet tools pick up the UTF-8 encoding.
/// Returns the number of data rows written.
pub fn write_csv(rows: &[Map<String, Value>], path: &Path) -> Result<usize, Box<dyn Error>> {
    let columns: Vec<String> = match rows.first() {
        Some(first) => first.keys().cloned().collect(),
        None => return Ok(0),
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let mut file = File::create(path)?;
    file.write_all(b"\xEF\xBB\xBF")?;
    let mut wtr = csv::Writer::from_writer(file);
    wtr.write_record(&columns)?;
    for row in rows {
        wtr.write_record(
            columns
                .iter()
                .map(|c| field(row.get(c).unwrap_or(&Value::Null))),
        )?;
    }
    wtr.flush()?;
    Ok(rows.len())
}

fn field(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
