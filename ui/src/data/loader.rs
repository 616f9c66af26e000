//! Dataset fetch and decode.
//!
//! The dataset is a static CSV published at a fixed URL. It is fetched at most
//! once per process: `load_dataset` memoizes the decoded rows keyed on the
//! source URL, so every later call (including re-renders racing each other)
//! gets the same shared `Arc` back without touching the network again.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;
use thiserror::Error;

use super::record::SalaryRecord;

/// Upstream location of the salary dataset.
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/vqrca/dashboard_salarios_dados/refs/heads/main/dados-imersao-final.csv";

#[derive(Debug, Error)]
pub enum DataError {
    #[error("dataset fetch failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("dataset decode failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataset write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

static DATASET_CACHE: Lazy<Mutex<HashMap<String, Arc<Vec<SalaryRecord>>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Fetch and decode the dataset, reusing the process-wide cache when the URL
/// has been loaded before.
pub async fn load_dataset(url: &str) -> Result<Arc<Vec<SalaryRecord>>, DataError> {
    if let Some(cached) = cache_lookup(url) {
        return Ok(cached);
    }

    let body = fetch_text(url).await?;
    let records = Arc::new(parse_dataset(&body)?);
    cache_store(url, records.clone());
    Ok(records)
}

/// Decode CSV text into records. Header-driven, so column order in the source
/// file is free to change as long as the names survive.
pub fn parse_dataset(text: &str) -> Result<Vec<SalaryRecord>, DataError> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

async fn fetch_text(url: &str) -> Result<String, DataError> {
    let response = reqwest::get(url).await?.error_for_status()?;
    Ok(response.text().await?)
}

fn cache_lookup(url: &str) -> Option<Arc<Vec<SalaryRecord>>> {
    DATASET_CACHE.lock().ok()?.get(url).cloned()
}

fn cache_store(url: &str, records: Arc<Vec<SalaryRecord>>) {
    if let Ok(mut cache) = DATASET_CACHE.lock() {
        cache.insert(url.to_string(), records);
    }
}
