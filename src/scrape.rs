use reqwest::{Client, ClientBuilder};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use once_cell::sync::Lazy;
use crate::error::{AppError, Result};

/// One scraped job listing. The engine decides the field set, so rows are
/// kept as open string-to-value mappings rather than a fixed struct.
pub type JobRow = serde_json::Map<String, Value>;

// Create a static client to reuse connections. Only a connect timeout is
// set: the engine manages its own per-site timeouts, and a slow scrape is
// allowed to block its request.
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to build HTTP client")
});

/// Parameters forwarded to the engine's scrape call. Empty/falsy fields are
/// omitted from the wire so the engine applies its own defaults.
#[derive(Debug, Serialize)]
pub struct SearchParams {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search_term: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub site_name: Vec<String>,
    pub results_wanted: u32,
    #[serde(skip_serializing_if = "is_false")]
    pub is_remote: bool,
}

fn is_false(v: &bool) -> bool {
    !v
}

/// Calls the external engine and returns the scraped rows. A JSON null body
/// counts as an empty result set.
pub async fn scrape_jobs(engine_url: &str, params: &SearchParams) -> Result<Vec<JobRow>> {
    let response = CLIENT
        .post(format!("{}/scrape", engine_url))
        .json(params)
        .send()
        .await?
        .error_for_status()?;

    let body: Value = response.json().await?;
    match body {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(row) => Ok(row),
                other => Err(AppError::Scrape(format!(
                    "Engine returned a non-object row: {}",
                    other
                ))),
            })
            .collect(),
        other => Err(AppError::Scrape(format!(
            "Unexpected engine response shape: {}",
            other
        ))),
    }
}

/// Probes the engine's health endpoint. Used by the diagnostic route only.
pub async fn probe_engine(engine_url: &str) -> Result<()> {
    CLIENT
        .get(format!("{}/health", engine_url))
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}

/// Replaces the engine's tabular missing-value markers with explicit null.
/// Everything else passes through untouched.
pub fn normalize_row(row: &mut JobRow) {
    for value in row.values_mut() {
        if is_missing(value) {
            *value = Value::Null;
        }
    }
}

// Sentinels the engine's data layer emits for absent cells.
const NAN_MARKERS: [&str; 4] = ["NaN", "nan", "NaT", "<NA>"];

fn is_missing(value: &Value) -> bool {
    match value {
        Value::String(s) => NAN_MARKERS.contains(&s.as_str()),
        Value::Number(n) => n.as_f64().is_some_and(|f| !f.is_finite()),
        _ => false,
    }
}
