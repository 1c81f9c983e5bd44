use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::scrape::JobRow;

#[derive(Debug, Deserialize)]
pub struct JobSearchRequest {
    pub search_term: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_site_name")]
    pub site_name: Vec<String>,
    #[serde(default = "default_results_wanted")]
    pub results_wanted: u32,
    #[serde(default)]
    pub is_remote: bool,
}

fn default_site_name() -> Vec<String> {
    vec!["indeed".to_string()]
}

fn default_results_wanted() -> u32 {
    10
}

#[derive(Debug, Deserialize)]
pub struct SimpleSearchQuery {
    // Option so a missing parameter surfaces as a 422, not an extractor 400.
    pub search_term: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_simple_results")]
    pub results_wanted: u32,
}

fn default_simple_results() -> u32 {
    5
}

#[derive(Serialize)]
pub struct JobSearchResponse {
    pub success: bool,
    pub message: String,
    pub total_jobs: usize,
    pub jobs: Vec<JobRow>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
    pub working_directory: String,
}

#[derive(Serialize)]
pub struct TestResponse {
    pub status: &'static str,
    pub message: String,
    pub scraper_available: bool,
}

#[derive(Serialize)]
pub struct SupportedSitesResponse {
    pub supported_sites: Vec<&'static str>,
    pub note: &'static str,
}
