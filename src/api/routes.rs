use axum::{
    routing::{get, post},
    Router,
    extract::{Json, Query, State},
};
use tower_http::cors::{CorsLayer, Any};
use chrono::Utc;
use tracing::{error, info};

use crate::error::{Result, AppError};
use crate::api::models::{
    HealthResponse, JobSearchRequest, JobSearchResponse, SimpleSearchQuery,
    SupportedSitesResponse, TestResponse,
};
use crate::scrape::{normalize_row, probe_engine, scrape_jobs, JobRow, SearchParams};
use crate::AppState;

const SUPPORTED_SITES: [&str; 5] = ["indeed", "linkedin", "glassdoor", "google", "ziprecruiter"];

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/test", get(test_scraper))
        .route("/search-jobs-simple", get(search_jobs_simple))
        .route("/search-jobs", post(search_jobs))
        .route("/supported-sites", get(supported_sites))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn health_check() -> Json<HealthResponse> {
    let working_directory = std::env::current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
        working_directory,
    })
}

/// Checks whether the scraping engine is reachable. Failures come back as a
/// diagnostic payload, never as an error status.
async fn test_scraper(State(state): State<AppState>) -> Json<TestResponse> {
    match probe_engine(&state.config.engine_url).await {
        Ok(()) => {
            info!("Scraping engine reachable at {}", state.config.engine_url);
            Json(TestResponse {
                status: "success",
                message: "Scraping engine is working correctly".to_string(),
                scraper_available: true,
            })
        }
        Err(e) => {
            error!("Scraping engine test failed: {}", e);
            Json(TestResponse {
                status: "error",
                message: format!("Scraping engine test failed: {}", e),
                scraper_available: false,
            })
        }
    }
}

async fn search_jobs_simple(
    State(state): State<AppState>,
    Query(query): Query<SimpleSearchQuery>,
) -> Result<Json<JobSearchResponse>> {
    let search_term = query
        .search_term
        .ok_or_else(|| AppError::Validation("search_term is required".to_string()))?;
    if !(1..=20).contains(&query.results_wanted) {
        return Err(AppError::Validation(
            "results_wanted must be between 1 and 20".to_string(),
        ));
    }

    info!("Searching for: {} in {}", search_term, query.location);

    let params = SearchParams {
        search_term,
        location: query.location,
        site_name: vec!["indeed".to_string()],
        results_wanted: query.results_wanted,
        is_remote: false,
    };

    let rows = scrape_jobs(&state.config.engine_url, &params)
        .await
        .map_err(|e| {
            error!("Search failed: {}", e);
            AppError::Scrape(format!("Search failed: {}", e))
        })?;

    let response = job_response(rows, "No jobs found for the search criteria");
    info!("Found {} jobs", response.total_jobs);
    Ok(Json(response))
}

async fn search_jobs(
    State(state): State<AppState>,
    Json(request): Json<JobSearchRequest>,
) -> Result<Json<JobSearchResponse>> {
    if !(1..=50).contains(&request.results_wanted) {
        return Err(AppError::Validation(
            "results_wanted must be between 1 and 50".to_string(),
        ));
    }

    info!("POST search: {} in {}", request.search_term, request.location);

    let params = SearchParams {
        search_term: request.search_term,
        location: request.location,
        site_name: request.site_name,
        results_wanted: request.results_wanted,
        is_remote: request.is_remote,
    };

    let rows = scrape_jobs(&state.config.engine_url, &params)
        .await
        .map_err(|e| {
            error!("POST search failed: {}", e);
            AppError::Scrape(e.to_string())
        })?;

    Ok(Json(job_response(rows, "No jobs found")))
}

async fn supported_sites() -> Json<SupportedSitesResponse> {
    Json(SupportedSitesResponse {
        supported_sites: SUPPORTED_SITES.to_vec(),
        note: "Indeed is most reliable for testing",
    })
}

fn job_response(mut rows: Vec<JobRow>, empty_message: &str) -> JobSearchResponse {
    if rows.is_empty() {
        return JobSearchResponse {
            success: true,
            message: empty_message.to_string(),
            total_jobs: 0,
            jobs: Vec::new(),
        };
    }

    for row in &mut rows {
        normalize_row(row);
    }

    JobSearchResponse {
        success: true,
        message: format!("Found {} jobs", rows.len()),
        total_jobs: rows.len(),
        jobs: rows,
    }
}
