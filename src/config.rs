use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use crate::error::{AppError, Result};

const DEFAULT_ENGINE_URL: &str = "http://127.0.0.1:8081";

#[derive(Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    /// Base URL of the external job-scraping engine.
    pub engine_url: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        let engine_url = env::var("SCRAPER_ENGINE_URL")
            .unwrap_or_else(|_| DEFAULT_ENGINE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        // Load server configuration with defaults
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::Config(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::Config(format!("Invalid host address: {}", e)))?;

        let server_addr = SocketAddr::new(ip, port);

        Ok(Config {
            server_addr,
            engine_url,
        })
    }
}
