use std::env;

use crate::constants::{DEFAULT_FEED_TITLE, DEFAULT_PAGE_SIZE};

/// Feed pipeline configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub page_size: usize,
    pub enable_logging: bool,
    pub feed_title: String,
}

impl FeedConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        let page_size = env::var("FEED_PAGE_SIZE")
            .unwrap_or_else(|_| DEFAULT_PAGE_SIZE.to_string())
            .parse()
            .map_err(|_| "Invalid FEED_PAGE_SIZE")?;

        let enable_logging = env::var("FEED_ENABLE_LOGGING")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .map_err(|_| "Invalid FEED_ENABLE_LOGGING")?;

        let feed_title =
            env::var("FEED_TITLE").unwrap_or_else(|_| DEFAULT_FEED_TITLE.to_string());

        Ok(FeedConfig {
            page_size,
            enable_logging,
            feed_title,
        })
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            page_size: DEFAULT_PAGE_SIZE,
            enable_logging: true,
            feed_title: DEFAULT_FEED_TITLE.to_string(),
        }
    }
}
