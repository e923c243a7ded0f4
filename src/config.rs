//! Runtime configuration.
//!
//! Values come from, in order of precedence: the first command-line argument,
//! environment variables, built-in defaults.

use std::path::PathBuf;

/// Listing endpoint used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://dummyjson.com/products";

const API_URL_VAR: &str = "PRODUCTS_API_URL";
const LOG_FILE_VAR: &str = "PRODUCTS_LOG_FILE";
const LOG_FILE_NAME: &str = "product-photos.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Endpoint returning the product listing JSON.
    pub api_url: String,
    /// Where log records go while the terminal is in raw mode.
    pub log_file: PathBuf,
}

impl Config {
    /// Resolve from the process arguments and environment.
    pub fn load() -> Self {
        Self::resolve(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Resolve from explicit arguments (program name already stripped) and an
    /// environment lookup.
    pub fn resolve<I, F>(mut args: I, env: F) -> Self
    where
        I: Iterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let api_url = args
            .next()
            .or_else(|| env(API_URL_VAR))
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.into());

        let log_file = env(LOG_FILE_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE_NAME));

        Self { api_url, log_file }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
