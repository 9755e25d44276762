use anyhow::{bail, Context, Result};
use reqwest::Url;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_LOG_FILE: &str = "filmoteka.log";

pub const API_URL_VAR: &str = "FILMOTEKA_API_URL";
pub const LOG_FILE_VAR: &str = "FILMOTEKA_LOG_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backend base URL without a trailing slash.
    pub api_url: String,
    pub log_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let raw_url = lookup(API_URL_VAR)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = normalize_api_url(&raw_url)
            .with_context(|| format!("Invalid {API_URL_VAR} value '{raw_url}'"))?;
        let log_file = lookup(LOG_FILE_VAR)
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
        Ok(Self { api_url, log_file })
    }
}

pub(crate) fn normalize_api_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed)?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("unsupported scheme '{}'", url.scheme());
    }
    Ok(trimmed.to_string())
}
