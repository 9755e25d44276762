use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::config::{normalize_api_url, Config};
use crate::models::{MovieDetails, MovieId, MovieSummary};

/// Read side of the movie catalog backend.
///
/// Implementations never fail: a request that cannot be completed is logged
/// and reported as the empty value of the operation, so callers can render
/// without branching on errors.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Movies whose title contains `title`. Empty on failure.
    async fn search_movies(&self, title: &str) -> Vec<MovieSummary>;
    /// Full detail payload. `None` on failure.
    async fn movie_details(&self, id: &MovieId) -> Option<MovieDetails>;
    /// Movies sharing a genre or an actor with `id`. Empty on failure.
    async fn similar_movies(&self, id: &MovieId) -> Vec<MovieSummary>;
    /// Whole catalog. `None` on failure, as opposed to an empty catalog.
    async fn all_movies(&self) -> Option<Vec<MovieSummary>>;
}

#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = normalize_api_url(base_url)?;
        let user_agent = format!("filmoteka/{}", env!("CARGO_PKG_VERSION"));
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .context("Failed to build catalog HTTP client")?;
        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);
        let res = self
            .client
            .get(&url)
            .send()
            .await
            .context("request failed")?;
        let status = res.status();
        let bytes = res.bytes().await.context("reading body failed")?;
        if !status.is_success() {
            return Err(anyhow!(
                "{} -> status {}: {}",
                url,
                status,
                String::from_utf8_lossy(&bytes)
            ));
        }
        serde_json::from_slice(&bytes).with_context(|| format!("{url} -> JSON parse failed"))
    }
}

fn movie_path(id: &MovieId) -> String {
    format!("/api/movies/{}", urlencoding::encode(&id.to_string()))
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn search_movies(&self, title: &str) -> Vec<MovieSummary> {
        let path = format!("/api/movies?title={}", urlencoding::encode(title));
        match self.get_json::<Vec<MovieSummary>>(&path).await {
            Ok(movies) => {
                info!("Search '{}' returned {} movies", title, movies.len());
                movies
            }
            Err(e) => {
                warn!("Movie search failed: {:#}", e);
                Vec::new()
            }
        }
    }

    async fn movie_details(&self, id: &MovieId) -> Option<MovieDetails> {
        match self.get_json(&movie_path(id)).await {
            Ok(details) => Some(details),
            Err(e) => {
                warn!("Fetching details for movie {} failed: {:#}", id, e);
                None
            }
        }
    }

    async fn similar_movies(&self, id: &MovieId) -> Vec<MovieSummary> {
        let path = format!("{}/similar", movie_path(id));
        match self.get_json(&path).await {
            Ok(movies) => movies,
            Err(e) => {
                warn!("Fetching movies similar to {} failed: {:#}", id, e);
                Vec::new()
            }
        }
    }

    async fn all_movies(&self) -> Option<Vec<MovieSummary>> {
        match self.get_json::<Vec<MovieSummary>>("/api/movies/all").await {
            Ok(movies) => {
                info!("Loaded {} movies from catalog", movies.len());
                Some(movies)
            }
            Err(e) => {
                warn!("Loading the full catalog failed: {:#}", e);
                None
            }
        }
    }
}
