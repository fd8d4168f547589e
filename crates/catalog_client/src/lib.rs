//! Client for the external movie catalog's popular listing and its image host.

use std::{collections::HashSet, fmt};

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{Movie, DEFAULT_IMAGE_BASE_URL},
    protocol::PopularMoviesResponse,
};
use tracing::{debug, info, warn};

pub mod error;
pub use error::{CatalogError, CatalogErrorKind};

pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";
/// Display locale requested from the catalog. Not configurable.
pub const CATALOG_LANGUAGE: &str = "ko-KR";
/// Only the first page of the popular listing is ever requested.
pub const POPULAR_PAGE: u32 = 1;

#[derive(Clone)]
pub struct CatalogConfig {
    pub api_base_url: String,
    pub image_base_url: String,
    pub api_key: String,
}

impl CatalogConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    pub fn with_image_base_url(mut self, image_base_url: impl Into<String>) -> Self {
        self.image_base_url = image_base_url.into();
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            api_key: String::new(),
        }
    }
}

impl fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.api_key.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };
        f.debug_struct("CatalogConfig")
            .field("api_base_url", &self.api_base_url)
            .field("image_base_url", &self.image_base_url)
            .field("api_key", &api_key)
            .finish()
    }
}

/// Seam between the app and the network, so the UI can be driven by fakes.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Page one of the popular listing, in catalog rank order.
    async fn popular_movies(&self) -> Result<Vec<Movie>, CatalogError>;
    async fn poster_bytes(&self, poster_url: &str) -> Result<Vec<u8>, CatalogError>;
    fn image_base_url(&self) -> &str;
}

pub struct CatalogClient {
    http: Client,
    config: CatalogConfig,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_http_client(Client::new(), config)
    }

    pub fn with_http_client(http: Client, config: CatalogConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    fn popular_endpoint(&self) -> String {
        format!(
            "{}/movie/popular",
            self.config.api_base_url.trim_end_matches('/')
        )
    }

    /// The request URL carries the API key, so transport errors are stripped of it.
    pub async fn fetch_popular_page(&self) -> Result<PopularMoviesResponse, CatalogError> {
        let endpoint = self.popular_endpoint();
        debug!(%endpoint, language = CATALOG_LANGUAGE, page = POPULAR_PAGE, "requesting popular movies");

        let response = self
            .http
            .get(&endpoint)
            .query(&[
                ("api_key", self.config.api_key.as_str()),
                ("language", CATALOG_LANGUAGE),
            ])
            .query(&[("page", POPULAR_PAGE)])
            .send()
            .await
            .map_err(|err| CatalogError::Transport(err.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| CatalogError::Transport(err.without_url()))?;
        if !status.is_success() {
            return Err(CatalogError::from_status(status, &body));
        }

        serde_json::from_str(&body).map_err(CatalogError::Parse)
    }
}

#[async_trait]
impl MovieCatalog for CatalogClient {
    async fn popular_movies(&self) -> Result<Vec<Movie>, CatalogError> {
        let page = self.fetch_popular_page().await?;

        let mut seen = HashSet::with_capacity(page.results.len());
        if let Some(duplicate) = page.results.iter().find(|m| !seen.insert(m.id)) {
            warn!(movie_id = duplicate.id.0, "catalog page contains a duplicate movie id");
        }

        info!(
            page = page.page,
            count = page.results.len(),
            total_results = ?page.total_results,
            "popular movies fetched"
        );
        Ok(page.results)
    }

    async fn poster_bytes(&self, poster_url: &str) -> Result<Vec<u8>, CatalogError> {
        let response = self
            .http
            .get(poster_url)
            .send()
            .await
            .map_err(CatalogError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::from_status(status, ""));
        }

        let bytes = response.bytes().await.map_err(CatalogError::Transport)?;
        Ok(bytes.to_vec())
    }

    fn image_base_url(&self) -> &str {
        &self.config.image_base_url
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
