/// TVmaze catalog backend.
use super::wire::{TvMazeEpisode, TvMazeSearchResult, TvMazeShow};
use super::{CatalogError, Episode, LocalShowCatalog, Show, ShowId};
use serde::de::DeserializeOwned;

const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

/// Catalog backend for the TVmaze API.
///
/// This backend fetches show and episode information from
/// https://api.tvmaze.com. Requests are plain GETs with no retries,
/// no authentication and no timeout beyond the client default.
pub struct TvMazeCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl TvMazeCatalog {
    /// Creates a new TVmaze catalog instance against the public API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a catalog instance against a custom base URL.
    ///
    /// Used to point the client at a mock server in tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Issues a GET request for `{base_url}/{path}` and parses the body as JSON.
    ///
    /// The body is parsed regardless of the HTTP status code, so an error
    /// status surfaces as a parse failure of its error body rather than as
    /// a dedicated error variant.
    async fn fetch_json<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, CatalogError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

impl Default for TvMazeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalShowCatalog for TvMazeCatalog {
    async fn search_shows(&self, query: &str) -> Result<Vec<Show>, CatalogError> {
        let results: Vec<TvMazeSearchResult> =
            self.fetch_json("search/shows", &[("q", query)]).await?;

        // Unwrap the { score, show } wrappers, keeping the API's relevance order
        Ok(results.into_iter().map(|r| r.show.into()).collect())
    }

    async fn show(&self, id: ShowId) -> Result<Show, CatalogError> {
        let show: TvMazeShow = self.fetch_json(&format!("shows/{id}"), &[]).await?;
        Ok(show.into())
    }

    async fn episodes(&self, id: ShowId) -> Result<Vec<Episode>, CatalogError> {
        let episodes: Vec<TvMazeEpisode> = self
            .fetch_json(&format!("shows/{id}/episodes"), &[])
            .await?;

        Ok(episodes.into_iter().map(Into::into).collect())
    }
}
