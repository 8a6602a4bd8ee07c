//! Show catalog access.
//!
//! This module provides the domain structures for shows and episodes as
//! delivered by the remote catalog, as well as the trait implemented by
//! catalog backends.
mod tvmaze;
mod wire;

pub use tvmaze::TvMazeCatalog;

use std::fmt;
use thiserror::Error;

/// Errors that can occur while talking to the show catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The network request itself failed
    #[error("Request failed: {0}")]
    Request(String),

    /// The response body was not the expected JSON
    #[error("Failed to parse API response: {0}")]
    Parse(String),
}

/// Identifier of a show within the remote catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShowId(pub u64);

impl fmt::Display for ShowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A TV series record from the remote catalog.
///
/// Sourced verbatim from the API and never mutated; each render cycle
/// replaces the previously displayed records with a fresh response.
#[derive(Debug, Clone, PartialEq)]
pub struct Show {
    /// Catalog identifier of the show
    pub id: ShowId,
    /// The show title
    pub name: String,
    /// URL of the medium-sized cover image, when the catalog has one
    pub image: Option<String>,
    /// Summary as delivered by the API; HTML-bearing, sanitized at render time
    pub summary: Option<String>,
    /// Premiere date string (e.g. "2008-01-20")
    pub premiered: Option<String>,
    /// Running status (e.g. "Ended")
    pub status: Option<String>,
    /// Show type (e.g. "Scripted")
    pub kind: Option<String>,
    /// Genres in catalog order
    pub genres: Vec<String>,
}

/// A single episode record, scoped to a season.
#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    /// The episode title
    pub name: String,
    /// The season number this episode belongs to
    pub season: u64,
    /// URL of the medium-sized episode image, when the catalog has one
    pub image: Option<String>,
    /// Summary as delivered by the API; HTML-bearing, sanitized at render time
    pub summary: Option<String>,
}

/// Trait for backends that can query the show catalog.
///
/// The application flows are written against this trait so they can be
/// exercised with a stub backend in tests. Uses `trait_variant::make` to
/// generate a `Send`-bound async variant, [`ShowCatalog`].
#[trait_variant::make(ShowCatalog: Send)]
pub trait LocalShowCatalog {
    /// Searches the catalog, returning matching shows in the catalog's
    /// relevance order.
    async fn search_shows(&self, query: &str) -> Result<Vec<Show>, CatalogError>;

    /// Fetches the metadata of a single show.
    async fn show(&self, id: ShowId) -> Result<Show, CatalogError>;

    /// Fetches the full episode list of a show, in catalog order.
    async fn episodes(&self, id: ShowId) -> Result<Vec<Episode>, CatalogError>;
}
