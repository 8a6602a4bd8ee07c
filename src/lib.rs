//! showhunt - search the TVmaze show directory from your terminal
//!
//! This library provides the core functionality of a thin client over the
//! TVmaze HTTP API: a search flow, a detail flow that fetches show
//! metadata and episodes together, and renderers that turn the responses
//! into display text. All data originates remotely; nothing is persisted.

mod app;
mod catalog;
mod render;
mod seasons;

pub use app::{App, AppState, Effect, InputEvent};
pub use catalog::{
    CatalogError, Episode, LocalShowCatalog, Show, ShowCatalog, ShowId, TvMazeCatalog,
};
pub use render::{render_episode, render_seasons, render_show_detail, render_show_list};
pub use seasons::{SeasonGroup, group_by_season};

use thiserror::Error;

/// Top-level error type for showhunt operations
#[derive(Debug, Error)]
pub enum ShowHuntError {
    /// Error while talking to the show catalog
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Error during terminal interaction
    #[error("Terminal interaction error: {0}")]
    Prompt(#[from] dialoguer::Error),
}
