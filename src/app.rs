//! Application state and event handling.
//!
//! The application reacts to three kinds of user input: the query text
//! changing, the search being submitted, and a result entry being
//! activated. Handling an event yields a list of display effects for the
//! frontend to apply; handlers never touch the display themselves.
//!
//! Failures never produce an effect: the error is logged and whatever was
//! on display before stays on display.
use crate::catalog::{Episode, LocalShowCatalog, Show, ShowId};
use crate::render;
use crate::seasons::group_by_season;
use tracing::error;

/// User interactions the application reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The search query text changed.
    QueryChanged(String),
    /// The search was submitted with the current query.
    SearchSubmitted,
    /// An entry of the result list was activated. `None` when the
    /// activation did not land on a show entry; such activations are
    /// ignored entirely.
    ShowSelected(Option<ShowId>),
}

/// Display effects produced by handling an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Enable or disable the search submit control.
    SetSubmitEnabled(bool),
    /// Replace the result list display with the given text.
    ShowResults(String),
    /// Replace the show detail and episode displays together. The two
    /// sections only ever change as a pair.
    ShowDetail { show: String, episodes: String },
}

/// What the application currently has on display.
///
/// Rebuilt wholesale from a fresh API response on every render; nothing in
/// here is mutated in place.
#[derive(Debug, Default)]
pub struct AppState {
    /// The current search query text
    pub query: String,
    /// The currently displayed search results, in display order
    pub results: Vec<Show>,
    /// The episode list of the currently displayed show detail
    pub episodes: Vec<Episode>,
}

/// The application: a catalog backend plus the display state.
pub struct App<C: LocalShowCatalog> {
    catalog: C,
    state: AppState,
}

impl<C: LocalShowCatalog> App<C> {
    /// Creates an application with an empty query and nothing on display.
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            state: AppState::default(),
        }
    }

    /// The current display state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Whether the submit control should be enabled.
    ///
    /// False exactly when the query is empty. This is a frontend
    /// affordance only; [`InputEvent::SearchSubmitted`] does not re-check
    /// emptiness.
    pub fn submit_enabled(&self) -> bool {
        !self.state.query.is_empty()
    }

    /// Handles one input event, returning the display effects to apply.
    pub async fn handle(&mut self, event: InputEvent) -> Vec<Effect> {
        match event {
            InputEvent::QueryChanged(query) => {
                self.state.query = query;
                vec![Effect::SetSubmitEnabled(self.submit_enabled())]
            }
            InputEvent::SearchSubmitted => self.search().await,
            InputEvent::ShowSelected(None) => Vec::new(),
            InputEvent::ShowSelected(Some(id)) => self.open_detail(id).await,
        }
    }

    /// The search flow: one catalog call, then a full replace of the
    /// result list.
    async fn search(&mut self) -> Vec<Effect> {
        match self.catalog.search_shows(&self.state.query).await {
            Ok(shows) => {
                let rendered = render::render_show_list(&shows, &self.state.query);
                self.state.results = shows;
                vec![Effect::ShowResults(rendered)]
            }
            Err(err) => {
                error!("search failed: {err}");
                Vec::new()
            }
        }
    }

    /// The detail flow: fetch show metadata and the episode list
    /// concurrently and join them. Only joint success renders; either
    /// failure aborts both sections.
    async fn open_detail(&mut self, id: ShowId) -> Vec<Effect> {
        match tokio::try_join!(self.catalog.show(id), self.catalog.episodes(id)) {
            Ok((show, episodes)) => {
                let seasons = group_by_season(&episodes);
                let effect = Effect::ShowDetail {
                    show: render::render_show_detail(&show),
                    episodes: render::render_seasons(&seasons),
                };
                self.state.episodes = episodes;
                vec![effect]
            }
            Err(err) => {
                error!("detail fetch failed: {err}");
                Vec::new()
            }
        }
    }
}
