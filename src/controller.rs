//! Cascade controller
//!
//! Keeps the drama, season and episode selectors and the loaded episode view
//! consistent. A change at one level repopulates every dependent level and
//! asks for an episode reload. Reloads are numbered; a response is applied
//! only if it answers the most recent request, so a slow earlier fetch can
//! never overwrite a newer selection.

use tracing::{debug, warn};

use crate::api::{DataClient, LoadError};
use crate::models::{Catalog, EpisodeData};
use crate::selection::{
    drama_options, episode_options, season_options, select_drama, select_episode, select_season,
    Selection, SelectionWidget,
};
use crate::view::EpisodeView;

/// A user-initiated change at one selection level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    DramaChanged,
    SeasonChanged,
    EpisodeChanged,
}

/// An episode fetch the caller must perform and report back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    /// Sequence number to pass to [`Cascade::apply_episode`]
    pub id: u64,
    /// Reference to fetch
    pub reference: String,
}

/// Selection cascade over three selectors of type `W`
#[derive(Debug)]
pub struct Cascade<W> {
    catalog: Option<Catalog>,
    drama: W,
    season: W,
    episode: W,
    view: EpisodeView,
    latest: u64,
    pending: Option<u64>,
}

impl<W: SelectionWidget> Cascade<W> {
    /// Create a cascade with no catalog and the empty view
    pub fn new(drama: W, season: W, episode: W) -> Self {
        Self {
            catalog: None,
            drama,
            season,
            episode,
            view: EpisodeView::empty(),
            latest: 0,
            pending: None,
        }
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    pub fn view(&self) -> &EpisodeView {
        &self.view
    }

    /// Mutable view access, for toggling cards
    pub fn view_mut(&mut self) -> &mut EpisodeView {
        &mut self.view
    }

    pub fn drama_widget(&self) -> &W {
        &self.drama
    }

    pub fn season_widget(&self) -> &W {
        &self.season
    }

    pub fn episode_widget(&self) -> &W {
        &self.episode
    }

    pub fn drama_widget_mut(&mut self) -> &mut W {
        &mut self.drama
    }

    pub fn season_widget_mut(&mut self) -> &mut W {
        &mut self.season
    }

    pub fn episode_widget_mut(&mut self) -> &mut W {
        &mut self.episode
    }

    /// Whether a reload is in flight
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Effective selection, derived fresh from the widgets
    pub fn selection(&self) -> Selection<'_> {
        Selection::derive(
            self.catalog.as_ref(),
            self.drama.selected_value(),
            self.season.selected_value(),
            self.episode.selected_value(),
        )
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Install the outcome of the catalog load and populate every level.
    ///
    /// A failed or empty catalog leaves all selectors empty and shows the
    /// empty view.
    pub fn install_catalog(&mut self, result: Result<Catalog, LoadError>) -> Option<LoadRequest> {
        self.catalog = match result {
            Ok(catalog) if !catalog.is_empty() => Some(catalog),
            Ok(_) => {
                warn!("catalog lists no dramas");
                None
            }
            Err(e) => {
                warn!("catalog load failed: {}", e);
                None
            }
        };

        self.drama.set_options(drama_options(self.catalog.as_ref()));
        self.repopulate_seasons();
        self.repopulate_episodes();
        self.request_episode()
    }

    /// React to a change event, returning the reload to perform
    pub fn handle(&mut self, event: SelectionEvent) -> Option<LoadRequest> {
        debug!(?event, "selection changed");
        match event {
            SelectionEvent::DramaChanged => {
                self.repopulate_seasons();
                self.repopulate_episodes();
            }
            SelectionEvent::SeasonChanged => {
                self.repopulate_episodes();
            }
            SelectionEvent::EpisodeChanged => {}
        }
        self.request_episode()
    }

    /// Deliver the outcome of a reload.
    ///
    /// Returns false when the response is stale and was discarded.
    pub fn apply_episode(&mut self, id: u64, result: Result<EpisodeData, LoadError>) -> bool {
        if id != self.latest {
            debug!(id, latest = self.latest, "discarding stale episode response");
            return false;
        }

        self.pending = None;
        self.view = match result {
            Ok(data) => EpisodeView::render(Some(&data)),
            Err(e) => {
                warn!("episode load failed: {}", e);
                EpisodeView::empty()
            }
        };
        true
    }

    fn repopulate_seasons(&mut self) {
        let drama = select_drama(self.catalog.as_ref(), self.drama.selected_value());
        self.season.set_options(season_options(drama));
    }

    fn repopulate_episodes(&mut self) {
        let drama = select_drama(self.catalog.as_ref(), self.drama.selected_value());
        let season = select_season(drama, self.season.selected_value());
        self.episode.set_options(episode_options(season));
    }

    /// Start a reload of the effective episode.
    ///
    /// Without a data reference the empty view is shown at once; the
    /// sequence still advances so in-flight responses are dropped.
    fn request_episode(&mut self) -> Option<LoadRequest> {
        self.latest += 1;
        let id = self.latest;

        let drama = select_drama(self.catalog.as_ref(), self.drama.selected_value());
        let season = select_season(drama, self.season.selected_value());
        let reference = select_episode(season, self.episode.selected_value())
            .and_then(|e| e.reference())
            .map(str::to_string);

        match reference {
            Some(reference) => {
                self.pending = Some(id);
                Some(LoadRequest { id, reference })
            }
            None => {
                self.pending = None;
                self.view = EpisodeView::empty();
                None
            }
        }
    }

    // -------------------------------------------------------------------------
    // Awaiting variants
    // -------------------------------------------------------------------------

    /// Load the catalog and the initially selected episode
    pub async fn bootstrap(&mut self, client: &DataClient) {
        let catalog = client.load_catalog().await;
        let request = self.install_catalog(catalog);
        self.run(request, client).await;
    }

    /// Handle a change event and await the resulting reload
    pub async fn dispatch(&mut self, event: SelectionEvent, client: &DataClient) {
        let request = self.handle(event);
        self.run(request, client).await;
    }

    async fn run(&mut self, request: Option<LoadRequest>, client: &DataClient) {
        if let Some(request) = request {
            let result = client.load_episode(&request.reference).await;
            self.apply_episode(request.id, result);
        }
    }
}
