//! Page state and the transitions driven by catalog results and user actions.

use catalog_client::CatalogErrorKind;
use shared::domain::Movie;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogStatus {
    NotStarted,
    Loading,
    Loaded { count: usize },
    Failed { kind: Option<CatalogErrorKind> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    Escape,
    Backdrop,
    CloseButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Position of the clicked card in the grid, which is also its position in the sequence.
    CardClicked(usize),
    Dismiss(DismissReason),
}

#[derive(Debug)]
pub struct MovieListState {
    status: CatalogStatus,
    movies: Vec<Movie>,
    /// Held by position, so two records sharing an id still open their own details.
    selected: Option<usize>,
}

impl Default for MovieListState {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieListState {
    pub fn new() -> Self {
        Self {
            status: CatalogStatus::NotStarted,
            movies: Vec::new(),
            selected: None,
        }
    }

    pub fn status(&self) -> CatalogStatus {
        self.status
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn selected_movie(&self) -> Option<&Movie> {
        self.movies.get(self.selected?)
    }

    /// Moves out of `NotStarted`. Returns `false` if a load was already started,
    /// so the caller never issues a second fetch.
    pub fn begin_load(&mut self) -> bool {
        if self.status != CatalogStatus::NotStarted {
            return false;
        }
        self.status = CatalogStatus::Loading;
        true
    }

    /// The movie sequence is written once; results arriving outside `Loading` are dropped.
    pub fn apply_catalog_loaded(&mut self, movies: Vec<Movie>) -> bool {
        if self.status != CatalogStatus::Loading {
            tracing::warn!(
                status = ?self.status,
                count = movies.len(),
                "ignoring catalog result outside of an active load"
            );
            return false;
        }
        self.status = CatalogStatus::Loaded {
            count: movies.len(),
        };
        self.movies = movies;
        true
    }

    pub fn apply_catalog_failed(&mut self, kind: Option<CatalogErrorKind>) {
        if self.status != CatalogStatus::Loading {
            tracing::warn!(status = ?self.status, "ignoring catalog failure outside of an active load");
            return;
        }
        self.status = CatalogStatus::Failed { kind };
    }

    pub fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::CardClicked(index) => match self.movies.get(index) {
                Some(movie) => {
                    tracing::debug!(index, movie_id = movie.id.0, "detail overlay opened");
                    self.selected = Some(index);
                }
                None => tracing::warn!(index, "ignoring selection of a card not on the page"),
            },
            UiAction::Dismiss(reason) => {
                if self.selected.take().is_some() {
                    tracing::debug!(?reason, "detail overlay dismissed");
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/reducer_tests.rs"]
mod tests;
