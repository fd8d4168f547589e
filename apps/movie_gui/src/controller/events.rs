//! Backend-to-UI events and error modeling for the movie list controller.

use catalog_client::{CatalogError, CatalogErrorKind};
use shared::domain::{Movie, MovieId};

use crate::media::PreviewImage;

pub enum UiEvent {
    CatalogLoaded(Vec<Movie>),
    CatalogFailed(UiError),
    PosterLoaded {
        movie_id: MovieId,
        image: PreviewImage,
    },
    PosterFailed {
        movie_id: MovieId,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    CatalogFetch,
    PosterFetch,
}

#[derive(Debug, Clone)]
pub struct UiError {
    kind: Option<CatalogErrorKind>,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_catalog(context: UiErrorContext, err: &CatalogError) -> Self {
        Self {
            kind: Some(err.kind()),
            context,
            message: err.to_string(),
        }
    }

    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            kind: None,
            context,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> Option<CatalogErrorKind> {
        self.kind
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn kind_label(kind: Option<CatalogErrorKind>) -> &'static str {
    match kind {
        Some(CatalogErrorKind::NetworkFailure) => "network failure",
        Some(CatalogErrorKind::ParseOrTransportFailure) => "parse or transport failure",
        None => "unexpected failure",
    }
}
