//! Backend worker: a tokio runtime on its own thread that serves UI commands.
//!
//! The UI side owns the only `Receiver<UiEvent>`. Once it is dropped every send
//! from here fails, and late results are discarded instead of reaching a gone view.

use std::{sync::Arc, thread};

use catalog_client::MovieCatalog;
use crossbeam_channel::{Receiver, Sender, TrySendError};
use shared::domain::MovieId;
use tracing::{debug, error, info, warn};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{kind_label, UiError, UiErrorContext, UiEvent};
use crate::media::decode_poster;

pub fn launch(
    catalog: Arc<dyn MovieCatalog>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let ui_error = UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("failed to build backend runtime: {err}"),
                );
                error!(context = ?ui_error.context(), "{}", ui_error.message());
                deliver(&ui_tx, UiEvent::CatalogFailed(ui_error));
                return;
            }
        };

        runtime.block_on(async move {
            info!("backend worker ready");
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::FetchPopularMovies => {
                        tokio::spawn(fetch_popular_movies(catalog.clone(), ui_tx.clone()));
                    }
                    BackendCommand::FetchPoster {
                        movie_id,
                        poster_url,
                    } => {
                        tokio::spawn(fetch_poster(
                            catalog.clone(),
                            ui_tx.clone(),
                            movie_id,
                            poster_url,
                        ));
                    }
                    BackendCommand::Shutdown => break,
                }
            }
            info!("backend worker shutting down");
        });
        // Dropping the runtime cancels fetches that are still in flight.
    })
}

async fn fetch_popular_movies(catalog: Arc<dyn MovieCatalog>, ui_tx: Sender<UiEvent>) {
    match catalog.popular_movies().await {
        Ok(movies) => deliver(&ui_tx, UiEvent::CatalogLoaded(movies)),
        Err(err) => {
            let ui_error = UiError::from_catalog(UiErrorContext::CatalogFetch, &err);
            error!(
                kind = kind_label(ui_error.kind()),
                "catalog fetch failed: {}",
                ui_error.message()
            );
            deliver(&ui_tx, UiEvent::CatalogFailed(ui_error));
        }
    }
}

async fn fetch_poster(
    catalog: Arc<dyn MovieCatalog>,
    ui_tx: Sender<UiEvent>,
    movie_id: MovieId,
    poster_url: String,
) {
    let result = match catalog.poster_bytes(&poster_url).await {
        Ok(bytes) => tokio::task::spawn_blocking(move || decode_poster(&bytes))
            .await
            .unwrap_or_else(|err| Err(format!("poster decode task failed: {err}"))),
        Err(err) => Err(UiError::from_catalog(UiErrorContext::PosterFetch, &err)
            .message()
            .to_string()),
    };

    match result {
        Ok(image) => deliver(&ui_tx, UiEvent::PosterLoaded { movie_id, image }),
        Err(reason) => {
            warn!(movie_id = movie_id.0, %poster_url, "poster unavailable: {reason}");
            deliver(&ui_tx, UiEvent::PosterFailed { movie_id, reason });
        }
    }
}

fn deliver(ui_tx: &Sender<UiEvent>, event: UiEvent) {
    match ui_tx.try_send(event) {
        Ok(()) => {}
        Err(TrySendError::Full(_)) => warn!("ui event queue is full; dropping backend event"),
        Err(TrySendError::Disconnected(_)) => {
            debug!("ui has been torn down; discarding late backend result")
        }
    }
}
