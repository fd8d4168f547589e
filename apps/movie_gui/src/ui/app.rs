use std::collections::HashMap;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::MovieId;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{kind_label, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::{MovieListState, UiAction};
use crate::media::PreviewImage;
use crate::ui::{detail_overlay, grid};

pub const PAGE_HEADING: &str = "Movie List";

enum PosterState {
    Loading,
    Ready {
        image: PreviewImage,
        texture: Option<egui::TextureHandle>,
    },
    Failed,
}

/// Root component: owns the movie sequence, the selection, and the poster cache.
pub struct MovieListApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    image_base_url: String,

    state: MovieListState,
    posters: HashMap<MovieId, PosterState>,
    mounted: bool,
    last_card_rects: Vec<egui::Rect>,
    last_overlay_rects: Option<detail_overlay::OverlayRects>,
}

impl MovieListApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        image_base_url: impl Into<String>,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            image_base_url: image_base_url.into(),
            state: MovieListState::new(),
            posters: HashMap::new(),
            mounted: false,
            last_card_rects: Vec::new(),
            last_overlay_rects: None,
        }
    }

    pub fn state(&self) -> &MovieListState {
        &self.state
    }

    pub fn apply(&mut self, action: UiAction) {
        self.state.apply(action);
        if self.state.selected_movie().is_none() {
            self.last_overlay_rects = None;
        }
    }

    /// Where the card at `index` was drawn on the last frame.
    pub fn card_rect(&self, index: usize) -> Option<egui::Rect> {
        self.last_card_rects.get(index).copied()
    }

    /// Where the detail panel and its close button were drawn on the last frame, while open.
    pub fn overlay_rects(&self) -> Option<detail_overlay::OverlayRects> {
        self.last_overlay_rects
    }

    fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        if self.state.begin_load() {
            tracing::info!("movie list mounted; requesting popular movies");
            dispatch_backend_command(&self.cmd_tx, BackendCommand::FetchPopularMovies);
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::CatalogLoaded(movies) => {
                    if self.state.apply_catalog_loaded(movies) {
                        tracing::info!(count = self.state.movies().len(), "movie list loaded");
                        self.request_posters();
                    }
                }
                UiEvent::CatalogFailed(err) => {
                    tracing::debug!(
                        context = ?err.context(),
                        kind = kind_label(err.kind()),
                        "movie list left empty after failed load"
                    );
                    self.state.apply_catalog_failed(err.kind());
                }
                UiEvent::PosterLoaded { movie_id, image } => {
                    self.posters.insert(
                        movie_id,
                        PosterState::Ready {
                            image,
                            texture: None,
                        },
                    );
                }
                UiEvent::PosterFailed { movie_id, reason } => {
                    tracing::debug!(movie_id = movie_id.0, %reason, "poster left blank");
                    self.posters.insert(movie_id, PosterState::Failed);
                }
            }
        }
    }

    fn request_posters(&mut self) {
        for movie in self.state.movies() {
            let Some(poster_url) = movie.poster_url(&self.image_base_url) else {
                continue;
            };
            if dispatch_backend_command(
                &self.cmd_tx,
                BackendCommand::FetchPoster {
                    movie_id: movie.id,
                    poster_url,
                },
            ) {
                self.posters.insert(movie.id, PosterState::Loading);
            }
        }
    }

    fn upload_pending_textures(&mut self, ctx: &egui::Context) {
        for (movie_id, poster) in &mut self.posters {
            if let PosterState::Ready { image, texture } = poster {
                if texture.is_none() {
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(
                        [image.width, image.height],
                        &image.rgba,
                    );
                    *texture = Some(ctx.load_texture(
                        format!("poster:{}", movie_id.0),
                        color_image,
                        egui::TextureOptions::LINEAR,
                    ));
                }
            }
        }
    }

    pub(crate) fn poster_texture(&self, movie_id: MovieId) -> Option<egui::TextureHandle> {
        match self.posters.get(&movie_id)? {
            PosterState::Ready { texture, .. } => texture.clone(),
            PosterState::Loading | PosterState::Failed => None,
        }
    }

    /// Renders one frame. Split from `eframe::App::update` so it can run headless.
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.mount();
        self.process_ui_events();
        self.upload_pending_textures(ctx);

        let mut grid_response = grid::GridResponse::default();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(PAGE_HEADING);
            ui.add_space(8.0);
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let cards = grid::card_views(self.state.movies());
                    grid_response = grid::show(ui, &cards, |id| self.poster_texture(id));
                });
        });
        self.last_card_rects = grid_response.card_rects;
        if let Some(index) = grid_response.clicked {
            self.apply(UiAction::CardClicked(index));
        }

        let Some(selected) = self.state.selected_movie() else {
            return;
        };
        let poster = self.poster_texture(selected.id);
        let view = detail_overlay::DetailView::new(selected);
        let outcome = detail_overlay::show(ctx, &view, poster.as_ref());
        self.last_overlay_rects = Some(outcome.rects);
        if let Some(reason) = outcome.dismissed {
            self.apply(UiAction::Dismiss(reason));
        }
    }
}

impl eframe::App for MovieListApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

impl Drop for MovieListApp {
    fn drop(&mut self) {
        tracing::info!("movie list torn down; stopping backend worker");
        dispatch_backend_command(&self.cmd_tx, BackendCommand::Shutdown);
    }
}
